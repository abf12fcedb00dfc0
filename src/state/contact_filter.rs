//! Contact list filtering.

use crate::model::ChatContact;
use std::sync::Arc;

/// Contacts whose display name contains `query`, ignoring case.
///
/// Always computed from the canonical collection passed in; there is no
/// incremental narrowing. An empty query returns the input `Arc` itself, so
/// the full list comes back in its original order without copying.
pub fn filter_contacts(contacts: &Arc<[ChatContact]>, query: &str) -> Arc<[ChatContact]> {
    if query.is_empty() {
        return Arc::clone(contacts);
    }

    let query_lower = query.to_lowercase();
    contacts
        .iter()
        .filter(|c| c.name_matches(&query_lower))
        .cloned()
        .collect()
}
