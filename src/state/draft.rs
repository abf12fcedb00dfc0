//! Submittable post text.

// ===== PostText =====

/// Validated post text. Never blank.
///
/// Smart constructor enforces that the text has at least one non-whitespace
/// character. The text itself is kept exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostText(String);

impl PostText {
    /// Returns `None` if the text is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Borrow the text as entered.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned text.
    pub fn into_inner(self) -> String {
        self.0
    }
}
