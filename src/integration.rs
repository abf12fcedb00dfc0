//! Pure core integration functions.
//!
//! Glue between the resolved configuration and the core: building the
//! session state the event loop starts from, and parsing viewport sizes for
//! `--layout`. Everything here is testable without a terminal.

use crate::config::ResolvedConfig;
use crate::model::{AppError, SeedData};
use crate::state::{Action, AppState, NavState};
use tracing::info;

/// Build the starting session state from configuration.
///
/// The demo dataset is seeded with the configured user name, navigation
/// state and notice capacity. A non-empty `initial_filter` is applied to
/// the chat contacts.
///
/// # Errors
///
/// Fails only if the seed data carries an invalid id.
pub fn initial_state(
    config: &ResolvedConfig,
    initial_filter: Option<&str>,
) -> Result<AppState, AppError> {
    let mut seed = SeedData::demo()?;
    seed.user = seed.user.renamed(config.user_name.as_str());

    let mut state = AppState::new(seed, config.notice_capacity);
    state.nav = NavState::new(
        config.active_path.as_str(),
        config.active_nav,
        config.explore_expanded,
    );

    if let Some(filter) = initial_filter.filter(|f| !f.is_empty()) {
        state.dispatch(Action::SetContactFilter(filter.to_string()));
    }

    info!(
        user = %state.user().name(),
        posts = state.controller().posts().len(),
        contacts = state.controller().visible_contacts().len(),
        "Session state seeded"
    );

    Ok(state)
}

/// Parse a `WIDTHxHEIGHT` viewport such as `1920x1080`.
///
/// Accepts `x` or `X` as the separator and surrounding whitespace.
///
/// # Errors
///
/// [`AppError::InvalidViewport`] when either side is missing or not a
/// non-negative integer.
pub fn parse_viewport(raw: &str) -> Result<(u32, u32), AppError> {
    let invalid = || AppError::InvalidViewport(raw.to_string());
    let (width, height) = raw
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;
    let width = width.trim().parse().map_err(|_| invalid())?;
    let height = height.trim().parse().map_err(|_| invalid())?;
    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeaderNav;

    // ===== initial_state Tests =====

    #[test]
    fn default_config_seeds_demo_session() {
        let state = initial_state(&ResolvedConfig::default(), None).unwrap();
        assert_eq!(state.user().name(), "Olenna Mason");
        assert_eq!(state.controller().posts().len(), 3);
        assert_eq!(state.controller().visible_contacts().len(), 6);
        assert_eq!(state.nav.active_path(), "/news-feed");
    }

    #[test]
    fn configured_user_and_nav_are_applied() {
        let config = ResolvedConfig {
            user_name: "Jon Snow".to_string(),
            active_path: "/watch".to_string(),
            active_nav: HeaderNav::Friends,
            explore_expanded: true,
            ..ResolvedConfig::default()
        };
        let state = initial_state(&config, None).unwrap();

        assert_eq!(state.user().name(), "Jon Snow");
        assert_eq!(state.user().composer_prompt(), "What's on your mind, Jon?");
        assert_eq!(state.nav.active_path(), "/watch");
        assert_eq!(state.nav.active_nav(), HeaderNav::Friends);
        assert!(state.nav.explore_expanded());
    }

    #[test]
    fn initial_filter_narrows_contacts() {
        let state = initial_state(&ResolvedConfig::default(), Some("LL")).unwrap();
        let names: Vec<String> = state
            .controller()
            .visible_contacts()
            .iter()
            .map(|c| c.display_name().to_string())
            .collect();
        assert_eq!(names, vec!["Bob Williams", "Edward Cullen", "Fiona Gallagher"]);
    }

    #[test]
    fn empty_initial_filter_is_ignored() {
        let state = initial_state(&ResolvedConfig::default(), Some("")).unwrap();
        assert_eq!(state.notices().updates_received(), 0);
    }

    // ===== parse_viewport Tests =====

    #[test]
    fn parses_width_by_height() {
        assert_eq!(parse_viewport("1920x1080").unwrap(), (1920, 1080));
        assert_eq!(parse_viewport(" 800X600 ").unwrap(), (800, 600));
        assert_eq!(parse_viewport("0x0").unwrap(), (0, 0));
    }

    #[test]
    fn rejects_malformed_viewports() {
        for raw in ["1920", "x1080", "1920x", "wide x tall", "-1x10", "1920*1080"] {
            assert!(
                matches!(parse_viewport(raw), Err(AppError::InvalidViewport(_))),
                "{raw} should be rejected"
            );
        }
    }
}
