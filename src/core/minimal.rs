//! # Minimal Actions
//!
//! A derived action always starts at the root: "navigate RightModalNavigator,
//! screen Settings, params { screen Profile }". When the right modal is
//! already showing Settings, dispatching that replaces the whole modal stack
//! and browser back stops making sense. Instead we walk the live tree along
//! the action's nested screen chain for as long as it matches, and dispatch
//! the remaining tail against the deepest navigator we reached.
//!
//! ```text
//! live:   root ─▶ RightModalNavigator ─▶ Settings ─▶ [Profile]
//! action: RightModalNavigator / Settings / Security
//! result: NAVIGATE Security, target = Settings navigator key
//! ```
//!
//! Params sitting beside `screen` at a level we descend through are dropped.
//! Only the nested `{screen, params}` chain survives.

use log::debug;

use crate::core::action::{NavigationAction, ScreenPayload};
use crate::core::navigators::NavigatorRole;
use crate::core::state::NavigationState;

#[derive(Debug, Clone, PartialEq)]
pub struct MinimalAction {
    pub action: NavigationAction,
    /// Name of the last live route we descended into.
    pub target_name: String,
}

/// Narrows `action` against `root` as far as the live tree allows.
///
/// Returns `None` when the first level already differs, meaning the action
/// has to be dispatched as it is. RESET actions are never narrowed.
pub fn find_minimal_action(action: &NavigationAction, root: &NavigationState) -> Option<MinimalAction> {
    let mut current = action.clone();
    let mut state = root;
    let mut target_name = None;

    loop {
        let Some(screen) = current.screen() else { break };
        let Some(route) = state.active_route() else { break };
        if route.name != screen.payload.name {
            break;
        }
        // Already on this screen with nothing nested to show.
        let Some(nested) = route.state.as_ref() else { break };
        let Some(params) = screen.payload.params.as_ref() else { break };
        let Some(name) = params.screen.clone() else { break };

        let payload = ScreenPayload {
            name,
            params: params.params.as_deref().cloned(),
        };
        target_name = Some(route.name.clone());
        state = nested;
        current = current.retarget(payload, nested.key.clone());
    }

    target_name.map(|target_name| MinimalAction {
        action: current,
        target_name,
    })
}

/// Minimal action ready to dispatch.
///
/// When the walk stopped right below the right modal, the link switches
/// between flows inside the open overlay, so the result becomes REPLACE.
pub fn minimal_action(action: &NavigationAction, root: &NavigationState) -> Option<NavigationAction> {
    let MinimalAction { action, target_name } = find_minimal_action(action, root)?;
    debug!(
        "Minimal {} {:?} against {:?} (below {})",
        action.kind(),
        action.payload_name(),
        action.target(),
        target_name
    );

    if NavigatorRole::RightModal.is(&target_name) {
        Some(action.into_replace())
    } else {
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{ActionType, ScreenAction};
    use crate::core::navigators::RIGHT_MODAL_NAVIGATOR;
    use crate::core::state::{Params, Route};
    use crate::test_support::{home_tree, overlay_settings_tree};

    fn modal_action(flow: &str, screen: Option<&str>) -> NavigationAction {
        let inner = screen.map(|s| Params::nested(s, None));
        NavigationAction::navigate(RIGHT_MODAL_NAVIGATOR, Some(Params::nested(flow, inner)))
    }

    #[test]
    fn test_descends_into_open_flow() {
        let live = overlay_settings_tree();
        let minimal = find_minimal_action(&modal_action("Settings", Some("Security")), &live).unwrap();

        assert_eq!(minimal.target_name, "Settings");
        assert_eq!(minimal.action.kind(), ActionType::Navigate);
        assert_eq!(minimal.action.target(), Some("settings-nav"));
        assert_eq!(
            minimal.action.screen().map(|s| &s.payload),
            Some(&ScreenPayload {
                name: "Security".to_string(),
                params: None,
            })
        );
    }

    #[test]
    fn test_flow_switch_inside_modal_replaces() {
        let live = overlay_settings_tree();
        let action = modal_action("Search", Some("SearchRoot"));

        let minimal = find_minimal_action(&action, &live).unwrap();
        assert_eq!(minimal.target_name, RIGHT_MODAL_NAVIGATOR);
        assert_eq!(minimal.action.target(), Some("rhp-nav"));
        assert_eq!(minimal.action.payload_name(), Some("Search"));

        let dispatched = minimal_action(&action, &live).unwrap();
        assert_eq!(dispatched.kind(), ActionType::Replace);
    }

    #[test]
    fn test_keeps_push_type_when_descending() {
        let live = overlay_settings_tree();
        let action = match modal_action("Settings", Some("Security")) {
            NavigationAction::Navigate(screen) => NavigationAction::Push(screen),
            other => other,
        };
        let dispatched = minimal_action(&action, &live).unwrap();
        assert_eq!(dispatched.kind(), ActionType::Push);
        assert_eq!(dispatched.target(), Some("settings-nav"));
    }

    #[test]
    fn test_nothing_to_narrow_when_modal_closed() {
        let live = home_tree();
        assert!(find_minimal_action(&modal_action("Settings", None), &live).is_none());
        assert!(minimal_action(&modal_action("Settings", None), &live).is_none());
    }

    #[test]
    fn test_stops_at_leaf_route() {
        // Profile is active and has no nested navigator.
        let live = overlay_settings_tree();
        let action = NavigationAction::navigate(
            RIGHT_MODAL_NAVIGATOR,
            Some(Params::nested(
                "Settings",
                Some(Params::nested("Profile", Some(Params::nested("Deeper", None)))),
            )),
        );
        let minimal = find_minimal_action(&action, &live).unwrap();
        assert_eq!(minimal.target_name, "Settings");
        assert_eq!(minimal.action.payload_name(), Some("Profile"));
        assert_eq!(minimal.action.target(), Some("settings-nav"));
    }

    #[test]
    fn test_stops_without_nested_screen() {
        let live = overlay_settings_tree();
        let action = NavigationAction::navigate(RIGHT_MODAL_NAVIGATOR, None);
        assert!(find_minimal_action(&action, &live).is_none());
    }

    #[test]
    fn test_drops_params_beside_screen() {
        let live = overlay_settings_tree();
        let action = NavigationAction::navigate(
            RIGHT_MODAL_NAVIGATOR,
            Some(
                Params::nested(
                    "Settings",
                    Some(Params::nested(
                        "Security",
                        Some(Params::default().with_value("tab", "2fa")),
                    )),
                )
                .with_value("from", "banner"),
            ),
        );
        let minimal = find_minimal_action(&action, &live).unwrap();
        let params = minimal.action.screen().and_then(|s| s.payload.params.clone());
        assert_eq!(params, Some(Params::default().with_value("tab", "2fa")));
    }

    #[test]
    fn test_follows_index_not_last_route() {
        let settings = NavigationState::new(vec![Route::new("Profile")]).with_key("settings-nav");
        let modal = NavigationState::new(vec![
            Route::new("Settings").with_state(settings),
            Route::new("Search").with_state(NavigationState::new(vec![Route::new("SearchRoot")]).with_key("search-nav")),
        ])
        .with_key("rhp-nav")
        .with_index(0);
        let live = NavigationState::new(vec![
            Route::new("Home"),
            Route::new(RIGHT_MODAL_NAVIGATOR).with_state(modal),
        ])
        .with_key("root");

        let minimal = find_minimal_action(&modal_action("Settings", Some("Security")), &live).unwrap();
        assert_eq!(minimal.action.target(), Some("settings-nav"));
    }

    #[test]
    fn test_reset_is_never_narrowed() {
        let live = overlay_settings_tree();
        let reset = NavigationAction::reset(live.clone());
        assert!(find_minimal_action(&reset, &live).is_none());
        let replace = NavigationAction::Replace(ScreenAction::new("Home", None));
        assert!(find_minimal_action(&replace, &live).is_none());
    }
}
