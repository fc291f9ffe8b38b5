//! State → action, without looking at the live tree.
//!
//! A target tree that is a single chain of routes (optionally with the
//! navigator's initial route underneath) becomes one NAVIGATE whose params
//! nest `{screen, params, initial}` level by level. A root holding anything
//! else can only be expressed as RESET. A nested level holding anything else
//! is passed whole as `params.state`.

use crate::core::action::NavigationAction;
use crate::core::link::ActionDeriver;
use crate::core::state::{NavigationState, Route};
use crate::linking::route_table::LinkingConfig;

/// Routes up to and including the active one.
fn visible_routes(state: &NavigationState) -> Option<&[Route]> {
    state.routes.get(..=state.index)
}

/// How a level below the root can be folded into nested params.
enum Level<'a> {
    /// Only route, shown as the navigator's first screen.
    Initial(&'a Route),
    /// Initial route with one route pushed on top of it.
    AboveInitial(&'a Route),
    Irregular,
}

fn level<'a>(routes: &'a [Route], initial_route: Option<&str>) -> Level<'a> {
    match routes {
        [only] => Level::Initial(only),
        [first, top] if Some(first.name.as_str()) == initial_route => Level::AboveInitial(top),
        _ => Level::Irregular,
    }
}

impl ActionDeriver for LinkingConfig {
    /// `None` for an empty tree or an `index` past the end of `routes`.
    fn action_from_state(&self, state: &NavigationState) -> Option<NavigationAction> {
        let routes = visible_routes(state)?;
        let route = match level(routes, self.initial_route_name.as_deref()) {
            Level::Initial(route) | Level::AboveInitial(route) => route,
            Level::Irregular => return Some(NavigationAction::reset(state.clone())),
        };

        let mut chain = vec![route.name.as_str()];
        let mut root_params = route.params.clone().unwrap_or_default();
        let mut params = &mut root_params;
        let mut current = route.state.as_ref();

        while let Some(nested) = current {
            let routes = visible_routes(nested)?;

            params.initial = None;
            params.screen = None;
            params.params = None;
            params.state = None;

            let child = match level(routes, self.screen(&chain).and_then(|c| c.initial_route_name.as_deref())) {
                Level::Initial(child) => {
                    params.initial = Some(true);
                    child
                }
                Level::AboveInitial(child) => {
                    params.initial = Some(false);
                    child
                }
                Level::Irregular => {
                    params.state = Some(nested.clone());
                    break;
                }
            };
            params.screen = Some(child.name.clone());

            if child.state.is_none() {
                params.params = child.params.clone().map(Box::new);
                break;
            }
            params = params
                .params
                .insert(Box::new(child.params.clone().unwrap_or_default()))
                .as_mut();
            chain.push(child.name.as_str());
            current = child.state.as_ref();
        }

        let params = (!root_params.is_empty()).then_some(root_params);
        Some(NavigationAction::navigate(route.name.clone(), params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::ActionType;
    use crate::core::link::PathStateResolver;
    use serde_json::json;

    fn derive(path: &str) -> NavigationAction {
        let config = LinkingConfig::app_default();
        let state = config.state_from_path(path).unwrap();
        config.action_from_state(&state).unwrap()
    }

    #[test]
    fn test_report_path_navigates_central_pane() {
        let action = derive("/r/42");
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({
                "type": "NAVIGATE",
                "payload": {
                    "name": "CentralPaneNavigator",
                    "params": {
                        "initial": true,
                        "screen": "Report",
                        "params": {"reportID": "42"}
                    }
                }
            })
        );
    }

    #[test]
    fn test_modal_path_nests_every_level() {
        let action = derive("/settings/security");
        let screen = action.screen().unwrap();
        assert_eq!(screen.payload.name, "RightModalNavigator");
        let level1 = screen.payload.params.as_ref().unwrap();
        assert_eq!(level1.screen.as_deref(), Some("Settings"));
        let level2 = level1.params.as_deref().unwrap();
        assert_eq!(level2.screen.as_deref(), Some("Security"));
        assert_eq!(level2.initial, Some(true));
        assert!(level2.params.is_none());
    }

    #[test]
    fn test_home_has_no_params() {
        let action = derive("/");
        assert_eq!(action, NavigationAction::navigate("Home", None));
    }

    #[test]
    fn test_nested_initial_route_marks_not_initial() {
        let mut config = LinkingConfig::app_default();
        if let Some(settings) = config
            .screens
            .get_mut("RightModalNavigator")
            .and_then(|rhp| rhp.screens.get_mut("Settings"))
        {
            settings.initial_route_name = Some("SettingsRoot".to_string());
        }
        let state = config.state_from_path("/settings/profile").unwrap();
        let action = config.action_from_state(&state).unwrap();
        let level2 = action
            .screen()
            .and_then(|s| s.payload.params.as_ref())
            .and_then(|p| p.params.as_deref())
            .unwrap();
        assert_eq!(level2.screen.as_deref(), Some("Profile"));
        assert_eq!(level2.initial, Some(false));
    }

    #[test]
    fn test_irregular_root_resets() {
        let config = LinkingConfig::app_default();
        let state = NavigationState::new(vec![Route::new("A"), Route::new("B"), Route::new("C")]);
        let action = config.action_from_state(&state).unwrap();
        assert_eq!(action.kind(), ActionType::Reset);
    }

    #[test]
    fn test_keyed_single_route_still_navigates() {
        let config = LinkingConfig::app_default();
        let state = NavigationState::new(vec![Route::new("Home").with_key("home")]);
        let action = config.action_from_state(&state).unwrap();
        assert_eq!(action, NavigationAction::navigate("Home", None));
    }

    #[test]
    fn test_irregular_nested_level_passes_state() {
        let config = LinkingConfig::app_default();
        let nested = NavigationState::new(vec![Route::new("X"), Route::new("Y")]);
        let state = NavigationState::new(vec![Route::new("Nav").with_state(nested.clone())]);
        let action = config.action_from_state(&state).unwrap();
        let params = action.screen().and_then(|s| s.payload.params.clone()).unwrap();
        assert_eq!(params.state, Some(nested));
        assert!(params.screen.is_none());
    }

    #[test]
    fn test_empty_state_has_no_action() {
        let config = LinkingConfig::app_default();
        assert!(config.action_from_state(&NavigationState::new(Vec::new())).is_none());
    }
}
