//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::navigators::{CENTRAL_PANE_NAVIGATOR, RIGHT_MODAL_NAVIGATOR};
use crate::core::state::{NavigationState, Params, Route};

/// A keyed stack with the last route active.
pub fn stack(key: &str, routes: Vec<Route>) -> NavigationState {
    NavigationState::new(routes).with_key(key)
}

/// `root: [Home]`
pub fn home_tree() -> NavigationState {
    stack("root", vec![Route::new("Home").with_key("home")])
}

/// `root: [CentralPaneNavigator: [Report { reportID }]]`
pub fn report_tree(report_id: &str) -> NavigationState {
    let report = Route::new("Report").with_params(Params::default().with_value("reportID", report_id));
    stack(
        "root",
        vec![Route::new(CENTRAL_PANE_NAVIGATOR).with_state(stack("central-nav", vec![report]))],
    )
}

/// `root: [Home, RightModalNavigator: [Settings: [Profile]]]`
///
/// Navigator keys: `root`, `rhp-nav`, `settings-nav`.
pub fn overlay_settings_tree() -> NavigationState {
    let settings = stack("settings-nav", vec![Route::new("Profile").with_key("profile")]);
    let modal = stack(
        "rhp-nav",
        vec![Route::new("Settings").with_key("settings").with_state(settings)],
    );
    stack(
        "root",
        vec![
            Route::new("Home").with_key("home"),
            Route::new(RIGHT_MODAL_NAVIGATOR).with_key("rhp").with_state(modal),
        ],
    )
}
