//! # Action Classification
//!
//! The action deriver only knows the target tree, so it always proposes
//! NAVIGATE. Here we look at the live tree as well and decide whether the
//! link should instead add a history entry (PUSH) or rewrite the current one
//! (REPLACE).
//!
//! Rules, checked in order for NAVIGATE only. First match wins:
//!
//! 1. Central pane target showing a different report than the live tree: PUSH.
//! 2. Caller intent is `Up`: REPLACE.
//! 3. Right modal target while the live root's top route is not the right
//!    modal: PUSH, a new overlay opens on top of the stack.
//!
//! Anything else stays NAVIGATE. PUSH, REPLACE and RESET pass through as-is.

use log::debug;

use crate::core::action::{Intent, NavigationAction};
use crate::core::navigators::NavigatorRole;
use crate::core::state::NavigationState;

/// Reclassifies a derived action against the live root state.
///
/// `target` is the tree the path resolved to; it is only consulted for the
/// report id of rule 1.
pub fn classify(
    action: NavigationAction,
    live_root: &NavigationState,
    target: &NavigationState,
    intent: Option<Intent>,
) -> NavigationAction {
    let screen = match action {
        NavigationAction::Navigate(screen) => screen,
        other => return other,
    };
    let name = screen.payload.name.as_str();

    if NavigatorRole::CentralPane.is(name) {
        let current = live_root.topmost_report_id();
        let wanted = target.topmost_report_id();
        if current != wanted {
            debug!("Report switch {:?} -> {:?}, escalating to PUSH", current, wanted);
            return NavigationAction::Push(screen);
        }
    }

    if intent == Some(Intent::Up) {
        debug!("UP intent for {}, escalating to REPLACE", name);
        return NavigationAction::Replace(screen);
    }

    if NavigatorRole::RightModal.is(name) {
        let top = live_root.last_route().map(|route| route.name.as_str());
        if !top.is_some_and(|top| NavigatorRole::RightModal.is(top)) {
            debug!("Opening right modal over {:?}, escalating to PUSH", top);
            return NavigationAction::Push(screen);
        }
    }

    NavigationAction::Navigate(screen)
}
