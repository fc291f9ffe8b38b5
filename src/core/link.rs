//! # Link Resolution
//!
//! `link_to` turns a path into exactly one call on the dispatcher:
//!
//! ```text
//! path ──▶ PathStateResolver ──▶ target tree ──▶ ActionDeriver ──▶ action
//!                                      │                             │
//!                                      │         None ◀──────────────┤
//!                                      ▼                             ▼
//!                               reset(target)              classify (live root)
//!                                                                    │
//!                                      right modal target? ──▶ minimal_action
//!                                                                    │
//!                                               dispatch(minimal or classified)
//! ```
//!
//! Collaborators sit behind the traits below. Resolution is synchronous and
//! only reads the live tree; the dispatcher is the single place a change is
//! applied.

use std::fmt;

use log::{debug, info};

use crate::core::action::{Intent, NavigationAction};
use crate::core::classify::classify;
use crate::core::minimal::minimal_action;
use crate::core::navigators::NavigatorRole;
use crate::core::state::NavigationState;
use crate::core::tree::NavigatorHandle;

/// Turns a path into a navigation tree, independent of the live app.
pub trait PathStateResolver {
    fn state_from_path(&self, path: &str) -> Result<NavigationState, UnresolvablePath>;
}

/// Turns a target tree into an action, without knowledge of the live tree.
///
/// `None` means no incremental action can express the target.
pub trait ActionDeriver {
    fn action_from_state(&self, state: &NavigationState) -> Option<NavigationAction>;
}

/// Applies navigation to the live tree.
pub trait Dispatcher {
    fn dispatch(&mut self, action: NavigationAction);
    fn reset(&mut self, state: NavigationState);
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvablePath {
    pub path: String,
}

impl UnresolvablePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl fmt::Display for UnresolvablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no route matches path '{}'", self.path)
    }
}

impl std::error::Error for UnresolvablePath {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// No mounted navigator to resolve from. Nothing was dispatched.
    InvalidHandle,
    /// The path matched no route. Nothing was dispatched.
    UnresolvablePath(UnresolvablePath),
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::InvalidHandle => write!(
                f,
                "couldn't find a navigator; is the caller inside a screen in a navigator?"
            ),
            LinkError::UnresolvablePath(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinkError::InvalidHandle => None,
            LinkError::UnresolvablePath(e) => Some(e),
        }
    }
}

impl From<UnresolvablePath> for LinkError {
    fn from(e: UnresolvablePath) -> Self {
        LinkError::UnresolvablePath(e)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Which of the three possible calls `link_to` made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Narrowed action dispatched against a nested navigator.
    Minimal,
    /// Classified action dispatched against the root.
    Classified,
    /// No incremental action; the root was reset to the target tree.
    Reset,
}

/// Resolves `path` from the navigator behind `navigation` and dispatches the
/// result.
///
/// `linking` provides both the path resolver and the action deriver, since
/// both read the same route table.
pub fn link_to<L, D>(
    navigation: Option<NavigatorHandle<'_>>,
    path: &str,
    intent: Option<Intent>,
    linking: &L,
    dispatcher: &mut D,
) -> Result<Outcome, LinkError>
where
    L: PathStateResolver + ActionDeriver + ?Sized,
    D: Dispatcher + ?Sized,
{
    let navigation = navigation.ok_or(LinkError::InvalidHandle)?;
    let root = navigation.root();

    let state = linking.state_from_path(path)?;
    debug!("Resolved '{}' to {:?}", path, state);

    let Some(action) = linking.action_from_state(&state) else {
        info!("No incremental action for '{}', resetting root", path);
        dispatcher.reset(state);
        return Ok(Outcome::Reset);
    };

    let action = classify(action, root.state(), &state, intent);

    if action
        .payload_name()
        .is_some_and(|name| NavigatorRole::RightModal.is(name))
        && let Some(minimal) = minimal_action(&action, root.state())
    {
        info!(
            "'{}' -> {} {:?} on {:?}",
            path,
            minimal.kind(),
            minimal.payload_name(),
            minimal.target()
        );
        dispatcher.dispatch(minimal);
        return Ok(Outcome::Minimal);
    }

    info!("'{}' -> {} {:?} on root", path, action.kind(), action.payload_name());
    dispatcher.dispatch(action);
    Ok(Outcome::Classified)
}
