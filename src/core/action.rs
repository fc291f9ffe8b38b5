//! # Actions
//!
//! Everything resolution can ask the navigator to do becomes a
//! `NavigationAction`. Actions are values: classifying or minimizing one
//! builds a new action, the old one is never edited in place.
//!
//! ```text
//! NAVIGATE  { payload: { name, params }, target }   // go to, reuse if present
//! PUSH      { payload: { name, params }, target }   // add a history entry
//! REPLACE   { payload: { name, params }, target }   // swap the current entry
//! RESET     { payload: NavigationState,  target }   // replace the whole tree
//! ```
//!
//! `target` is the key of the navigator the action is dispatched against.
//! `None` means the navigator that receives the dispatch handles it.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::state::{NavigationState, Params};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    Navigate,
    Push,
    Replace,
    Reset,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionType::Navigate => "NAVIGATE",
            ActionType::Push => "PUSH",
            ActionType::Replace => "REPLACE",
            ActionType::Reset => "RESET",
        };
        f.write_str(s)
    }
}

/// Why a link is being followed, when the caller knows more than the path.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Intent {
    /// Back control inside a deep-linked flow: show the previous logical
    /// screen and keep the pre-link screen as the next back target.
    Up,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScreenPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScreenAction {
    pub payload: ScreenPayload,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl ScreenAction {
    pub fn new(name: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            payload: ScreenPayload {
                name: name.into(),
                params,
            },
            target: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResetAction {
    pub payload: NavigationState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum NavigationAction {
    Navigate(ScreenAction),
    Push(ScreenAction),
    Replace(ScreenAction),
    Reset(ResetAction),
}

impl NavigationAction {
    pub fn navigate(name: impl Into<String>, params: Option<Params>) -> Self {
        NavigationAction::Navigate(ScreenAction::new(name, params))
    }

    pub fn reset(state: NavigationState) -> Self {
        NavigationAction::Reset(ResetAction {
            payload: state,
            target: None,
        })
    }

    pub fn kind(&self) -> ActionType {
        match self {
            NavigationAction::Navigate(_) => ActionType::Navigate,
            NavigationAction::Push(_) => ActionType::Push,
            NavigationAction::Replace(_) => ActionType::Replace,
            NavigationAction::Reset(_) => ActionType::Reset,
        }
    }

    /// The screen payload, for every type except RESET.
    pub fn screen(&self) -> Option<&ScreenAction> {
        match self {
            NavigationAction::Navigate(action)
            | NavigationAction::Push(action)
            | NavigationAction::Replace(action) => Some(action),
            NavigationAction::Reset(_) => None,
        }
    }

    pub fn payload_name(&self) -> Option<&str> {
        self.screen().map(|action| action.payload.name.as_str())
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            NavigationAction::Navigate(action)
            | NavigationAction::Push(action)
            | NavigationAction::Replace(action) => action.target.as_deref(),
            NavigationAction::Reset(action) => action.target.as_deref(),
        }
    }

    /// Same type, new payload and target. RESET is returned unchanged.
    pub fn retarget(self, payload: ScreenPayload, target: Option<String>) -> Self {
        let rebuilt = ScreenAction { payload, target };
        match self {
            NavigationAction::Navigate(_) => NavigationAction::Navigate(rebuilt),
            NavigationAction::Push(_) => NavigationAction::Push(rebuilt),
            NavigationAction::Replace(_) => NavigationAction::Replace(rebuilt),
            reset @ NavigationAction::Reset(_) => reset,
        }
    }

    /// Rebuilds a screen action as REPLACE. RESET is returned unchanged.
    pub fn into_replace(self) -> Self {
        match self {
            NavigationAction::Navigate(action)
            | NavigationAction::Push(action)
            | NavigationAction::Replace(action) => NavigationAction::Replace(action),
            reset @ NavigationAction::Reset(_) => reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Route;
    use serde_json::json;

    #[test]
    fn test_action_serializes_with_type_tag() {
        let action = NavigationAction::navigate(
            "RightModalNavigator",
            Some(Params::nested("Settings", None)),
        );
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "NAVIGATE",
                "payload": {"name": "RightModalNavigator", "params": {"screen": "Settings"}}
            })
        );
    }

    #[test]
    fn test_reset_action_parses() {
        let action: NavigationAction = serde_json::from_value(json!({
            "type": "RESET",
            "payload": {"index": 0, "routes": [{"name": "Home"}]}
        }))
        .unwrap();
        assert_eq!(action.kind(), ActionType::Reset);
        assert!(action.screen().is_none());
        assert_eq!(action.payload_name(), None);
    }

    #[test]
    fn test_retarget_keeps_type() {
        let push = NavigationAction::Push(ScreenAction::new("A", None));
        let rebuilt = push.retarget(
            ScreenPayload {
                name: "B".to_string(),
                params: None,
            },
            Some("nav-1".to_string()),
        );
        assert_eq!(rebuilt.kind(), ActionType::Push);
        assert_eq!(rebuilt.payload_name(), Some("B"));
        assert_eq!(rebuilt.target(), Some("nav-1"));
    }

    #[test]
    fn test_into_replace_leaves_reset_alone() {
        let reset = NavigationAction::reset(NavigationState::new(vec![Route::new("Home")]));
        assert_eq!(reset.clone().into_replace(), reset);

        let navigate = NavigationAction::navigate("A", None);
        assert_eq!(navigate.into_replace().kind(), ActionType::Replace);
    }

    #[test]
    fn test_action_type_display() {
        assert_eq!(ActionType::Replace.to_string(), "REPLACE");
        assert_eq!(NavigationAction::navigate("A", None).kind().to_string(), "NAVIGATE");
    }
}
