//! A dispatcher that only remembers what it was asked to do.
//!
//! The CLI prints the recorded calls, and tests assert on them. A real app
//! would hand the same calls to its navigation runtime.

use serde::Serialize;

use crate::core::action::NavigationAction;
use crate::core::link::Dispatcher;
use crate::core::state::NavigationState;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum DispatchCall {
    Dispatch { action: NavigationAction },
    Reset { state: NavigationState },
}

#[derive(Serialize, Debug, Default)]
pub struct RecordingDispatcher {
    pub calls: Vec<DispatchCall>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&DispatchCall> {
        self.calls.last()
    }
}

impl Dispatcher for RecordingDispatcher {
    fn dispatch(&mut self, action: NavigationAction) {
        self.calls.push(DispatchCall::Dispatch { action });
    }

    fn reset(&mut self, state: NavigationState) {
        self.calls.push(DispatchCall::Reset { state });
    }
}
