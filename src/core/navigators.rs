//! Well-known navigator names.
//!
//! Classification only ever compares route names against these roles, never
//! against ad-hoc strings.

pub const CENTRAL_PANE_NAVIGATOR: &str = "CentralPaneNavigator";
pub const RIGHT_MODAL_NAVIGATOR: &str = "RightModalNavigator";

/// Param carrying the conversation a central pane screen shows.
pub const REPORT_ID_PARAM: &str = "reportID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigatorRole {
    /// Primary content: reports and other conversational screens.
    CentralPane,
    /// Right-hand modal stack layered above the central pane.
    RightModal,
}

impl NavigatorRole {
    pub fn name(self) -> &'static str {
        match self {
            NavigatorRole::CentralPane => CENTRAL_PANE_NAVIGATOR,
            NavigatorRole::RightModal => RIGHT_MODAL_NAVIGATOR,
        }
    }

    pub fn is(self, name: &str) -> bool {
        self.name() == name
    }
}
