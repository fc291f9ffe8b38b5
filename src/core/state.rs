//! # Navigation State
//!
//! The nested navigation tree, as the runtime hands it to us and as the
//! path resolver produces it. This module is read-only data: nothing here
//! mutates a live tree, resolution only ever builds new actions from it.
//!
//! ```text
//! NavigationState
//! ├── key: Option<String>            // navigator key (None for path-derived trees)
//! ├── index: usize                   // active route
//! └── routes: Vec<Route>
//!     ├── key: Option<String>
//!     ├── name: String               // screen or navigator name
//!     ├── params: Option<Params>     // open payload + nested screen chain
//!     └── state: Option<NavigationState>  // set when the route is a navigator
//! ```
//!
//! `index` always points into `routes` for a well-formed tree. Lookups still
//! return `Option` so a bad tree ends resolution instead of panicking.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::navigators::{NavigatorRole, REPORT_ID_PARAM};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default)]
    pub index: usize,
    pub routes: Vec<Route>,
}

impl NavigationState {
    /// Creates a stack with the last route active.
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            key: None,
            index: routes.len().saturating_sub(1),
            routes,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[cfg(test)]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn active_route(&self) -> Option<&Route> {
        self.routes.get(self.index)
    }

    /// The route on top of the stack, regardless of `index`.
    pub fn last_route(&self) -> Option<&Route> {
        self.routes.last()
    }

    /// Follows active routes down to the innermost screen.
    #[cfg(test)]
    pub fn deepest_active_route(&self) -> Option<&Route> {
        self.active_route().map(Route::deepest_active)
    }

    /// Identifier of the report shown by the topmost central pane.
    ///
    /// Picks the last central pane route at this level (the active route when
    /// there is none), descends to its deepest active screen and reads the
    /// `reportID` param. A navigator that has not mounted its state yet only
    /// names its screen through `params`, so that chain is followed too.
    /// `None` stands for "no report".
    pub fn topmost_report_id(&self) -> Option<String> {
        let route = self
            .routes
            .iter()
            .rfind(|route| NavigatorRole::CentralPane.is(&route.name))
            .or_else(|| self.active_route())?
            .deepest_active();

        route
            .params
            .as_ref()?
            .deepest()?
            .get(REPORT_ID_PARAM)
            .and_then(param_as_id)
    }
}

/// Report ids arrive as strings from paths and as numbers from some live
/// trees; both compare by their string form.
fn param_as_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Params>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NavigationState>,
}

impl Route {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            key: None,
            name: name.into(),
            params: None,
            state: None,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_state(mut self, state: NavigationState) -> Self {
        self.state = Some(state);
        self
    }

    #[cfg(test)]
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.as_ref().and_then(|p| p.get(key))
    }

    /// This route, or the innermost active route of its nested navigators.
    pub fn deepest_active(&self) -> &Route {
        let mut route = self;
        while let Some(child) = route.state.as_ref().and_then(NavigationState::active_route) {
            route = child;
        }
        route
    }
}

/// Route and action params.
///
/// `values` holds the screen's own payload (`reportID`, query params, ...).
/// The typed fields describe nested navigation: `screen` names the child to
/// show inside the navigator this action targets, `params` are that child's
/// params, and so on down the chain.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Params {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Box<Params>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NavigationState>,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}

impl Params {
    pub fn from_values(values: Map<String, Value>) -> Self {
        Self {
            values,
            ..Default::default()
        }
    }

    /// Params that show `screen` inside the targeted navigator.
    pub fn nested(screen: impl Into<String>, params: Option<Params>) -> Self {
        Self {
            screen: Some(screen.into()),
            params: params.map(Box::new),
            ..Default::default()
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self == &Params::default()
    }

    /// Params of the innermost screen named through the `screen`/`params`
    /// chain. `None` when a named screen carries no params.
    pub fn deepest(&self) -> Option<&Params> {
        let mut params = self;
        while params.screen.is_some() {
            params = params.params.as_deref()?;
        }
        Some(params)
    }
}
