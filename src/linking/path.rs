//! Path → state, driven by the route table.
//!
//! `/r/123/details?tab=2` becomes
//!
//! ```text
//! [Home, RightModalNavigator]
//!           └── [Report_Details]
//!                      └── [Report_Details_Root { reportID: "123", tab: "2" }]
//! ```
//!
//! `Home` is inserted because it is the root's initial route. Produced trees
//! carry no keys; keys belong to mounted navigators.

use log::debug;
use serde_json::{Map, Value};

use crate::core::link::{PathStateResolver, UnresolvablePath};
use crate::core::state::{NavigationState, Params, Route};
use crate::linking::route_table::{LinkingConfig, RoutePattern};

impl PathStateResolver for LinkingConfig {
    fn state_from_path(&self, path: &str) -> Result<NavigationState, UnresolvablePath> {
        let (route_path, query) = match path.split_once('?') {
            Some((route_path, query)) => (route_path, Some(query)),
            None => (path, None),
        };
        let parts: Vec<&str> = route_path.split('/').filter(|s| !s.is_empty()).collect();

        for pattern in self.patterns() {
            if let Some(captures) = pattern.captures(&parts) {
                debug!("'{}' matched {}", path, pattern.screens.join("/"));
                return Ok(self.build_state(&pattern, &captures, query));
            }
        }

        Err(UnresolvablePath::new(path))
    }
}

impl LinkingConfig {
    fn build_state(
        &self,
        pattern: &RoutePattern,
        captures: &[(usize, &str, &str)],
        query: Option<&str>,
    ) -> NavigationState {
        let mut params: Vec<Map<String, Value>> = vec![Map::new(); pattern.screens.len()];
        for (owner, name, value) in captures {
            params[*owner].insert(name.to_string(), Value::String(value.to_string()));
        }
        if let (Some(query), Some(leaf)) = (query, params.last_mut()) {
            for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
                leaf.insert(key.into_owned(), Value::String(value.into_owned()));
            }
        }

        // Build leaf-first so each level can wrap the one below it.
        let mut child: Option<NavigationState> = None;
        for (depth, values) in params.into_iter().enumerate().rev() {
            let name = &pattern.screens[depth];
            let mut route = Route::new(name.as_str());
            if !values.is_empty() {
                route.params = Some(Params::from_values(values));
            }
            route.state = child.take();

            let mut routes = Vec::with_capacity(2);
            if let Some(initial) = self.initial_route_for(&pattern.screens[..depth])
                && initial != name.as_str()
            {
                routes.push(Route::new(initial));
            }
            routes.push(route);
            child = Some(NavigationState::new(routes));
        }

        child.unwrap_or_default()
    }
}
