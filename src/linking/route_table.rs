//! # Route Table
//!
//! Declarative linking config: which screens exist, how they nest and which
//! path each one answers to. Mirrors the shape apps write by hand:
//!
//! ```toml
//! initial_route_name = "Home"
//!
//! [screens.Home]
//! path = ""
//!
//! [screens.CentralPaneNavigator.screens.Report]
//! path = "r/:reportID"
//! ```
//!
//! A screen's full pattern is its ancestors' paths followed by its own.
//! Navigators without a `path` add nothing to their children's patterns.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::navigators::{CENTRAL_PANE_NAVIGATOR, RIGHT_MODAL_NAVIGATOR};

pub const HOME_SCREEN: &str = "Home";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct LinkingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_route_name: Option<String>,
    #[serde(default)]
    pub screens: BTreeMap<String, ScreenConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ScreenConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_route_name: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub screens: BTreeMap<String, ScreenConfig>,
}

impl ScreenConfig {
    pub fn at(path: &str) -> Self {
        Self {
            path: Some(path.to_string()),
            ..Default::default()
        }
    }

    pub fn navigator<'a>(screens: impl IntoIterator<Item = (&'a str, ScreenConfig)>) -> Self {
        Self {
            screens: screens
                .into_iter()
                .map(|(name, config)| (name.to_string(), config))
                .collect(),
            ..Default::default()
        }
    }
}

impl LinkingConfig {
    /// Route table of the app's own navigators.
    pub fn app_default() -> Self {
        let central = ScreenConfig::navigator([("Report", ScreenConfig::at("r/:reportID"))]);

        let right_modal = ScreenConfig::navigator([
            (
                "Settings",
                ScreenConfig::navigator([
                    ("SettingsRoot", ScreenConfig::at("settings")),
                    ("Profile", ScreenConfig::at("settings/profile")),
                    ("Security", ScreenConfig::at("settings/security")),
                ]),
            ),
            (
                "Search",
                ScreenConfig::navigator([("SearchRoot", ScreenConfig::at("search"))]),
            ),
            (
                "Report_Details",
                ScreenConfig::navigator([(
                    "Report_Details_Root",
                    ScreenConfig::at("r/:reportID/details"),
                )]),
            ),
            (
                "Participants",
                ScreenConfig::navigator([(
                    "ReportParticipants_Root",
                    ScreenConfig::at("r/:reportID/participants"),
                )]),
            ),
        ]);

        Self {
            initial_route_name: Some(HOME_SCREEN.to_string()),
            screens: BTreeMap::from([
                (HOME_SCREEN.to_string(), ScreenConfig::at("")),
                (CENTRAL_PANE_NAVIGATOR.to_string(), central),
                (RIGHT_MODAL_NAVIGATOR.to_string(), right_modal),
            ]),
        }
    }

    /// Config of the screen reached through `chain`, root first.
    pub fn screen<S: AsRef<str>>(&self, chain: &[S]) -> Option<&ScreenConfig> {
        let (first, rest) = chain.split_first()?;
        let mut config = self.screens.get(first.as_ref())?;
        for name in rest {
            config = config.screens.get(name.as_ref())?;
        }
        Some(config)
    }

    /// Initial route of the navigator reached through `chain`; the root
    /// navigator for an empty chain.
    pub fn initial_route_for<S: AsRef<str>>(&self, chain: &[S]) -> Option<&str> {
        if chain.is_empty() {
            return self.initial_route_name.as_deref();
        }
        self.screen(chain)?.initial_route_name.as_deref()
    }

    /// Every matchable pattern, most specific first.
    pub fn patterns(&self) -> Vec<RoutePattern> {
        let mut patterns = Vec::new();
        for (name, config) in &self.screens {
            collect_patterns(name, config, &mut Vec::new(), &mut Vec::new(), &mut patterns);
        }
        patterns.sort_by(RoutePattern::specificity);
        patterns
    }
}

fn collect_patterns(
    name: &str,
    config: &ScreenConfig,
    chain: &mut Vec<String>,
    segments: &mut Vec<PatternSegment>,
    out: &mut Vec<RoutePattern>,
) {
    let depth = chain.len();
    chain.push(name.to_string());
    let inherited = segments.len();

    if let Some(path) = &config.path {
        segments.extend(path.split('/').filter(|s| !s.is_empty()).map(|part| {
            match part.strip_prefix(':') {
                Some(param) => PatternSegment::Param {
                    name: param.to_string(),
                    owner: depth,
                },
                None => PatternSegment::Static(part.to_string()),
            }
        }));
        out.push(RoutePattern {
            screens: chain.clone(),
            segments: segments.clone(),
        });
    }

    for (child, child_config) in &config.screens {
        collect_patterns(child, child_config, chain, segments, out);
    }

    segments.truncate(inherited);
    chain.pop();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    Static(String),
    /// `:name`, owned by the screen at `owner` in the pattern's chain.
    Param { name: String, owner: usize },
}

/// A fully expanded path pattern and the screen chain it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    pub screens: Vec<String>,
    pub segments: Vec<PatternSegment>,
}

impl RoutePattern {
    /// Static segments beat params at the first position they differ; longer
    /// patterns go first otherwise.
    fn specificity(a: &RoutePattern, b: &RoutePattern) -> Ordering {
        for (x, y) in a.segments.iter().zip(&b.segments) {
            match (x, y) {
                (PatternSegment::Static(_), PatternSegment::Param { .. }) => return Ordering::Less,
                (PatternSegment::Param { .. }, PatternSegment::Static(_)) => return Ordering::Greater,
                _ => {}
            }
        }
        b.segments.len().cmp(&a.segments.len())
    }

    /// Param values keyed by owning screen, or `None` if `parts` don't match.
    pub fn captures<'p>(&self, parts: &[&'p str]) -> Option<Vec<(usize, &str, &'p str)>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                PatternSegment::Static(expected) if expected.as_str() == *part => {}
                PatternSegment::Static(_) => return None,
                PatternSegment::Param { name, owner } => captured.push((*owner, name.as_str(), *part)),
            }
        }
        Some(captured)
    }
}
