//! # Core Resolution Logic
//!
//! This module turns deep links into navigation actions.
//! It knows nothing about any specific UI runtime or route table format.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (live tree)    │
//!                    │  • Action (commands)    │
//!                    │  • link_to() (resolve)  │
//!                    │                         │
//!                    │  Reads. Never mutates.  │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │   Path     │      │  Action    │      │ Dispatcher │
//!     │  Resolver  │      │  Deriver   │      │  (runtime) │
//!     │ (linking)  │      │ (linking)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `NavigationState` and `Route`, the tree we read
//! - [`action`]: `NavigationAction`, everything we can ask the navigator to do
//! - [`navigators`]: navigator names that drive classification
//! - [`tree`]: mounted navigators with parent links
//! - [`classify`]: NAVIGATE → PUSH / REPLACE escalation
//! - [`minimal`]: narrowing right-modal actions to the deepest navigator
//! - [`link`]: `link_to()` and the collaborator traits
//! - [`config`]: layered settings for the binary

pub mod action;
pub mod classify;
pub mod config;
pub mod link;
pub mod minimal;
pub mod navigators;
pub mod state;
pub mod tree;

// Re-export commonly used types for convenience
pub use action::{ActionType, Intent, NavigationAction};
pub use link::{link_to, ActionDeriver, Dispatcher, LinkError, Outcome, PathStateResolver, UnresolvablePath};
pub use state::{NavigationState, Params, Route};
pub use tree::{NavigatorHandle, NavigatorTree};
