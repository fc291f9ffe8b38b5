//! # Linking
//!
//! The collaborators `link_to` talks to, backed by a declarative route
//! table. The core only sees them through `PathStateResolver`,
//! `ActionDeriver` and `Dispatcher`; apps with their own router swap these
//! out without touching resolution.

pub mod derive;
pub mod dispatch;
pub mod path;
pub mod route_table;

pub use dispatch::{DispatchCall, RecordingDispatcher};
pub use route_table::{LinkingConfig, ScreenConfig};
