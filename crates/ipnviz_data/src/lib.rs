//! Snapshot data model shared by the scene pipeline, the recording reader and
//! the browser bindings.
//!
//! Field names serialize in camelCase so snapshots emitted by the JavaScript
//! host deserialize without a translation layer.

pub mod data;
pub mod time;

pub use data::body::BodyKind;
pub use data::geometry::{NodePair, Point3};
pub use data::snapshot::{BodySetup, BodyState, NodeSetup, NodeState, SetupSnapshot, TickSnapshot};
pub use time::format_time;
