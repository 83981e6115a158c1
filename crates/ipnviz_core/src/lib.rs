//! # ipnviz core
//!
//! Scene synchronization and animation pipeline for the network simulation
//! viewer.
//!
//! A [`SceneDriver`] is built once from a setup snapshot and then fed tick
//! snapshots. Each tick flows through the [`Composer`] to the node,
//! connection and body marker collections, which reconcile their retained
//! objects in the [`Scene`] against the tick. Cosmetic effects (trails,
//! splashes, link flashes) decay on top of that state. The render step is
//! read-only and produces a backend-neutral [`DrawList`].
//!
//! ## Example
//!
//! ```
//! use ipnviz_core::{SceneConfig, SceneDriver, Viewport};
//! use ipnviz_data::{NodePair, NodeSetup, Point3, SetupSnapshot, TickSnapshot};
//!
//! let setup = SetupSnapshot {
//!     nodes: vec![
//!         NodeSetup { id: 0, name: "a".into(), position: Point3::ORIGIN },
//!         NodeSetup { id: 1, name: "b".into(), position: Point3::new(1.0, 0.0, 0.0) },
//!     ],
//!     bodies: vec![],
//! };
//! let mut driver = SceneDriver::setup(&setup, SceneConfig::default());
//!
//! let mut tick = TickSnapshot::at_positions([Point3::ORIGIN, Point3::new(1.0, 0.0, 0.0)]);
//! tick.connectable_node_indices = vec![NodePair::new(1, 0)];
//! driver.tick(&tick);
//!
//! assert_eq!(driver.stats().visible_connections, 1);
//! let frame = driver.draw_list(Viewport::new(800.0, 600.0));
//! assert!(!frame.is_empty());
//! ```

/// Orbit camera and projection
pub mod camera;
pub mod color;
/// Per-class tick dispatch
pub mod composer;
/// Configuration management for scene parameters
pub mod config;
/// Sparse pairwise link registry
pub mod connections;
/// Multiplicative decay and splash effects
pub mod decay;
/// Scene driver owning the scene, camera and composer
pub mod driver;
/// Render clock and loop cancellation
pub mod frame_loop;
pub mod logging;
/// Entity capability and index-aligned collections
pub mod marker;
/// Node and body markers
pub mod markers;
pub mod material;
/// Draw list construction
pub mod render;
pub mod scale;
/// Retained scene graph over hecs
pub mod scene;
pub mod stats;
/// Bounded position history
pub mod trail;

pub use camera::OrbitCamera;
pub use composer::{Component, Composer};
pub use config::SceneConfig;
pub use driver::SceneDriver;
pub use frame_loop::{FrameClock, LoopHandle};
pub use logging::init_logging;
pub use render::{DrawCommand, DrawList, Viewport};
pub use scene::Scene;
pub use stats::SceneStats;
