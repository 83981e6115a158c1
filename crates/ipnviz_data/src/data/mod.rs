//! Core data structures for the network scene.

pub mod body;
pub mod geometry;
pub mod snapshot;
