//! Concrete markers for each simulated object class and the components that
//! reconcile them against ticks.

pub mod body;
pub mod node;

pub use body::{BodyMarker, BodyMarkers};
pub use node::{NodeMarker, NodeMarkers};
