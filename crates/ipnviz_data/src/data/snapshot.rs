use serde::{Deserialize, Serialize};

use super::body::BodyKind;
use super::geometry::{NodePair, Point3};

/// A network node as announced once at setup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NodeSetup {
    pub id: u32,
    pub name: String,
    pub position: Point3,
}

/// An orbiting body as announced once at setup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodySetup {
    pub name: String,
    /// Explicit identity. Hosts that only send names leave this out and the
    /// name is resolved once through [`BodyKind::from_name`].
    #[serde(default)]
    pub kind: Option<BodyKind>,
    pub radius: f64,
    pub position: Point3,
}

impl BodySetup {
    pub fn kind(&self) -> BodyKind {
        self.kind.unwrap_or_else(|| BodyKind::from_name(&self.name))
    }
}

/// Received once, before any tick. Array positions are permanent indices.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct SetupSnapshot {
    pub nodes: Vec<NodeSetup>,
    #[serde(default)]
    pub bodies: Vec<BodySetup>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct NodeState {
    pub position: Point3,
    /// Message buffer occupancy in `[0, 1]`.
    #[serde(default)]
    pub occupancy: f32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Point3,
}

/// One simulation step. `nodes` and `bodies` are aligned by index with the
/// setup snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TickSnapshot {
    /// Simulation time in nanoseconds.
    #[serde(default)]
    pub time: u64,
    #[serde(default)]
    pub final_tick: bool,
    pub nodes: Vec<NodeState>,
    #[serde(default)]
    pub bodies: Vec<BodyState>,
    #[serde(default)]
    pub connectable_node_indices: Vec<NodePair>,
    #[serde(default)]
    pub sending_node_indices: Vec<NodePair>,
    #[serde(default)]
    pub creating_node_indices: Vec<usize>,
    #[serde(default)]
    pub delivering_node_indices: Vec<usize>,
    #[serde(default)]
    pub highlighted_node_index: Option<usize>,
    #[serde(default)]
    pub occluded_node_indices: Vec<usize>,
}

impl TickSnapshot {
    /// A tick that only moves nodes, with no links or events.
    pub fn at_positions(positions: impl IntoIterator<Item = Point3>) -> Self {
        Self {
            nodes: positions
                .into_iter()
                .map(|position| NodeState {
                    position,
                    occupancy: 0.0,
                })
                .collect(),
            ..Self::default()
        }
    }
}
