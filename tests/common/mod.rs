use ipnviz_data::{BodySetup, BodyState, NodeSetup, NodeState, Point3, SetupSnapshot, TickSnapshot};
use ipnviz_io::Recording;

/// One astronomical unit in simulation units (metres).
#[allow(dead_code)]
pub const AU: f64 = 1.496e11;

/// Simulation coordinate that lands `units` away from the origin in the
/// default-scaled scene.
#[allow(dead_code)]
pub fn scene_units(units: f64) -> f64 {
    units * AU / 1e5
}

/// Builds recordings whose ticks start at the setup positions.
#[allow(dead_code)]
pub struct RecordingBuilder {
    setup: SetupSnapshot,
    ticks: Vec<TickSnapshot>,
}

#[allow(dead_code)]
impl RecordingBuilder {
    pub fn new() -> Self {
        Self {
            setup: SetupSnapshot::default(),
            ticks: Vec::new(),
        }
    }

    pub fn with_node(mut self, name: &str, position: Point3) -> Self {
        self.setup.nodes.push(NodeSetup {
            id: self.setup.nodes.len() as u32,
            name: name.to_string(),
            position,
        });
        self
    }

    pub fn with_body(mut self, name: &str, radius: f64, position: Point3) -> Self {
        self.setup.bodies.push(BodySetup {
            name: name.to_string(),
            kind: None,
            radius,
            position,
        });
        self
    }

    /// Appends a tick one second after the previous one; `edit` adjusts it.
    pub fn with_tick(mut self, edit: impl FnOnce(&mut TickSnapshot)) -> Self {
        let mut tick = TickSnapshot {
            time: (self.ticks.len() as u64 + 1) * 1_000_000_000,
            nodes: self
                .setup
                .nodes
                .iter()
                .map(|node| NodeState {
                    position: node.position,
                    occupancy: 0.0,
                })
                .collect(),
            bodies: self
                .setup
                .bodies
                .iter()
                .map(|body| BodyState {
                    position: body.position,
                })
                .collect(),
            ..TickSnapshot::default()
        };
        edit(&mut tick);
        self.ticks.push(tick);
        self
    }

    pub fn with_idle_ticks(mut self, count: usize) -> Self {
        for _ in 0..count {
            self = self.with_tick(|_| {});
        }
        self
    }

    pub fn build(self) -> Recording {
        Recording {
            setup: self.setup,
            ticks: self.ticks,
        }
    }
}

/// Two ground stations and a relay, linked in a chain.
#[allow(dead_code)]
pub fn relay_chain() -> RecordingBuilder {
    RecordingBuilder::new()
        .with_node("earth-gs", Point3::ORIGIN)
        .with_node("relay", Point3::new(scene_units(4.0), 0.0, 0.0))
        .with_node("mars-gs", Point3::new(scene_units(-4.0), 0.0, 0.0))
}
