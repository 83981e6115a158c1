//! Scene statistics for the status bar and periodic logging.

use serde::Serialize;

/// Ticks between two periodic stats log lines.
pub const LOG_INTERVAL_TICKS: u64 = 1000;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SceneStats {
    pub ticks: u64,
    /// Simulation time of the last applied tick, in nanoseconds.
    pub time: u64,
    pub final_tick: bool,
    pub nodes: usize,
    pub bodies: usize,
    /// Connection entries ever created.
    pub connections: usize,
    pub visible_connections: usize,
    pub active_splashes: usize,
    pub scene_objects: usize,
    pub frames: u64,
    pub fps: f64,
}

impl SceneStats {
    pub fn log(&self) {
        tracing::info!(
            ticks = self.ticks,
            time = self.time,
            nodes = self.nodes,
            bodies = self.bodies,
            connections = self.connections,
            visible_connections = self.visible_connections,
            splashes = self.active_splashes,
            objects = self.scene_objects,
            "Scene stats"
        );
    }
}
