//! Links between nodes: a lazily grown, symmetric two-level registry of line
//! markers, reconciled against each tick.

use glam::Vec3;
use ipnviz_data::{NodePair, TickSnapshot};

use crate::color::Rgb;
use crate::composer::Component;
use crate::marker::MarkerContext;
use crate::scene::{ObjectId, Polyline, Scene};
use crate::stats::SceneStats;

pub const CONNECTING_COLOR: Rgb = Rgb::BLUE;
pub const SENDING_COLOR: Rgb = Rgb::GREEN;

pub struct ConnectionMarker {
    line: ObjectId,
    sending: f32,
}

impl ConnectionMarker {
    fn spawn(scene: &mut Scene) -> Self {
        let line = scene.spawn(
            Vec3::ZERO,
            Polyline {
                points: Vec::new(),
                color: CONNECTING_COLOR,
            },
        );
        Self { line, sending: 0.0 }
    }

    /// Fades the sending intensity one step and recolours the line.
    pub fn decay(&mut self, scene: &mut Scene, factor: f32) {
        self.sending *= factor;
        self.refresh_color(scene);
    }

    /// Flashes the link at full sending intensity.
    pub fn mark_sending(&mut self, scene: &mut Scene) {
        self.sending = 1.0;
        self.refresh_color(scene);
    }

    pub fn set_visible(&self, scene: &mut Scene, visible: bool) {
        scene.set_visible(self.line, visible);
    }

    pub fn is_visible(&self, scene: &Scene) -> bool {
        scene.is_visible(self.line)
    }

    pub fn set_endpoints(&self, scene: &mut Scene, from: Vec3, to: Vec3) {
        if let Some(line) = scene.get_mut::<Polyline>(self.line) {
            line.points.clear();
            line.points.extend([from, to]);
        }
    }

    pub fn sending(&self) -> f32 {
        self.sending
    }

    pub fn line(&self) -> ObjectId {
        self.line
    }

    fn refresh_color(&self, scene: &mut Scene) {
        if let Some(line) = scene.get_mut::<Polyline>(self.line) {
            line.color = CONNECTING_COLOR.lerp(SENDING_COLOR, self.sending);
        }
    }
}

/// Outer index is the lower node index, inner index the higher one. Entries
/// are created on first reference and never removed.
#[derive(Default)]
pub struct ConnectionMatrix {
    rows: Vec<Vec<Option<ConnectionMarker>>>,
    len: usize,
}

impl ConnectionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, a: usize, b: usize) -> Option<&ConnectionMarker> {
        let pair = NodePair::new(a, b);
        self.rows.get(pair.low())?.get(pair.high())?.as_ref()
    }

    /// Returns the entry for the unordered pair, spawning its line on first use.
    pub fn get_or_create(&mut self, scene: &mut Scene, a: usize, b: usize) -> &mut ConnectionMarker {
        let pair = NodePair::new(a, b);
        if self.rows.len() <= pair.low() {
            self.rows.resize_with(pair.low() + 1, Vec::new);
        }
        let row = &mut self.rows[pair.low()];
        if row.len() <= pair.high() {
            row.resize_with(pair.high() + 1, || None);
        }
        let slot = &mut row[pair.high()];
        if slot.is_none() {
            tracing::debug!(low = pair.low(), high = pair.high(), "Connection created");
            self.len += 1;
        }
        slot.get_or_insert_with(|| ConnectionMarker::spawn(scene))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodePair, &ConnectionMarker)> {
        self.rows.iter().enumerate().flat_map(|(low, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(high, slot)| slot.as_ref().map(|m| (NodePair::new(low, high), m)))
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ConnectionMarker> {
        self.rows
            .iter_mut()
            .flat_map(|row| row.iter_mut().filter_map(Option::as_mut))
    }

    /// Number of entries ever created.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Reconciles the registry against a tick:
/// 1. every existing entry decays and is hidden,
/// 2. every connectable pair is shown between the current node positions,
/// 3. every sending pair flashes at full intensity.
#[derive(Default)]
pub struct ConnectionMarkers {
    matrix: ConnectionMatrix,
}

impl ConnectionMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matrix(&self) -> &ConnectionMatrix {
        &self.matrix
    }

    pub fn visible_count(&self, scene: &Scene) -> usize {
        self.matrix
            .iter()
            .filter(|(_, marker)| marker.is_visible(scene))
            .count()
    }
}

impl Component for ConnectionMarkers {
    fn name(&self) -> &'static str {
        "connections"
    }

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, tick: &TickSnapshot) {
        let factor = ctx.config.decay.factor;
        for marker in self.matrix.iter_mut() {
            marker.decay(scene, factor);
            marker.set_visible(scene, false);
        }

        for pair in &tick.connectable_node_indices {
            let from = ctx.scale.to_scene(tick.nodes[pair.low()].position);
            let to = ctx.scale.to_scene(tick.nodes[pair.high()].position);
            let marker = self.matrix.get_or_create(scene, pair.low(), pair.high());
            marker.set_visible(scene, true);
            marker.set_endpoints(scene, from, to);
        }

        for pair in &tick.sending_node_indices {
            self.matrix
                .get_or_create(scene, pair.low(), pair.high())
                .mark_sending(scene);
        }
    }

    fn report(&self, scene: &Scene, stats: &mut SceneStats) {
        stats.connections = self.matrix.len();
        stats.visible_connections = self.visible_count(scene);
    }
}
