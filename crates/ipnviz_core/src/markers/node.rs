use ipnviz_data::{NodeSetup, NodeState, TickSnapshot};

use crate::color::Rgb;
use crate::composer::Component;
use crate::config::DecayConfig;
use crate::decay::{DecayPhase, Splash, SplashKind};
use crate::marker::{IndexedMarkers, Marker, MarkerContext};
use crate::scene::{BarTone, Label, Mesh, ObjectId, Scene};
use crate::stats::SceneStats;
use crate::trail::TrailBuffer;

pub const NODE_COLOR: Rgb = Rgb::WHITE;
pub const OCCLUDED_OPACITY: f32 = 0.5;

pub struct NodeMarker {
    mesh: ObjectId,
    label: ObjectId,
    trail: TrailBuffer,
    splashes: Vec<Splash>,
    occluded: bool,
    highlighted: bool,
}

impl NodeMarker {
    pub fn add_splash(&mut self, scene: &mut Scene, kind: SplashKind, config: &DecayConfig) {
        self.splashes
            .push(Splash::new(scene, self.mesh, kind, config));
    }

    /// Dims the label and greys its occupancy bar.
    pub fn set_occluded(&mut self, scene: &mut Scene, occluded: bool) {
        self.occluded = occluded;
        if let Some(label) = scene.get_mut::<Label>(self.label) {
            label.opacity = if occluded { OCCLUDED_OPACITY } else { 1.0 };
            if let Some(bar) = label.bar.as_mut() {
                bar.tone = if occluded {
                    BarTone::Secondary
                } else {
                    BarTone::Primary
                };
            }
        }
    }

    pub fn set_highlighted(&mut self, scene: &mut Scene, highlighted: bool) {
        self.highlighted = highlighted;
        if let Some(label) = scene.get_mut::<Label>(self.label) {
            label.highlighted = highlighted;
        }
    }

    pub fn is_occluded(&self) -> bool {
        self.occluded
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn mesh(&self) -> ObjectId {
        self.mesh
    }

    pub fn label(&self) -> ObjectId {
        self.label
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    pub fn splashes(&self) -> &[Splash] {
        &self.splashes
    }
}

impl Marker for NodeMarker {
    type Setup = NodeSetup;
    type State = NodeState;

    fn spawn(scene: &mut Scene, ctx: &MarkerContext, setup: &NodeSetup) -> Self {
        let mesh = scene.spawn(
            ctx.scale.to_scene(setup.position),
            Mesh::Point { color: NODE_COLOR },
        );
        let label = scene.attach(mesh, Label::with_bar(setup.name.clone()));
        let trail = TrailBuffer::new(scene, &ctx.config.trail);
        Self {
            mesh,
            label,
            trail,
            splashes: Vec::new(),
            occluded: false,
            highlighted: false,
        }
    }

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, state: &NodeState) {
        let position = ctx.scale.to_scene(state.position);
        scene.set_position(self.mesh, position);

        self.trail.sample(position);
        self.trail.render(scene);

        self.splashes
            .retain_mut(|splash| splash.update(scene) == DecayPhase::Active);

        if let Some(bar) = scene
            .get_mut::<Label>(self.label)
            .and_then(|label| label.bar.as_mut())
        {
            bar.fraction = state.occupancy.clamp(0.0, 1.0);
        }
    }
}

/// Node markers plus the per-tick event sets that decorate them.
pub struct NodeMarkers {
    markers: IndexedMarkers<NodeMarker>,
}

impl NodeMarkers {
    pub fn spawn(scene: &mut Scene, ctx: &MarkerContext, setups: &[NodeSetup]) -> Self {
        Self {
            markers: IndexedMarkers::spawn_all(scene, ctx, setups),
        }
    }

    pub fn markers(&self) -> &IndexedMarkers<NodeMarker> {
        &self.markers
    }

    pub fn active_splashes(&self) -> usize {
        self.markers.iter().map(|m| m.splashes.len()).sum()
    }
}

impl Component for NodeMarkers {
    fn name(&self) -> &'static str {
        "nodes"
    }

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, tick: &TickSnapshot) {
        self.markers.update_all(scene, ctx, &tick.nodes);

        // Flags never outlive the tick that asserted them.
        for marker in self.markers.iter_mut() {
            marker.set_occluded(scene, false);
            marker.set_highlighted(scene, false);
        }

        for &index in &tick.creating_node_indices {
            self.markers[index].add_splash(scene, SplashKind::Creating, &ctx.config.decay);
        }
        for &index in &tick.delivering_node_indices {
            self.markers[index].add_splash(scene, SplashKind::Delivering, &ctx.config.decay);
        }
        for &index in &tick.occluded_node_indices {
            self.markers[index].set_occluded(scene, true);
        }
        if let Some(index) = tick.highlighted_node_index {
            self.markers[index].set_highlighted(scene, true);
        }
    }

    fn report(&self, _scene: &Scene, stats: &mut SceneStats) {
        stats.nodes = self.markers.len();
        stats.active_splashes = self.active_splashes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Ring;
    use ipnviz_data::Point3;

    fn setup(scene: &mut Scene, ctx: &MarkerContext) -> NodeMarkers {
        let nodes = vec![
            NodeSetup {
                id: 0,
                name: "alpha".into(),
                position: Point3::ORIGIN,
            },
            NodeSetup {
                id: 1,
                name: "beta".into(),
                position: Point3::new(1.496e11, 0.0, 0.0),
            },
        ];
        NodeMarkers::spawn(scene, ctx, &nodes)
    }

    fn still_tick() -> TickSnapshot {
        TickSnapshot::at_positions([Point3::ORIGIN, Point3::new(1.496e11, 0.0, 0.0)])
    }

    #[test]
    fn test_spawn_places_scaled_mesh_and_label() {
        let mut scene = Scene::new();
        let ctx = MarkerContext::default();
        let nodes = setup(&mut scene, &ctx);

        let beta = &nodes.markers()[1];
        let x = scene.position(beta.mesh()).unwrap().x;
        assert!((x - 1e5).abs() < 1.0);
        assert_eq!(scene.parent(beta.label()), Some(beta.mesh()));
        assert_eq!(scene.get::<Label>(beta.label()).unwrap().text, "beta");
        // mesh + label + trail per node
        assert_eq!(scene.len(), 6);
    }

    #[test]
    fn test_updates_do_not_duplicate_objects() {
        let mut scene = Scene::new();
        let ctx = MarkerContext::default();
        let mut nodes = setup(&mut scene, &ctx);
        let before = scene.len();
        for _ in 0..20 {
            nodes.update(&mut scene, &ctx, &still_tick());
        }
        assert_eq!(scene.len(), before);
        assert_eq!(nodes.markers()[0].trail().len(), 2);
    }

    #[test]
    fn test_occupancy_is_clamped() {
        let mut scene = Scene::new();
        let ctx = MarkerContext::default();
        let mut nodes = setup(&mut scene, &ctx);
        let mut tick = still_tick();
        tick.nodes[0].occupancy = 1.7;
        tick.nodes[1].occupancy = -0.2;
        nodes.update(&mut scene, &ctx, &tick);

        let bar = |i: usize| {
            scene
                .get::<Label>(nodes.markers()[i].label())
                .unwrap()
                .bar
                .unwrap()
                .fraction
        };
        assert_eq!(bar(0), 1.0);
        assert_eq!(bar(1), 0.0);
    }

    #[test]
    fn test_splashes_spawn_and_expire() {
        let mut scene = Scene::new();
        let ctx = MarkerContext::default();
        let mut nodes = setup(&mut scene, &ctx);

        let mut tick = still_tick();
        tick.creating_node_indices = vec![0];
        tick.delivering_node_indices = vec![0, 1];
        nodes.update(&mut scene, &ctx, &tick);
        assert_eq!(nodes.active_splashes(), 3);
        assert_eq!(scene.count::<Ring>(), 3);

        for _ in 0..44 {
            nodes.update(&mut scene, &ctx, &still_tick());
        }
        assert_eq!(nodes.active_splashes(), 0);
        assert_eq!(scene.count::<Ring>(), 0);
    }

    #[test]
    fn test_highlight_lasts_one_tick() {
        let mut scene = Scene::new();
        let ctx = MarkerContext::default();
        let mut nodes = setup(&mut scene, &ctx);

        let mut tick = still_tick();
        tick.highlighted_node_index = Some(1);
        nodes.update(&mut scene, &ctx, &tick);
        assert!(nodes.markers()[1].is_highlighted());
        assert!(scene.get::<Label>(nodes.markers()[1].label()).unwrap().highlighted);

        nodes.update(&mut scene, &ctx, &still_tick());
        assert!(!nodes.markers()[1].is_highlighted());
        assert!(!scene.get::<Label>(nodes.markers()[1].label()).unwrap().highlighted);
    }
}
