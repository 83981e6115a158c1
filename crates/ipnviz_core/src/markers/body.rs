use ipnviz_data::{BodyKind, BodySetup, BodyState, TickSnapshot};

use crate::color::Rgb;
use crate::composer::Component;
use crate::marker::{IndexedMarkers, Marker, MarkerContext};
use crate::material::{Material, TextureLayer};
use crate::scene::{Label, Mesh, ObjectId, Scene};
use crate::stats::SceneStats;

/// Appearance for bodies without a dedicated texture set.
pub const DEFAULT_BODY_COLOR: Rgb = Rgb::GREEN;

/// Resolves the material of a body once, at construction.
pub fn body_material(kind: BodyKind) -> Material {
    let textured = |tint: u32| Material::Textured(TextureLayer::color(kind.name(), Rgb::from_hex(tint)));
    match kind {
        BodyKind::Mercury => textured(0x8c8680),
        BodyKind::Venus => textured(0xe3bb76),
        BodyKind::Earth => textured(0x2f6fb5),
        BodyKind::Mars => textured(0xc1440e),
        BodyKind::Jupiter => textured(0xc99b6b),
        BodyKind::Saturn => Material::Layered(vec![
            TextureLayer::color("saturn", Rgb::from_hex(0xe3cf94)),
            TextureLayer::double_sided("saturn_ring", Rgb::from_hex(0xb8a57a)),
        ]),
        BodyKind::Uranus => textured(0x9fd8e0),
        BodyKind::Neptune => textured(0x3f54ba),
        BodyKind::Sun | BodyKind::Moon | BodyKind::Unlisted => Material::Flat(DEFAULT_BODY_COLOR),
    }
}

pub struct BodyMarker {
    mesh: ObjectId,
    label: ObjectId,
    kind: BodyKind,
}

impl BodyMarker {
    pub fn mesh(&self) -> ObjectId {
        self.mesh
    }

    pub fn label(&self) -> ObjectId {
        self.label
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }
}

impl Marker for BodyMarker {
    type Setup = BodySetup;
    type State = BodyState;

    fn spawn(scene: &mut Scene, ctx: &MarkerContext, setup: &BodySetup) -> Self {
        let kind = setup.kind();
        let radius = ctx
            .scale
            .length_to_scene(setup.radius * ctx.config.scene.body_scale);
        let mesh = scene.spawn(
            ctx.scale.to_scene(setup.position),
            Mesh::Sphere {
                radius,
                material: body_material(kind),
            },
        );
        let label = scene.attach(mesh, Label::plain(setup.name.clone()));
        Self { mesh, label, kind }
    }

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, state: &BodyState) {
        scene.set_position(self.mesh, ctx.scale.to_scene(state.position));
    }
}

pub struct BodyMarkers {
    markers: IndexedMarkers<BodyMarker>,
}

impl BodyMarkers {
    pub fn spawn(scene: &mut Scene, ctx: &MarkerContext, setups: &[BodySetup]) -> Self {
        Self {
            markers: IndexedMarkers::spawn_all(scene, ctx, setups),
        }
    }

    pub fn markers(&self) -> &IndexedMarkers<BodyMarker> {
        &self.markers
    }
}

impl Component for BodyMarkers {
    fn name(&self) -> &'static str {
        "bodies"
    }

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, tick: &TickSnapshot) {
        self.markers.update_all(scene, ctx, &tick.bodies);
    }

    fn report(&self, _scene: &Scene, stats: &mut SceneStats) {
        stats.bodies = self.markers.len();
    }
}
