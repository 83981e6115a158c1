//! Top-level owner of the scene: builds the markers from the setup snapshot,
//! feeds ticks through the composer and serves the render step.

use ipnviz_data::{Point3, SetupSnapshot, TickSnapshot};

use crate::camera::OrbitCamera;
use crate::composer::Composer;
use crate::config::SceneConfig;
use crate::connections::ConnectionMarkers;
use crate::frame_loop::FrameClock;
use crate::marker::MarkerContext;
use crate::markers::{BodyMarkers, NodeMarkers};
use crate::render::{build_draw_list, DrawList, Viewport};
use crate::scene::{Axes, ObjectId, Scene};
use crate::stats::{SceneStats, LOG_INTERVAL_TICKS};

pub struct SceneDriver {
    scene: Scene,
    ctx: MarkerContext,
    composer: Composer,
    camera: OrbitCamera,
    clock: FrameClock,
    axes: Option<ObjectId>,
    ticks: u64,
    time: u64,
    final_tick: bool,
}

impl SceneDriver {
    /// Builds one marker per setup record. Array positions become the
    /// permanent indices that every later tick is aligned against.
    ///
    /// `config` must pass [`SceneConfig::validate`]; configs loaded through
    /// [`SceneConfig::from_toml`] always do. Debug builds check it here.
    pub fn setup(setup: &SetupSnapshot, config: SceneConfig) -> Self {
        let validation = config.validate();
        debug_assert!(validation.is_ok(), "invalid scene config: {validation:?}");

        let ctx = MarkerContext::new(config);
        let mut scene = Scene::new();

        let axes = (ctx.config.scene.axes_length > 0.0).then(|| {
            scene.spawn(
                glam::Vec3::ZERO,
                Axes {
                    length: ctx.config.scene.axes_length,
                },
            )
        });

        let nodes = NodeMarkers::spawn(&mut scene, &ctx, &setup.nodes);
        let bodies = BodyMarkers::spawn(&mut scene, &ctx, &setup.bodies);
        let composer = Composer::new()
            .with(nodes)
            .with(ConnectionMarkers::new())
            .with(bodies);

        tracing::info!(
            nodes = setup.nodes.len(),
            bodies = setup.bodies.len(),
            scale = ctx.scale.factor(),
            "Scene set up"
        );

        Self {
            camera: OrbitCamera::new(&ctx.config.camera),
            scene,
            ctx,
            composer,
            clock: FrameClock::new(),
            axes,
            ticks: 0,
            time: 0,
            final_tick: false,
        }
    }

    /// Applies one tick. Its node and body arrays must match the setup
    /// cardinalities.
    pub fn tick(&mut self, tick: &TickSnapshot) {
        self.composer.update(&mut self.scene, &self.ctx, tick);
        self.ticks += 1;
        self.time = tick.time;

        if self.ticks.is_multiple_of(LOG_INTERVAL_TICKS) {
            self.stats().log();
        }
        if tick.final_tick && !self.final_tick {
            tracing::info!(ticks = self.ticks, time = self.time, "Final tick reached");
        }
        self.final_tick |= tick.final_tick;
    }

    /// Camera position in simulation units.
    pub fn camera_position(&self) -> Point3 {
        self.ctx.scale.to_sim(self.camera.position())
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Advances the render clock and projects the scene. Never touches
    /// marker state.
    pub fn frame(&mut self, now: f64, viewport: Viewport) -> DrawList {
        self.clock.frame(now);
        self.draw_list(viewport)
    }

    pub fn draw_list(&self, viewport: Viewport) -> DrawList {
        build_draw_list(&self.scene, &self.camera, viewport)
    }

    pub fn stats(&self) -> SceneStats {
        let mut stats = SceneStats {
            ticks: self.ticks,
            time: self.time,
            final_tick: self.final_tick,
            scene_objects: self.scene.len(),
            frames: self.clock.frames(),
            fps: self.clock.fps(),
            ..SceneStats::default()
        };
        self.composer.report(&self.scene, &mut stats);
        stats
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &SceneConfig {
        &self.ctx.config
    }

    pub fn axes(&self) -> Option<ObjectId> {
        self.axes
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Simulation time of the last tick, in nanoseconds.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn is_finished(&self) -> bool {
        self.final_tick
    }

    pub fn component_names(&self) -> Vec<&'static str> {
        self.composer.names()
    }
}
