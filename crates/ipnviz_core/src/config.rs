//! Configuration for the scene pipeline.
//!
//! Maps to `config.toml`. Every section is optional; missing keys fall back
//! to the values in the `Default` impls.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [scene]
//! master_scale = 6.684491978609626e-7
//!
//! [trail]
//! stride = 10
//! capacity = 1000
//!
//! [decay]
//! factor = 0.9
//!
//! [playback]
//! tick_interval_ms = 50
//! ```

use serde::{Deserialize, Serialize};

use crate::scale::SceneScale;

/// Simulation-to-scene conversion.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SceneSection {
    /// Multiplier applied to every simulation coordinate.
    pub master_scale: f64,
    /// Extra multiplier for body sphere radii.
    pub body_scale: f64,
    /// Length of the axes helper at the origin, in scene units. Zero disables it.
    pub axes_length: f32,
}

impl Default for SceneSection {
    fn default() -> Self {
        Self {
            master_scale: 1e5 / 1.496e11,
            body_scale: 1.0,
            axes_length: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrailConfig {
    /// A position is kept every `stride` samples.
    pub stride: u64,
    /// Oldest points are evicted past this many.
    pub capacity: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            stride: 10,
            capacity: 1000,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DecayConfig {
    /// Per-step multiplier applied to an effect's life.
    pub factor: f32,
    /// An effect is removed on the first step that leaves its life below this.
    pub threshold: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            factor: 0.9,
            threshold: 0.01,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// The camera starts this far above the origin, looking down.
    pub initial_height: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians per orbit step.
    pub rotate_step: f32,
    /// Distance multiplier per zoom step.
    pub zoom_step: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 2000.0,
            initial_height: 7.0,
            min_distance: 0.05,
            max_distance: 1500.0,
            rotate_step: 0.05,
            zoom_step: 1.1,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    pub target_fps: u64,
    /// Delay between two ticks fed into the scene.
    pub tick_interval_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            tick_interval_ms: 50,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SceneConfig {
    pub scene: SceneSection,
    pub trail: TrailConfig,
    pub decay: DecayConfig,
    pub camera: CameraConfig,
    pub playback: PlaybackConfig,
}

impl SceneConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Err` describing the first invalid value.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.scene.master_scale.is_finite() && self.scene.master_scale > 0.0,
            "Master scale must be positive"
        );
        anyhow::ensure!(
            self.scene.body_scale.is_finite() && self.scene.body_scale > 0.0,
            "Body scale must be positive"
        );
        anyhow::ensure!(
            self.scene.axes_length >= 0.0,
            "Axes length must be non-negative"
        );

        anyhow::ensure!(self.trail.stride > 0, "Trail stride must be positive");
        anyhow::ensure!(self.trail.capacity > 0, "Trail capacity must be positive");

        anyhow::ensure!(
            self.decay.factor > 0.0 && self.decay.factor < 1.0,
            "Decay factor must be in (0, 1)"
        );
        anyhow::ensure!(
            self.decay.threshold > 0.0 && self.decay.threshold < 1.0,
            "Decay threshold must be in (0, 1)"
        );

        anyhow::ensure!(
            self.camera.fov_degrees > 0.0 && self.camera.fov_degrees < 180.0,
            "Camera FOV must be in (0, 180) degrees"
        );
        anyhow::ensure!(
            self.camera.near > 0.0 && self.camera.far > self.camera.near,
            "Camera clip planes must satisfy 0 < near < far"
        );
        anyhow::ensure!(
            self.camera.min_distance > 0.0 && self.camera.max_distance >= self.camera.min_distance,
            "Camera distance bounds must satisfy 0 < min <= max"
        );
        anyhow::ensure!(
            self.camera.initial_height >= self.camera.min_distance
                && self.camera.initial_height <= self.camera.max_distance,
            "Initial camera height must lie within the distance bounds"
        );
        anyhow::ensure!(
            self.camera.zoom_step > 1.0,
            "Zoom step must be greater than 1"
        );

        anyhow::ensure!(
            self.playback.target_fps > 0 && self.playback.target_fps <= 240,
            "Target FPS must be in 1..=240"
        );
        anyhow::ensure!(
            self.playback.tick_interval_ms > 0,
            "Tick interval must be positive"
        );
        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn scale(&self) -> SceneScale {
        SceneScale::new(self.scene.master_scale)
    }
}
