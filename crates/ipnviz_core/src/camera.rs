//! Orbit camera: spherical coordinates around a target point.

use glam::{Mat4, Vec2, Vec3};

use crate::config::CameraConfig;
use crate::render::Viewport;

/// Keeps the polar angle off the poles so the up vector stays defined.
const POLAR_EPSILON: f32 = 1e-4;

/// Where a scene point lands on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// Pixels from the top-left corner of the viewport.
    pub pixel: Vec2,
    /// Normalized device depth in `[-1, 1]`; smaller is closer.
    pub depth: f32,
    /// Distance along the view axis, in scene units.
    pub view_distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    target: Vec3,
    distance: f32,
    /// Angle from +Y.
    polar: f32,
    /// Angle around +Y, measured from +Z towards +X.
    azimuth: f32,
    fov_y: f32,
    near: f32,
    far: f32,
    min_distance: f32,
    max_distance: f32,
    rotate_step: f32,
    zoom_step: f32,
}

impl OrbitCamera {
    /// Camera `initial_height` above the origin, looking down at it.
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: config.initial_height,
            polar: POLAR_EPSILON,
            azimuth: 0.0,
            fov_y: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            rotate_step: config.rotate_step,
            zoom_step: config.zoom_step,
        }
    }

    /// Rotates around the target by whole steps.
    pub fn orbit(&mut self, azimuth_steps: f32, polar_steps: f32) {
        self.azimuth = (self.azimuth + azimuth_steps * self.rotate_step).rem_euclid(std::f32::consts::TAU);
        self.polar = (self.polar + polar_steps * self.rotate_step)
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
    }

    /// Positive steps move closer, negative steps move away.
    pub fn zoom(&mut self, steps: i32) {
        self.distance = (self.distance / self.zoom_step.powi(steps))
            .clamp(self.min_distance, self.max_distance);
    }

    pub fn position(&self) -> Vec3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.target
            + self.distance * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth)
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far) * self.view()
    }

    /// Projects a scene point into viewport pixels. `None` when the point
    /// lies outside the clip range (behind the camera or past the far plane).
    pub fn project(&self, point: Vec3, viewport: Viewport) -> Option<ScreenPoint> {
        let clip = self.view_projection(viewport.aspect()) * point.extend(1.0);
        if clip.w <= self.near {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(ScreenPoint {
            pixel: Vec2::new(
                (ndc.x + 1.0) * 0.5 * viewport.width,
                (1.0 - ndc.y) * 0.5 * viewport.height,
            ),
            depth: ndc.z,
            view_distance: clip.w,
        })
    }

    /// On-screen size in pixels of a scene length seen at `view_distance`.
    pub fn length_to_pixels(&self, length: f32, view_distance: f32, viewport: Viewport) -> f32 {
        let half_height = (self.fov_y * 0.5).tan() * view_distance;
        length / half_height * viewport.height * 0.5
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    #[test]
    fn test_starts_above_origin() {
        let camera = OrbitCamera::default();
        let position = camera.position();
        assert!(position.x.abs() < 1e-3);
        assert!((position.y - 7.0).abs() < 1e-3);
        assert!(position.z.abs() < 1e-3);
    }

    #[test]
    fn test_target_projects_to_viewport_center() {
        let camera = OrbitCamera::default();
        let center = camera.project(Vec3::ZERO, viewport()).unwrap();
        assert!((center.pixel.x - 400.0).abs() < 0.5);
        assert!((center.pixel.y - 300.0).abs() < 0.5);
        assert!((center.view_distance - 7.0).abs() < 1e-3);
    }

    #[test]
    fn test_points_behind_camera_are_culled() {
        let camera = OrbitCamera::default();
        assert!(camera.project(Vec3::new(0.0, 20.0, 0.0), viewport()).is_none());
        assert!(camera.project(Vec3::new(0.0, -5000.0, 0.0), viewport()).is_none());
    }

    #[test]
    fn test_polar_angle_is_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, -1000.0);
        assert!(camera.position().y > 6.99);
        camera.orbit(0.0, 1000.0);
        assert!(camera.position().y < -6.99);
        assert!(camera.position().is_finite());
    }

    #[test]
    fn test_zoom_respects_bounds() {
        let mut camera = OrbitCamera::default();
        camera.zoom(1);
        assert!((camera.distance() - 7.0 / 1.1).abs() < 1e-4);
        camera.zoom(10_000);
        assert_eq!(camera.distance(), CameraConfig::default().min_distance);
        camera.zoom(-10_000);
        assert_eq!(camera.distance(), CameraConfig::default().max_distance);
    }

    #[test]
    fn test_length_to_pixels_scales_with_distance() {
        let camera = OrbitCamera::default();
        let near = camera.length_to_pixels(1.0, 7.0, viewport());
        let far = camera.length_to_pixels(1.0, 14.0, viewport());
        assert!((near - 2.0 * far).abs() < 1e-3);
    }
}
