//! Bounded, stride-sampled position history drawn behind a moving marker.

use std::collections::VecDeque;

use glam::Vec3;

use crate::color::Rgb;
use crate::config::TrailConfig;
use crate::scene::{ObjectId, Polyline, Scene};

pub const TRAIL_COLOR: Rgb = Rgb::RED;

pub struct TrailBuffer {
    line: ObjectId,
    points: VecDeque<Vec3>,
    samples_seen: u64,
    stride: u64,
    capacity: usize,
}

impl TrailBuffer {
    /// Spawns the (empty) trail line into the scene.
    pub fn new(scene: &mut Scene, config: &TrailConfig) -> Self {
        let line = scene.spawn(
            Vec3::ZERO,
            Polyline {
                points: Vec::new(),
                color: TRAIL_COLOR,
            },
        );
        Self {
            line,
            points: VecDeque::with_capacity(config.capacity.min(1024)),
            samples_seen: 0,
            // Zero would divide by zero in `sample`; treat it as "keep all".
            stride: config.stride.max(1),
            capacity: config.capacity,
        }
    }

    /// Offers one position. Only every `stride`-th offer (starting with the
    /// first) is kept; past `capacity` the oldest point is dropped. Returns
    /// whether the point was kept.
    pub fn sample(&mut self, point: Vec3) -> bool {
        let keep = self.samples_seen % self.stride == 0;
        self.samples_seen += 1;
        if keep {
            self.points.push_back(point);
            if self.points.len() > self.capacity {
                self.points.pop_front();
            }
        }
        keep
    }

    /// Rebuilds the line geometry from the current buffer.
    pub fn render(&self, scene: &mut Scene) {
        if let Some(line) = scene.get_mut::<Polyline>(self.line) {
            line.points.clear();
            line.points.extend(self.points.iter().copied());
        }
    }

    pub fn line(&self) -> ObjectId {
        self.line
    }

    pub fn points(&self) -> impl ExactSizeIterator<Item = &Vec3> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn samples_seen(&self) -> u64 {
        self.samples_seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(scene: &mut Scene, stride: u64, capacity: usize) -> TrailBuffer {
        TrailBuffer::new(scene, &TrailConfig { stride, capacity })
    }

    #[test]
    fn test_keeps_every_stride_sample() {
        let mut scene = Scene::new();
        let mut trail = trail(&mut scene, 10, 1000);
        for i in 0..25 {
            trail.sample(Vec3::new(i as f32, 0.0, 0.0));
        }
        let xs: Vec<f32> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 10.0, 20.0]);
        assert_eq!(trail.samples_seen(), 25);
    }

    #[test]
    fn test_zero_stride_keeps_every_sample() {
        let mut scene = Scene::new();
        let mut trail = trail(&mut scene, 0, 10);
        for i in 0..3 {
            assert!(trail.sample(Vec3::new(i as f32, 0.0, 0.0)));
        }
        assert_eq!(trail.points().count(), 3);
    }

    #[test]
    fn test_evicts_oldest_on_overflow() {
        let mut scene = Scene::new();
        let mut trail = trail(&mut scene, 1, 3);
        for i in 0..5 {
            trail.sample(Vec3::new(i as f32, 0.0, 0.0));
        }
        let xs: Vec<f32> = trail.points().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut scene = Scene::new();
        let mut trail = trail(&mut scene, 1, 10);
        trail.sample(Vec3::X);
        trail.sample(Vec3::Y);

        trail.render(&mut scene);
        let first = (*scene.get::<Polyline>(trail.line()).unwrap()).clone();
        trail.render(&mut scene);
        let second = (*scene.get::<Polyline>(trail.line()).unwrap()).clone();

        assert_eq!(first, second);
        assert_eq!(first.points, vec![Vec3::X, Vec3::Y]);
        assert_eq!(first.color, TRAIL_COLOR);
    }

    #[test]
    fn test_render_before_any_sample_is_empty() {
        let mut scene = Scene::new();
        let trail = trail(&mut scene, 10, 10);
        trail.render(&mut scene);
        assert!(scene.get::<Polyline>(trail.line()).unwrap().points.is_empty());
        assert!(trail.is_empty());
    }
}
