use glam::Vec3;
use ipnviz_data::Point3;

/// Simulation space to scene space conversion: one multiplicative factor,
/// applied identically to every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneScale {
    factor: f64,
}

impl SceneScale {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    pub fn factor(self) -> f64 {
        self.factor
    }

    pub fn to_scene(self, position: Point3) -> Vec3 {
        let p = position.scaled(self.factor);
        Vec3::new(p.x as f32, p.y as f32, p.z as f32)
    }

    pub fn to_sim(self, position: Vec3) -> Point3 {
        Point3::new(
            f64::from(position.x) / self.factor,
            f64::from(position.y) / self.factor,
            f64::from(position.z) / self.factor,
        )
    }

    pub fn length_to_scene(self, length: f64) -> f32 {
        (length * self.factor) as f32
    }
}
