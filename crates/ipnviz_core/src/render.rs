//! Read-only render step: projects the visible scene into a flat list of
//! pixel-space drawing commands that any backend can rasterize.

use glam::{Vec2, Vec3};

use crate::camera::OrbitCamera;
use crate::color::Rgb;
use crate::scene::{Axes, BarTone, Label, Mesh, ObjectId, OccupancyBar, Polyline, Ring, Scene};

pub const POINT_RADIUS_PX: f32 = 3.0;
pub const MIN_SPHERE_RADIUS_PX: f32 = 1.5;
pub const LABEL_COLOR: Rgb = Rgb::WHITE;
pub const HIGHLIGHT_COLOR: Rgb = Rgb::new(1.0, 193.0 / 255.0, 7.0 / 255.0);

impl BarTone {
    pub fn color(self) -> Rgb {
        match self {
            BarTone::Primary => Rgb::new(13.0 / 255.0, 110.0 / 255.0, 253.0 / 255.0),
            BarTone::Secondary => Rgb::GREY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Vec2,
        to: Vec2,
        color: Rgb,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgb,
    },
    Ring {
        center: Vec2,
        diameter: f32,
        border: f32,
        color: Rgb,
        alpha: f32,
    },
    Label {
        anchor: Vec2,
        text: String,
        color: Rgb,
        opacity: f32,
        bar: Option<OccupancyBar>,
    },
}

/// Commands in painter's order: lines, then discs far to near, then rings,
/// then labels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub viewport: Option<Viewport>,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub fn build_draw_list(scene: &Scene, camera: &OrbitCamera, viewport: Viewport) -> DrawList {
    let world = scene.world();
    let mut lines = Vec::new();
    let mut discs = Vec::new();
    let mut rings = Vec::new();
    let mut labels = Vec::new();

    let segment = |from: Vec3, to: Vec3, color: Rgb, out: &mut Vec<DrawCommand>| {
        if let (Some(a), Some(b)) = (camera.project(from, viewport), camera.project(to, viewport)) {
            out.push(DrawCommand::Line {
                from: a.pixel,
                to: b.pixel,
                color,
            });
        }
    };

    for (id, axes) in world.query::<&Axes>().iter() {
        let Some(origin) = visible_position(scene, id) else {
            continue;
        };
        for (direction, color) in [(Vec3::X, Rgb::RED), (Vec3::Y, Rgb::GREEN), (Vec3::Z, Rgb::BLUE)] {
            segment(origin, origin + direction * axes.length, color, &mut lines);
        }
    }

    for (id, line) in world.query::<&Polyline>().iter() {
        let Some(offset) = visible_position(scene, id) else {
            continue;
        };
        for pair in line.points.windows(2) {
            segment(offset + pair[0], offset + pair[1], line.color, &mut lines);
        }
    }

    for (id, mesh) in world.query::<&Mesh>().iter() {
        let Some(position) = visible_position(scene, id) else {
            continue;
        };
        let Some(screen) = camera.project(position, viewport) else {
            continue;
        };
        let (radius, color) = match mesh {
            Mesh::Point { color } => (POINT_RADIUS_PX, *color),
            Mesh::Sphere { radius, material } => (
                camera
                    .length_to_pixels(*radius, screen.view_distance, viewport)
                    .max(MIN_SPHERE_RADIUS_PX),
                material.tint(),
            ),
        };
        discs.push((
            screen.depth,
            DrawCommand::Disc {
                center: screen.pixel,
                radius,
                color,
            },
        ));
    }
    discs.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (id, ring) in world.query::<&Ring>().iter() {
        let Some(screen) = visible_position(scene, id).and_then(|p| camera.project(p, viewport)) else {
            continue;
        };
        rings.push(DrawCommand::Ring {
            center: screen.pixel,
            diameter: ring.diameter_px,
            border: ring.border_px,
            color: ring.color,
            alpha: ring.alpha,
        });
    }

    for (id, label) in world.query::<&Label>().iter() {
        let Some(screen) = visible_position(scene, id).and_then(|p| camera.project(p, viewport)) else {
            continue;
        };
        labels.push(DrawCommand::Label {
            anchor: screen.pixel,
            text: label.text.clone(),
            color: if label.highlighted {
                HIGHLIGHT_COLOR
            } else {
                LABEL_COLOR
            },
            opacity: label.opacity,
            bar: label.bar,
        });
    }

    let mut commands = lines;
    commands.extend(discs.into_iter().map(|(_, command)| command));
    commands.extend(rings);
    commands.extend(labels);
    DrawList {
        viewport: Some(viewport),
        commands,
    }
}

fn visible_position(scene: &Scene, id: ObjectId) -> Option<Vec3> {
    if scene.is_visible(id) {
        scene.world_position(id)
    } else {
        None
    }
}
