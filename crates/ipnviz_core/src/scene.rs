//! Retained scene graph.
//!
//! Every visual object is a row in a [`hecs::World`]: a local [`Transform`],
//! a [`Visibility`] flag, an optional [`Parent`] and exactly one payload
//! component ([`Mesh`], [`Polyline`], [`Label`], [`Ring`] or [`Axes`]).
//! Child transforms are relative to their parent, and hiding a parent hides
//! its children.

use glam::Vec3;

use crate::color::Rgb;
use crate::material::Material;

pub type ObjectId = hecs::Entity;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub position: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility(pub bool);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub ObjectId);

#[derive(Debug, Clone, PartialEq)]
pub enum Mesh {
    /// Dimensionless anchor, drawn as a dot.
    Point { color: Rgb },
    Sphere { radius: f32, material: Material },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    pub points: Vec<Vec3>,
    pub color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTone {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OccupancyBar {
    /// Fill fraction in `[0, 1]`.
    pub fraction: f32,
    pub tone: BarTone,
}

/// Screen-aligned text anchored at its object's position.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub opacity: f32,
    pub highlighted: bool,
    pub bar: Option<OccupancyBar>,
}

impl Label {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            opacity: 1.0,
            highlighted: false,
            bar: None,
        }
    }

    pub fn with_bar(text: impl Into<String>) -> Self {
        Self {
            bar: Some(OccupancyBar {
                fraction: 0.0,
                tone: BarTone::Primary,
            }),
            ..Self::plain(text)
        }
    }
}

/// Screen-aligned circle outline, sized in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub color: Rgb,
    pub alpha: f32,
    pub diameter_px: f32,
    pub border_px: f32,
}

/// X/Y/Z axes drawn from the object's origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub length: f32,
}

#[derive(Default)]
pub struct Scene {
    world: hecs::World,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a root object at `position`.
    pub fn spawn<T: hecs::Component>(&mut self, position: Vec3, payload: T) -> ObjectId {
        self.world
            .spawn((Transform { position }, Visibility(true), payload))
    }

    /// Adds an object at its parent's origin.
    pub fn attach<T: hecs::Component>(&mut self, parent: ObjectId, payload: T) -> ObjectId {
        self.world.spawn((
            Transform::default(),
            Visibility(true),
            Parent(parent),
            payload,
        ))
    }

    /// Removes an object and all of its descendants. Returns `false` if it was
    /// already gone.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        if !self.world.contains(id) {
            return false;
        }
        let mut doomed = vec![id];
        let mut cursor = 0;
        while cursor < doomed.len() {
            let current = doomed[cursor];
            doomed.extend(self.children(current));
            cursor += 1;
        }
        for object in doomed {
            let _ = self.world.despawn(object);
        }
        true
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.world.contains(id)
    }

    pub fn children(&self, id: ObjectId) -> Vec<ObjectId> {
        self.world
            .query::<&Parent>()
            .iter()
            .filter(|(_, parent)| parent.0 == id)
            .map(|(child, _)| child)
            .collect()
    }

    pub fn parent(&self, id: ObjectId) -> Option<ObjectId> {
        self.world.get::<&Parent>(id).ok().map(|parent| parent.0)
    }

    pub fn set_position(&mut self, id: ObjectId, position: Vec3) {
        if let Some(transform) = self.get_mut::<Transform>(id) {
            transform.position = position;
        }
    }

    /// Position relative to the parent.
    pub fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.world.get::<&Transform>(id).ok().map(|t| t.position)
    }

    pub fn world_position(&self, id: ObjectId) -> Option<Vec3> {
        let mut position = self.position(id)?;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            position += self.position(parent)?;
            current = parent;
        }
        Some(position)
    }

    pub fn set_visible(&mut self, id: ObjectId, visible: bool) {
        if let Some(visibility) = self.get_mut::<Visibility>(id) {
            visibility.0 = visible;
        }
    }

    /// Effective visibility: the object and every ancestor must be visible.
    pub fn is_visible(&self, id: ObjectId) -> bool {
        let mut current = Some(id);
        while let Some(object) = current {
            match self.world.get::<&Visibility>(object) {
                Ok(visibility) if visibility.0 => current = self.parent(object),
                _ => return false,
            }
        }
        true
    }

    pub fn get<T: hecs::Component>(&self, id: ObjectId) -> Option<hecs::Ref<'_, T>> {
        self.world.get::<&T>(id).ok()
    }

    pub fn get_mut<T: hecs::Component>(&mut self, id: ObjectId) -> Option<&mut T> {
        self.world.query_one_mut::<&mut T>(id).ok()
    }

    pub fn len(&self) -> usize {
        self.world.len() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.world.len() == 0
    }

    /// Number of objects carrying a `T` payload.
    pub fn count<T: hecs::Component>(&self) -> usize {
        self.world.query::<&T>().iter().count()
    }

    pub(crate) fn world(&self) -> &hecs::World {
        &self.world
    }
}
