//! The entity capability: built from one setup record, refreshed from the
//! tick record at the same index.

use crate::config::SceneConfig;
use crate::scale::SceneScale;
use crate::scene::Scene;

/// Shared, read-only state handed to every marker.
#[derive(Debug, Clone)]
pub struct MarkerContext {
    pub config: SceneConfig,
    pub scale: SceneScale,
}

impl MarkerContext {
    pub fn new(config: SceneConfig) -> Self {
        let scale = config.scale();
        Self { config, scale }
    }
}

impl Default for MarkerContext {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

pub trait Marker: Sized {
    type Setup;
    type State;

    fn spawn(scene: &mut Scene, ctx: &MarkerContext, setup: &Self::Setup) -> Self;

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, state: &Self::State);
}

/// One marker per setup array position, updated by zipping with the tick
/// array of the same class.
pub struct IndexedMarkers<M> {
    markers: Vec<M>,
}

impl<M: Marker> IndexedMarkers<M> {
    pub fn spawn_all(scene: &mut Scene, ctx: &MarkerContext, setups: &[M::Setup]) -> Self {
        Self {
            markers: setups
                .iter()
                .map(|setup| M::spawn(scene, ctx, setup))
                .collect(),
        }
    }

    pub fn update_all(&mut self, scene: &mut Scene, ctx: &MarkerContext, states: &[M::State]) {
        debug_assert_eq!(
            self.markers.len(),
            states.len(),
            "tick is not index-aligned with setup"
        );
        for (marker, state) in self.markers.iter_mut().zip(states) {
            marker.update(scene, ctx, state);
        }
    }
}

impl<M> IndexedMarkers<M> {
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&M> {
        self.markers.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, M> {
        self.markers.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, M> {
        self.markers.iter_mut()
    }
}

impl<M> std::ops::Index<usize> for IndexedMarkers<M> {
    type Output = M;

    fn index(&self, index: usize) -> &M {
        &self.markers[index]
    }
}

impl<M> std::ops::IndexMut<usize> for IndexedMarkers<M> {
    fn index_mut(&mut self, index: usize) -> &mut M {
        &mut self.markers[index]
    }
}
