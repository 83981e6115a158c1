//! Per-class update dispatch.

use ipnviz_data::TickSnapshot;

use crate::marker::MarkerContext;
use crate::scene::Scene;
use crate::stats::SceneStats;

/// One marker collection reconciling itself against a tick.
///
/// Implementations read only the shared tick, never a sibling collection, so
/// the dispatch order carries no data dependency.
pub trait Component {
    fn name(&self) -> &'static str;

    fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, tick: &TickSnapshot);

    /// Adds this component's counters to `stats`.
    fn report(&self, _scene: &Scene, _stats: &mut SceneStats) {}
}

#[derive(Default)]
pub struct Composer {
    components: Vec<Box<dyn Component>>,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component: impl Component + 'static) -> Self {
        self.components.push(Box::new(component));
        self
    }

    /// Forwards the tick to every component in registration order.
    pub fn update(&mut self, scene: &mut Scene, ctx: &MarkerContext, tick: &TickSnapshot) {
        for component in &mut self.components {
            component.update(scene, ctx, tick);
        }
    }

    pub fn report(&self, scene: &Scene, stats: &mut SceneStats) {
        for component in &self.components {
            component.report(scene, stats);
        }
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.components.iter().map(|c| c.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
