//! Paces a loaded recording into the scene one tick at a time.

use ipnviz_data::TickSnapshot;

/// Cursor over the ticks of a recording. Once exhausted it stays exhausted,
/// which leaves the scene at its last committed state.
#[derive(Debug, Clone, Default)]
pub struct TickFeed {
    ticks: Vec<TickSnapshot>,
    next: usize,
}

impl TickFeed {
    pub fn new(ticks: Vec<TickSnapshot>) -> Self {
        Self { ticks, next: 0 }
    }

    pub fn next_tick(&mut self) -> Option<&TickSnapshot> {
        let tick = self.ticks.get(self.next)?;
        self.next += 1;
        Some(tick)
    }

    /// Number of ticks already handed out.
    pub fn position(&self) -> usize {
        self.next
    }

    pub fn remaining(&self) -> usize {
        self.ticks.len() - self.next
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.next >= self.ticks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(time: u64) -> TickSnapshot {
        TickSnapshot {
            time,
            ..TickSnapshot::default()
        }
    }

    #[test]
    fn test_hands_out_ticks_in_order() {
        let mut feed = TickFeed::new(vec![tick(1), tick(2)]);
        assert_eq!(feed.next_tick().map(|t| t.time), Some(1));
        assert_eq!(feed.remaining(), 1);
        assert_eq!(feed.next_tick().map(|t| t.time), Some(2));
        assert!(feed.is_exhausted());
    }

    #[test]
    fn test_exhausted_feed_stays_exhausted() {
        let mut feed = TickFeed::new(vec![tick(1)]);
        feed.next_tick();
        assert!(feed.next_tick().is_none());
        assert!(feed.next_tick().is_none());
        assert_eq!(feed.position(), 1);
        assert_eq!(feed.remaining(), 0);
    }

    #[test]
    fn test_empty_feed() {
        let mut feed = TickFeed::default();
        assert!(feed.is_empty());
        assert!(feed.is_exhausted());
        assert!(feed.next_tick().is_none());
    }
}
