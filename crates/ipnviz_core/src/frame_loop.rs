//! Render clock primitives shared by the native and browser loops.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation token for a frame loop. Clones share the same flag; once
/// stopped, a loop does not restart.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            tracing::debug!("Frame loop stop requested");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Default for LoopHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts frames and measures the frame rate over one-second windows.
/// Timestamps are supplied by the caller in seconds.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frames: u64,
    last: Option<f64>,
    window_start: Option<f64>,
    window_frames: u32,
    fps: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a frame at `now` and returns the time since the previous one.
    pub fn frame(&mut self, now: f64) -> f64 {
        self.frames += 1;
        let delta = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);

        let start = *self.window_start.get_or_insert(now);
        self.window_frames += 1;
        let elapsed = now - start;
        if elapsed >= 1.0 {
            self.fps = f64::from(self.window_frames) / elapsed;
            self.window_start = Some(now);
            self.window_frames = 0;
        }
        delta
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames per second over the last complete window, zero before the first
    /// window closes.
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_shared_between_clones() {
        let handle = LoopHandle::new();
        let other = handle.clone();
        assert!(other.is_running());
        handle.stop();
        assert!(!other.is_running());
        handle.stop();
        assert!(!handle.is_running());
    }

    #[test]
    fn test_fps_over_one_second_window() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frame(10.0), 0.0);
        for i in 1..=60 {
            clock.frame(10.0 + f64::from(i) / 60.0);
        }
        assert_eq!(clock.frames(), 61);
        assert!((clock.fps() - 61.0).abs() < 1e-6);
    }

    #[test]
    fn test_delta_never_negative() {
        let mut clock = FrameClock::new();
        clock.frame(5.0);
        assert_eq!(clock.frame(4.0), 0.0);
        assert!((clock.frame(4.5) - 0.5).abs() < 1e-9);
    }
}
