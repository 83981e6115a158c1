//! Graceful shutdown handling for the application.
//!
//! Outside raw mode Ctrl+C arrives as a signal and stops the [`LoopHandle`].
//! While the terminal UI is up it arrives as a key press, which `handle_key`
//! turns into a quit like `q`; the run loop then stops the same handle.

use ipnviz_core::LoopHandle;

use crate::app::App;

/// Manages graceful shutdown of the frame loop.
#[derive(Debug, Clone, Default)]
pub struct ShutdownManager {
    handle: LoopHandle,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token the frame loop polls.
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Stops the loop when the process receives SIGINT. Needs a running
    /// tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let handle = self.handle.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, initiating graceful shutdown...");
            handle.stop();
        });
    }

    pub fn request_shutdown(&self) {
        tracing::info!("Shutdown requested");
        self.handle.stop();
    }

    pub fn is_shutdown_requested(&self) -> bool {
        !self.handle.is_running()
    }

    /// Logs where playback stopped.
    pub fn cleanup(&self, app: &App) {
        let stats = app.driver.stats();
        tracing::info!(
            ticks = stats.ticks,
            remaining = app.feed.remaining(),
            frames = stats.frames,
            "Playback stopped"
        );
    }
}
