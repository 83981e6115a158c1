pub mod feed;
pub mod input;
pub mod render;
pub mod shutdown;
pub mod state;

pub use feed::TickFeed;
pub use shutdown::ShutdownManager;
pub use state::App;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ipnviz_tui::Tui;
use tokio::time::MissedTickBehavior;

impl App {
    /// Draws frames and feeds ticks on two independent intervals until the
    /// user quits or Ctrl+C arrives. Both run on this task, so a tick never
    /// lands in the middle of a frame.
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let shutdown = ShutdownManager::new();
        shutdown.listen_for_ctrl_c();
        let handle = shutdown.handle();

        let playback = self.driver.config().playback.clone();
        let mut frames =
            tokio::time::interval(Duration::from_millis(1000 / playback.target_fps.max(1)));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks = tokio::time::interval(Duration::from_millis(playback.tick_interval_ms.max(1)));
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

        while self.running && handle.is_running() {
            tokio::select! {
                _ = frames.tick() => {
                    tui.terminal.draw(|f| {
                        self.draw(f);
                    })?;

                    while event::poll(Duration::ZERO)? {
                        match event::read()? {
                            Event::Key(key) if key.kind == KeyEventKind::Press => {
                                self.handle_key(key);
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse(mouse);
                            }
                            _ => {}
                        }
                    }
                }
                _ = ticks.tick() => {
                    if !self.paused {
                        self.step();
                    }
                }
            }
        }

        if !self.running {
            shutdown.request_shutdown();
        }
        shutdown.cleanup(self);
        Ok(())
    }
}
