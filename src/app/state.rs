use std::path::{Path, PathBuf};
use std::time::Instant;

use ipnviz_core::{SceneConfig, SceneDriver};
use ipnviz_io::Recording;

use crate::app::feed::TickFeed;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub show_labels: bool,
    pub driver: SceneDriver,
    pub feed: TickFeed,
    pub config_path: PathBuf,
    started: Instant,
}

impl App {
    /// Reads the scene configuration. A missing file is created with the
    /// defaults; an unreadable or invalid one is reported and ignored.
    pub fn load_config(path: &Path) -> SceneConfig {
        if let Ok(content) = std::fs::read_to_string(path) {
            match SceneConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid configuration, using defaults");
                }
            }
        }
        let default = SceneConfig::default();
        if !path.exists() {
            if let Ok(toml_str) = toml::to_string(&default) {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    pub fn new(recording: Recording, config: SceneConfig, config_path: PathBuf) -> Self {
        let Recording { setup, ticks } = recording;
        Self {
            running: true,
            paused: false,
            show_labels: true,
            driver: SceneDriver::setup(&setup, config),
            feed: TickFeed::new(ticks),
            config_path,
            started: Instant::now(),
        }
    }

    /// Ingests the next recorded tick. Returns false once the recording is
    /// exhausted.
    pub fn step(&mut self) -> bool {
        match self.feed.next_tick() {
            Some(tick) => {
                self.driver.tick(tick);
                true
            }
            None => false,
        }
    }

    /// Plays every remaining tick back to back, as headless mode does.
    pub fn replay_all(&mut self) -> usize {
        let mut applied = 0;
        while self.step() {
            applied += 1;
        }
        applied
    }

    /// Seconds since the app started; the render clock runs on this.
    pub fn elapsed(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}
