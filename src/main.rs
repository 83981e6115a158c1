use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use ipnviz_core::init_logging;
use ipnviz_io::Recording;
use ipnviz_lib::app::App;
use ipnviz_tui::Tui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Snapshot recording to play (JSON lines, `.gz` for gzip)
    recording: PathBuf,

    /// Mode to run the viewer in
    #[arg(short, long, value_enum, default_value = "standard")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the delay between ticks, in milliseconds
    #[arg(long)]
    tick_interval_ms: Option<u64>,

    /// Log file used while the terminal UI is active
    #[arg(long, default_value = "ipnviz.log")]
    log_file: PathBuf,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Standard,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.mode {
        Mode::Headless => init_logging(None)?,
        Mode::Standard => init_logging(Some(&args.log_file))?,
    }

    let mut config = App::load_config(&args.config);
    if let Some(ms) = args.tick_interval_ms {
        config.playback.tick_interval_ms = ms;
        config.validate()?;
    }
    let recording = Recording::load(&args.recording)?;
    let mut app = App::new(recording, config, args.config);

    match args.mode {
        Mode::Headless => {
            println!("Running in HEADLESS mode...");
            let applied = app.replay_all();
            let stats = app.driver.stats();
            stats.log();
            println!(
                "Replayed {} ticks, {} links seen, final tick: {}",
                applied, stats.connections, stats.final_tick
            );
        }
        Mode::Standard => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let res = app.run(&mut tui).await;

            tui.exit()?;

            if let Err(e) = res {
                eprintln!("Application error: {e}");
            } else {
                println!("Exited clean.");
            }
        }
    }

    Ok(())
}
