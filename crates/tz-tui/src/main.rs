//! Standalone TUI binary for Tenzies.

use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tz_core::{FileStore, Game, TenziesConfig};

#[derive(Parser)]
#[command(name = "tenzies-tui", about = "Play Tenzies in the terminal", version)]
struct Args {
    /// Score store file (default: $TENZIES_HOME/scores.json or ~/.tenzies/scores.json)
    #[arg(long)]
    store: Option<PathBuf>,

    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log {
        init_file_logging(path).unwrap_or_else(|e| {
            eprintln!("error: cannot open log file {}: {e}", path.display());
            process::exit(1);
        });
    }

    let mut config = TenziesConfig::from_env();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if let Some(store) = args.store {
        config = config.with_store_path(store);
    }

    let store = FileStore::open(&config.store_path);
    let game = Game::new(Box::new(store), &config);
    let app = tz_tui::app::TuiApp::new(game, config.seed);

    if let Err(e) = tz_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Send tracing output to a file; stderr would draw over the board.
fn init_file_logging(path: &std::path::Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
