//! CLI frontend for Tenzies.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tz_core::TenziesConfig;

#[derive(Parser)]
#[command(
    name = "tenzies",
    about = "Tenzies: roll until all ten dice match",
    version,
    propagate_version = true
)]
struct Cli {
    /// Score store file (default: $TENZIES_HOME/scores.json or ~/.tenzies/scores.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in line mode on stdin/stdout
    Play {
        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Show the best score
    Best,

    /// Forget the best score
    Reset,

    /// Launch the terminal UI
    Tui {
        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Launch the windowed GUI
    Gui {
        /// RNG seed for a reproducible game
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = TenziesConfig::from_env();
    if let Some(store) = cli.store {
        config = config.with_store_path(store);
    }

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(with_seed(config, seed)),
        Commands::Best => commands::best::run(&config),
        Commands::Reset => commands::reset::run(&config),
        Commands::Tui { seed } => commands::launch::run("tenzies-tui", &with_seed(config, seed)),
        Commands::Gui { seed } => commands::launch::run("tenzies-gui", &with_seed(config, seed)),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn with_seed(config: TenziesConfig, seed: Option<u64>) -> TenziesConfig {
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}
