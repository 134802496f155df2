//! Windowed Tenzies: macroquad entry point.
//!
//! Options: `--store <file>` for the score store and `--seed <n>` for a
//! reproducible game. Environment variables from `tz_core::config` apply
//! underneath.

use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use tz_core::{FileStore, Game, TenziesConfig};
use tz_gui::board::BoardScreen;
use tz_gui::theme::{CANVAS_H, CANVAS_W, palette, setup_virtual_canvas};

fn window_conf() -> Conf {
    Conf {
        window_title: "Tenzies".to_owned(),
        window_width: (CANVAS_W * 2.0) as i32,
        window_height: (CANVAS_H * 2.0) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

/// Value following `flag` on the command line.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = TenziesConfig::from_env();
    if let Some(store) = arg_value(&args, "--store") {
        config = config.with_store_path(store);
    }
    match arg_value(&args, "--seed").map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => config = config.with_seed(seed),
        Some(Err(e)) => tracing::warn!(error = %e, "ignoring --seed"),
        None => {}
    }

    let store = FileStore::open(&config.store_path);
    let mut board = BoardScreen::new(Game::new(Box::new(store), &config), config.seed);

    loop {
        // Clear with black (letterbox bars)
        clear_background(palette::BLACK);
        setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::DARK_BLUE);

        if board.frame() {
            break;
        }

        next_frame().await;
    }
}
