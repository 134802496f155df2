//! Terminal UI for Tenzies.
//!
//! A ratatui board with ten clickable dice, the roll/new-game button,
//! roll and best-score counters, and a confetti overlay once the game is
//! won. Mouse and keyboard both drive the same [`tz_core::Game`].

pub mod app;
pub mod board;
pub mod confetti;
pub mod die_face;
pub mod shared;
pub mod terminal;
