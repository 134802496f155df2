//! Core game model for Tenzies.
//!
//! Ten six-sided dice are rolled; the player holds dice between rolls and
//! wins once every die is held and all of them show the same face. This
//! crate provides the dice types, the pure session transitions, the game
//! controller that tracks the best (lowest) winning roll count, and the
//! key-value store that persists it across runs.

pub mod config;
pub mod dice;
pub mod die;
pub mod error;
pub mod game;
pub mod score;
pub mod session;
pub mod store;

pub use config::TenziesConfig;
pub use dice::{DICE_COUNT, DiceSet};
pub use die::{Die, DieId, FACES};
pub use error::{TzError, TzResult};
pub use game::{Game, WinReport};
pub use score::BestScore;
pub use session::GameSession;
pub use store::{FileStore, MemoryStore, ScoreStore};
