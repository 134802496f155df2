pub mod best;
pub mod launch;
pub mod play;
pub mod reset;
