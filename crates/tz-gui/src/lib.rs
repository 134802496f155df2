//! Windowed GUI for Tenzies.
//!
//! A macroquad front end on a fixed virtual canvas: click dice to hold
//! them, click the button (or press Space) to roll, and watch the
//! confetti once all ten match.

pub mod board;
pub mod theme;
pub mod widget;
