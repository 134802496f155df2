//! A single six-sided die and its identity.

use std::fmt;

use rand::Rng;
use uuid::Uuid;

use crate::error::{TzError, TzResult};

/// Number of faces on every die.
pub const FACES: u8 = 6;

/// Unique identifier for a die.
///
/// A new id is drawn every time a die is created or re-rolled, so an id
/// names one particular throw of one particular die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DieId(pub Uuid);

impl DieId {
    /// Draw a new random id from the given RNG.
    ///
    /// Ids come from the game RNG rather than the OS so that a seeded game
    /// replays with the same ids.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes);
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

/// One die: its id, the face it shows, and whether it is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    id: DieId,
    value: u8,
    held: bool,
}

impl Die {
    /// Throw a fresh, unheld die.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            id: DieId::generate(rng),
            value: rng.random_range(1..=FACES),
            held: false,
        }
    }

    /// Build an unheld die showing a fixed face.
    pub fn with_value(value: u8) -> TzResult<Self> {
        if !(1..=FACES).contains(&value) {
            return Err(TzError::InvalidFace(value));
        }
        Ok(Self {
            id: DieId::generate(&mut rand::rng()),
            value,
            held: false,
        })
    }

    /// The die's id.
    pub fn id(&self) -> DieId {
        self.id
    }

    /// The face currently showing (1-6).
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Whether the die is held out of the next roll.
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// The same die with its held flag flipped. Id and value are kept.
    pub fn toggled(self) -> Self {
        Self {
            held: !self.held,
            ..self
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.held {
            write!(f, "<{}>", self.value)
        } else {
            write!(f, "[{}]", self.value)
        }
    }
}

/// Pip positions on a 3x3 grid (row-major) for a face value.
///
/// Out-of-range values give an empty face.
pub fn pip_grid(value: u8) -> [[bool; 3]; 3] {
    const O: bool = false;
    const X: bool = true;
    match value {
        1 => [[O, O, O], [O, X, O], [O, O, O]],
        2 => [[X, O, O], [O, O, O], [O, O, X]],
        3 => [[X, O, O], [O, X, O], [O, O, X]],
        4 => [[X, O, X], [O, O, O], [X, O, X]],
        5 => [[X, O, X], [O, X, O], [X, O, X]],
        6 => [[X, O, X], [X, O, X], [X, O, X]],
        _ => [[O; 3]; 3],
    }
}
