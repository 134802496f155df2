//! Game session state and its pure transitions.
//!
//! Every transition consumes the current state and returns the next one,
//! re-evaluating the win condition on the way out. Whoever owns the
//! session (usually [`crate::Game`]) decides what to do with the result.

use rand::Rng;

use crate::dice::DiceSet;
use crate::die::DieId;

/// The dice on the table, how many rolls were taken, and whether the game is won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    dice: DiceSet,
    roll_count: u32,
    won: bool,
}

impl GameSession {
    /// Start a session with a fresh set of dice.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            dice: DiceSet::roll_fresh(rng),
            roll_count: 0,
            won: false,
        }
    }

    /// Rebuild a session from explicit dice and roll count.
    pub fn from_parts(dice: DiceSet, roll_count: u32) -> Self {
        Self {
            dice,
            roll_count,
            won: false,
        }
        .settle()
    }

    /// Throw away this session and start over.
    pub fn restart<R: Rng>(self, rng: &mut R) -> Self {
        Self::new(rng)
    }

    /// Re-throw every unheld die and count the roll.
    ///
    /// With every die held nothing is thrown and the count stays put.
    pub fn roll<R: Rng>(self, rng: &mut R) -> Self {
        if self.dice.all_held() {
            return self.settle();
        }
        Self {
            dice: self.dice.reroll_unheld(rng),
            roll_count: self.roll_count + 1,
            won: self.won,
        }
        .settle()
    }

    /// Hold or release the die with the given id. Unknown ids are ignored.
    pub fn toggle_hold(self, id: DieId) -> Self {
        Self {
            dice: self.dice.toggle(id),
            ..self
        }
        .settle()
    }

    /// Hold or release the die at `index`. Out-of-range is ignored.
    pub fn toggle_hold_at(self, index: usize) -> Self {
        Self {
            dice: self.dice.toggle_at(index),
            ..self
        }
        .settle()
    }

    /// The dice on the table.
    pub fn dice(&self) -> &DiceSet {
        &self.dice
    }

    /// Rolls taken so far.
    pub fn roll_count(&self) -> u32 {
        self.roll_count
    }

    /// Whether the win condition has been reached.
    pub fn is_won(&self) -> bool {
        self.won
    }

    // Win is sticky until restart.
    fn settle(mut self) -> Self {
        if !self.won && is_winning(&self.dice) {
            self.won = true;
        }
        self
    }
}

/// All dice held and showing the same face.
fn is_winning(dice: &DiceSet) -> bool {
    dice.all_held() && dice.all_same_value()
}
