//! The fixed set of ten dice.

use rand::Rng;

use crate::die::{Die, DieId};

/// Number of dice in a game.
pub const DICE_COUNT: usize = 10;

/// Exactly [`DICE_COUNT`] dice in a stable display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet {
    dice: [Die; DICE_COUNT],
}

impl DiceSet {
    /// Throw a complete new set of unheld dice.
    pub fn roll_fresh<R: Rng>(rng: &mut R) -> Self {
        Self {
            dice: std::array::from_fn(|_| Die::roll(rng)),
        }
    }

    /// Wrap an explicit set of dice.
    pub fn from_dice(dice: [Die; DICE_COUNT]) -> Self {
        Self { dice }
    }

    /// Re-throw every unheld die. Held dice keep their id and value.
    pub fn reroll_unheld<R: Rng>(self, rng: &mut R) -> Self {
        Self {
            dice: self
                .dice
                .map(|die| if die.is_held() { die } else { Die::roll(rng) }),
        }
    }

    /// Flip the held flag of the die with the given id.
    ///
    /// An id that matches no die leaves the set unchanged.
    pub fn toggle(self, id: DieId) -> Self {
        Self {
            dice: self
                .dice
                .map(|die| if die.id() == id { die.toggled() } else { die }),
        }
    }

    /// Flip the held flag of the die at `index`. Out-of-range is a no-op.
    pub fn toggle_at(mut self, index: usize) -> Self {
        if let Some(die) = self.dice.get_mut(index) {
            *die = die.toggled();
        }
        self
    }

    /// Whether every die is held.
    pub fn all_held(&self) -> bool {
        self.dice.iter().all(Die::is_held)
    }

    /// Whether every die shows the same face.
    pub fn all_same_value(&self) -> bool {
        let first = self.dice[0].value();
        self.dice.iter().all(|d| d.value() == first)
    }

    /// Number of held dice.
    pub fn held_count(&self) -> usize {
        self.dice.iter().filter(|d| d.is_held()).count()
    }

    /// The die at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    /// Iterate over the dice in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Die> {
        self.dice.iter()
    }

    /// Number of dice (always [`DICE_COUNT`]).
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for DiceSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let faces: Vec<String> = self.dice.iter().map(Die::to_string).collect();
        write!(f, "{}", faces.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fixed(values: [u8; DICE_COUNT]) -> DiceSet {
        DiceSet::from_dice(values.map(|v| Die::with_value(v).unwrap()))
    }

    #[test]
    fn fresh_set_has_ten_unheld_dice() {
        let mut rng = StdRng::seed_from_u64(42);
        let set = DiceSet::roll_fresh(&mut rng);
        assert_eq!(set.len(), DICE_COUNT);
        assert_eq!(set.held_count(), 0);
        assert!(set.iter().all(|d| (1..=6).contains(&d.value())));
    }

    #[test]
    fn reroll_keeps_held_dice() {
        let mut rng = StdRng::seed_from_u64(3);
        let set = DiceSet::roll_fresh(&mut rng).toggle_at(0).toggle_at(4);
        let before = set.clone();
        let after = set.reroll_unheld(&mut rng);
        assert_eq!(after.get(0), before.get(0));
        assert_eq!(after.get(4), before.get(4));
        for i in [1, 2, 3, 5, 6, 7, 8, 9] {
            assert_ne!(after.get(i).unwrap().id(), before.get(i).unwrap().id());
        }
    }

    #[test]
    fn toggle_by_id() {
        let set = fixed([1, 2, 3, 4, 5, 6, 1, 2, 3, 4]);
        let id = set.get(3).unwrap().id();
        let set = set.toggle(id);
        assert!(set.get(3).unwrap().is_held());
        assert_eq!(set.held_count(), 1);
        let set = set.toggle(id);
        assert_eq!(set.held_count(), 0);
    }

    #[test]
    fn toggle_at_out_of_range_is_noop() {
        let set = fixed([2; DICE_COUNT]);
        assert_eq!(set.clone().toggle_at(DICE_COUNT), set);
    }

    #[test]
    fn same_value_and_held_checks() {
        let set = fixed([4; DICE_COUNT]);
        assert!(set.all_same_value());
        assert!(!set.all_held());

        let mixed = fixed([4, 4, 4, 4, 4, 4, 4, 4, 4, 5]);
        assert!(!mixed.all_same_value());
    }

    #[test]
    fn display_lists_faces() {
        let set = fixed([1, 2, 3, 4, 5, 6, 1, 2, 3, 4]).toggle_at(1);
        assert_eq!(set.to_string(), "[1] <2> [3] [4] [5] [6] [1] [2] [3] [4]");
    }
}
