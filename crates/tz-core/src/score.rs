//! Best (lowest) winning roll count.

use std::fmt;

/// The lowest roll count over all won games; 0 means no record yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BestScore(u32);

impl BestScore {
    /// No record yet.
    pub const UNSET: Self = Self(0);

    /// A recorded best of `rolls`. Zero is the same as unset.
    pub fn new(rolls: u32) -> Self {
        Self(rolls)
    }

    /// Parse a persisted value. Missing or malformed input reads as unset.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .map(Self)
            .unwrap_or_default()
    }

    /// The raw value, 0 when unset.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Whether a record exists.
    pub fn is_set(self) -> bool {
        self.0 != 0
    }

    /// Whether winning in `rolls` would set a new record.
    pub fn improved_by(self, rolls: u32) -> bool {
        !self.is_set() || rolls < self.0
    }
}

impl fmt::Display for BestScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
