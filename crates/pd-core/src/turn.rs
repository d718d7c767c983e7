//! Simulation time model.
//!
//! Time is a plain turn counter: one turn is one policy decision followed by
//! one `move`.  There is no wall-clock mapping; turn counts are the quantity
//! the comparator measures.

use std::fmt;

/// A simulation turn counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }

    /// Number of completed turns as a plain count.
    #[inline]
    pub fn count(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
