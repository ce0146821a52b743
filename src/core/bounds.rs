//! Inclusive search interval for a round.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rules::GuessOutcome;

/// Inclusive `[low, high]` interval.
///
/// A round stays active while `low <= high`. Narrowing past the last
/// candidate leaves the interval inverted, which ends the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub low: i64,
    pub high: i64,
}

impl Bounds {
    /// Create a new interval. Inverted intervals are allowed and empty.
    #[must_use]
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// True once `low > high`.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.low > self.high
    }

    /// Does the interval contain `value`?
    #[must_use]
    pub const fn contains(self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Number of candidates left (0 when inverted).
    #[must_use]
    pub fn len(self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.high.abs_diff(self.low).saturating_add(1)
        }
    }

    /// floor((low + high) / 2) without overflowing.
    #[must_use]
    pub fn midpoint(self) -> i64 {
        // Average in i128 then floor, so negative sums round down too.
        (i128::from(self.low) + i128::from(self.high)).div_euclid(2) as i64
    }

    /// Shrink the interval after `guess` was classified as `outcome`.
    ///
    /// - `TooHigh`: `high = guess - 1`, `low` unchanged
    /// - `TooLow`: `low = guess + 1`, `high` unchanged
    /// - `Correct`: unchanged (the round is over)
    #[must_use]
    pub fn narrow(self, guess: i64, outcome: GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::TooHigh => Self::new(self.low, guess.saturating_sub(1)),
            GuessOutcome::TooLow => Self::new(guess.saturating_add(1), self.high),
            GuessOutcome::Correct => self,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
