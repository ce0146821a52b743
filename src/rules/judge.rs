//! Range judge: classify a guess against a hidden target.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result of comparing a guess to a target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Guess is above the target.
    TooHigh,
    /// Guess is below the target.
    TooLow,
    /// Guess hits the target.
    Correct,
}

impl GuessOutcome {
    /// Does this outcome end the round?
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, GuessOutcome::Correct)
    }
}

/// Classify `proposed` against `target`. Pure.
#[must_use]
pub fn classify(proposed: i64, target: i64) -> GuessOutcome {
    match proposed.cmp(&target) {
        Ordering::Equal => GuessOutcome::Correct,
        Ordering::Greater => GuessOutcome::TooHigh,
        Ordering::Less => GuessOutcome::TooLow,
    }
}

/// Transcript line announcing how `proposed` was judged.
#[must_use]
pub fn describe(outcome: GuessOutcome, proposed: i64) -> String {
    match outcome {
        GuessOutcome::Correct => "Your guess is correct. Congratulations!".to_string(),
        GuessOutcome::TooHigh => format!("{} is greater than the actual number", proposed),
        GuessOutcome::TooLow => format!("{} is less than the actual number", proposed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(42, 42), GuessOutcome::Correct);
        assert_eq!(classify(50, 42), GuessOutcome::TooHigh);
        assert_eq!(classify(24, 42), GuessOutcome::TooLow);
        assert_eq!(classify(-1, 0), GuessOutcome::TooLow);
        assert_eq!(classify(i64::MAX, i64::MIN), GuessOutcome::TooHigh);
    }

    #[test]
    fn test_is_correct() {
        assert!(GuessOutcome::Correct.is_correct());
        assert!(!GuessOutcome::TooHigh.is_correct());
        assert!(!GuessOutcome::TooLow.is_correct());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            describe(GuessOutcome::TooHigh, 50),
            "50 is greater than the actual number"
        );
        assert_eq!(
            describe(GuessOutcome::TooLow, 24),
            "24 is less than the actual number"
        );
        assert_eq!(
            describe(GuessOutcome::Correct, 42),
            "Your guess is correct. Congratulations!"
        );
    }
}
