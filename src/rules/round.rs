//! Single-round narrowing state machine.
//!
//! A `Round` owns the hidden target and the current bounds. Each submitted
//! guess is classified, recorded and used to narrow the bounds. The round is
//! over once a guess is correct or the bounds invert.
//!
//! ```
//! use guess_duel::core::Bounds;
//! use guess_duel::rules::{GuessOutcome, Round, RoundOutcome};
//!
//! let mut round = Round::new(42, Bounds::new(0, 100));
//! assert_eq!(round.submit(50), GuessOutcome::TooHigh);
//! assert_eq!(round.bounds(), Bounds::new(0, 49));
//! assert_eq!(round.submit(42), GuessOutcome::Correct);
//! assert_eq!(round.finish().outcome, RoundOutcome::Solved);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Bounds;

use super::judge::{classify, GuessOutcome};

/// One guess and how it was judged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The value proposed by the guesser.
    pub guess: i64,
    /// Judge's classification.
    pub outcome: GuessOutcome,
    /// Bounds in effect when the guess was made.
    pub bounds: Bounds,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// A guess matched the target.
    Solved,
    /// Bounds inverted without a match. Reported, not an error.
    Exhausted,
}

/// Summary of a finished round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub target: i64,
    pub outcome: RoundOutcome,
    pub guesses: Vec<GuessRecord>,
}

impl RoundResult {
    /// Number of guesses made.
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == RoundOutcome::Solved
    }
}

/// Narrowing state for one round.
#[derive(Clone, Debug)]
pub struct Round {
    target: i64,
    bounds: Bounds,
    history: Vec<GuessRecord>,
    solved: bool,
}

impl Round {
    /// Start a round over `range` against a hidden `target`.
    #[must_use]
    pub fn new(target: i64, range: Bounds) -> Self {
        Self {
            target,
            bounds: range,
            history: Vec::new(),
            solved: false,
        }
    }

    /// Current search interval.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    /// Guesses so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// True after a correct guess or once the bounds invert.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.solved || self.bounds.is_empty()
    }

    /// Judge `guess`, record it, and narrow the bounds.
    ///
    /// The guess is not required to lie inside the current bounds; narrowing
    /// always follows `high = guess - 1` / `low = guess + 1`.
    pub fn submit(&mut self, guess: i64) -> GuessOutcome {
        debug_assert!(!self.is_over(), "guess submitted to a finished round");

        let outcome = classify(guess, self.target);
        self.history.push(GuessRecord {
            guess,
            outcome,
            bounds: self.bounds,
        });

        if outcome.is_correct() {
            self.solved = true;
        } else {
            self.bounds = self.bounds.narrow(guess, outcome);
        }

        log::trace!("guess {} -> {:?}, bounds now {}", guess, outcome, self.bounds);
        outcome
    }

    /// Close the round and summarise it.
    #[must_use]
    pub fn finish(self) -> RoundResult {
        RoundResult {
            target: self.target,
            outcome: if self.solved {
                RoundOutcome::Solved
            } else {
                RoundOutcome::Exhausted
            },
            guesses: self.history,
        }
    }

    /// Drive the round to completion with a pure guessing function.
    ///
    /// Useful for simulations and tests; the session drives rounds itself
    /// so it can interleave console output.
    pub fn play_out(mut self, mut strategy: impl FnMut(Bounds) -> i64) -> RoundResult {
        while !self.is_over() {
            let guess = strategy(self.bounds);
            self.submit(guess);
        }
        self.finish()
    }
}
