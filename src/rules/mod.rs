//! Game rules: judging guesses and narrowing a round.
//!
//! - `judge`: pure classification of a guess plus its transcript line
//! - `round`: the per-round narrowing state machine and its result
//!
//! Neither module performs I/O; the session decides what to print.

pub mod judge;
pub mod round;

pub use judge::{classify, describe, GuessOutcome};
pub use round::{GuessRecord, Round, RoundOutcome, RoundResult};
