//! # guess-duel
//!
//! A two-player number guessing game for the console. The computer thinks
//! of a number and you narrow it down; then you think of one and the
//! computer does the same.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Classification and narrowing never touch I/O.
//!    The session decides what to print.
//!
//! 2. **Pluggable Guessers**: Human and computer are both `Guesser` trait
//!    objects. The session never asks which one it is talking to, except
//!    to pick the wording of its transcript.
//!
//! 3. **Configuration Over Constants**: The range, think delay and seed
//!    come in through `GameConfig`, so any interval can be played or tested.
//!
//! 4. **Deterministic**: One seed reproduces every random choice in a
//!    session.
//!
//! ## Modules
//!
//! - `core`: Bounds, RNG, configuration, errors
//! - `rules`: Range judge and the per-round narrowing state machine
//! - `input`: Validated integer reader with end-of-input fallbacks
//! - `players`: Participants and the interactive/automated guessers
//! - `session`: Setup and the two-round game loop
//! - `cli`: Command line arguments for the binary

pub mod core;
pub mod rules;
pub mod input;
pub mod players;
pub mod session;
pub mod cli;

// Re-export commonly used types
pub use crate::core::{Bounds, ComputerStrategy, GameConfig, GameError, GameResult, GameRng};

pub use crate::rules::{classify, GuessOutcome, GuessRecord, Round, RoundOutcome, RoundResult};

pub use crate::input::{parse_non_negative, InputReader};

pub use crate::players::{Automated, Guesser, Interactive, Participant, ParticipantKind};

pub use crate::session::{RoundReport, Session, SessionReport};
