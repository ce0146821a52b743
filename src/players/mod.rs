//! Participants and their guessing strategies.
//!
//! A participant is a hidden target plus a `Guesser`. Guessers are
//! trait objects so the session treats the human and the computer alike:
//! - `Interactive`: reads guesses from a line source
//! - `Automated`: random or bisecting computer player

pub mod automated;
pub mod interactive;

pub use automated::Automated;
pub use interactive::Interactive;

use std::fmt;
use std::io::Write;

use crate::core::{Bounds, GameResult};

/// Who is behind a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticipantKind {
    /// A person at the console.
    Interactive,
    /// The computer.
    Automated,
}

impl ParticipantKind {
    /// Prompt shown when this kind is guessing.
    #[must_use]
    pub const fn guessing_prompt(self) -> &'static str {
        match self {
            ParticipantKind::Interactive => "You're guessing: ",
            ParticipantKind::Automated => "I'm guessing: ",
        }
    }

    /// Opening of the line announcing this kind holds the number.
    #[must_use]
    pub const fn thinking_subject(self) -> &'static str {
        match self {
            ParticipantKind::Interactive => "You are",
            ParticipantKind::Automated => "I'm",
        }
    }
}

impl fmt::Display for ParticipantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticipantKind::Interactive => write!(f, "human"),
            ParticipantKind::Automated => write!(f, "computer"),
        }
    }
}

/// Strategy for producing a guess.
pub trait Guesser {
    /// Who this guesser stands for.
    fn kind(&self) -> ParticipantKind;

    /// Produce a guess for the current bounds.
    ///
    /// Implementations write their own prompt/echo to `out`. The returned
    /// value is not required to lie inside `bounds`.
    fn guess(&mut self, prompt: &str, bounds: Bounds, out: &mut dyn Write) -> GameResult<i64>;
}

/// A player: a fixed target and a way of guessing.
pub struct Participant {
    target: i64,
    guesser: Box<dyn Guesser>,
}

impl Participant {
    pub fn new(target: i64, guesser: Box<dyn Guesser>) -> Self {
        Self { target, guesser }
    }

    /// The number this participant is thinking of.
    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn kind(&self) -> ParticipantKind {
        self.guesser.kind()
    }

    /// Ask for a guess using this participant's own prompt.
    pub fn guess(&mut self, bounds: Bounds, out: &mut dyn Write) -> GameResult<i64> {
        let prompt = self.kind().guessing_prompt();
        self.guesser.guess(prompt, bounds, out)
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("kind", &self.kind())
            .field("target", &self.target)
            .finish()
    }
}
