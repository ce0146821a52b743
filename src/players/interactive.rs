//! Human player reading guesses from the console.

use std::io::{BufRead, Write};

use crate::core::{Bounds, GameResult};
use crate::input::InputReader;

use super::{Guesser, ParticipantKind};

/// Delegates every guess to an `InputReader`.
pub struct Interactive<R> {
    reader: InputReader<R>,
}

impl<R: BufRead> Interactive<R> {
    pub fn new(reader: InputReader<R>) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Guesser for Interactive<R> {
    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Interactive
    }

    fn guess(&mut self, prompt: &str, bounds: Bounds, out: &mut dyn Write) -> GameResult<i64> {
        self.reader.read_non_negative_integer(prompt, bounds, out)
    }
}
