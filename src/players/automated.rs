//! Computer player.

use std::io::Write;
use std::time::Duration;

use crate::core::{Bounds, ComputerStrategy, GameResult, GameRng};

use super::{Guesser, ParticipantKind};

/// Guesses without input: a uniform sample or the midpoint of the bounds.
///
/// After echoing its guess it pauses for `delay` so a human can follow
/// along. A zero delay skips the sleep.
#[derive(Clone, Debug)]
pub struct Automated {
    rng: GameRng,
    strategy: ComputerStrategy,
    delay: Duration,
}

impl Automated {
    pub fn new(rng: GameRng, strategy: ComputerStrategy, delay: Duration) -> Self {
        Self {
            rng,
            strategy,
            delay,
        }
    }

    /// Random guesser with no pause.
    pub fn random(rng: GameRng) -> Self {
        Self::new(rng, ComputerStrategy::Random, Duration::ZERO)
    }

    /// Bisecting guesser with no pause.
    pub fn bisect() -> Self {
        Self::new(GameRng::new(0), ComputerStrategy::Bisect, Duration::ZERO)
    }

    fn choose(&mut self, bounds: Bounds) -> i64 {
        match self.strategy {
            ComputerStrategy::Random => self.rng.pick(bounds),
            ComputerStrategy::Bisect => bounds.midpoint(),
        }
    }
}

impl Guesser for Automated {
    fn kind(&self) -> ParticipantKind {
        ParticipantKind::Automated
    }

    fn guess(&mut self, prompt: &str, bounds: Bounds, out: &mut dyn Write) -> GameResult<i64> {
        let guess = self.choose(bounds);
        writeln!(out, "{}{}", prompt, guess)?;
        out.flush()?;
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        Ok(guess)
    }
}
