//! Game configuration.
//!
//! A `GameConfig` is passed into the session at construction. Nothing in
//! the crate reads process-wide constants for the range, so tests can play
//! on any interval.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{Bounds, GameError, GameResult};

/// Default lower end of the guessing range.
pub const LOWER_BOUND: i64 = 0;

/// Default upper end of the guessing range.
pub const UPPER_BOUND: i64 = 100;

/// Default pause before the computer announces a guess.
pub const THINK_DELAY: Duration = Duration::from_millis(1500);

/// Strategy used by the automated participant when guessing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputerStrategy {
    /// Uniform sample from the current bounds.
    #[default]
    Random,
    /// Always the floor midpoint of the current bounds.
    Bisect,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Inclusive guessing range for both rounds.
    pub range: Bounds,

    /// Cosmetic pause after the computer prints a guess.
    /// Zero skips the sleep entirely.
    pub think_delay: Duration,

    /// Seed for every random choice. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Reject console guesses that fall outside the current bounds.
    /// Off by default: only the digit pattern is checked.
    pub strict_input: bool,

    /// How the computer guesses.
    pub computer: ComputerStrategy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            range: Bounds::new(LOWER_BOUND, UPPER_BOUND),
            think_delay: THINK_DELAY,
            seed: None,
            strict_input: false,
            computer: ComputerStrategy::Random,
        }
    }
}

impl GameConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guessing range.
    #[must_use]
    pub fn with_range(mut self, low: i64, high: i64) -> Self {
        self.range = Bounds::new(low, high);
        self
    }

    /// Set the computer's think delay.
    #[must_use]
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable range enforcement on console guesses.
    #[must_use]
    pub fn with_strict_input(mut self, strict: bool) -> Self {
        self.strict_input = strict;
        self
    }

    /// Set the computer's guessing strategy.
    #[must_use]
    pub fn with_computer(mut self, strategy: ComputerStrategy) -> Self {
        self.computer = strategy;
        self
    }

    /// Check the range is non-empty.
    pub fn validate(&self) -> GameResult<()> {
        if self.range.is_empty() {
            return Err(GameError::InvalidBounds {
                low: self.range.low,
                high: self.range.high,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.range, Bounds::new(0, 100));
        assert_eq!(config.think_delay, Duration::from_millis(1500));
        assert_eq!(config.seed, None);
        assert!(!config.strict_input);
        assert_eq!(config.computer, ComputerStrategy::Random);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_range(1, 10)
            .with_think_delay(Duration::ZERO)
            .with_seed(123)
            .with_strict_input(true)
            .with_computer(ComputerStrategy::Bisect);

        assert_eq!(config.range, Bounds::new(1, 10));
        assert_eq!(config.think_delay, Duration::ZERO);
        assert_eq!(config.seed, Some(123));
        assert!(config.strict_input);
        assert_eq!(config.computer, ComputerStrategy::Bisect);
    }

    #[test]
    fn test_validate() {
        assert!(GameConfig::default().validate().is_ok());
        assert!(GameConfig::new().with_range(5, 5).validate().is_ok());

        let err = GameConfig::new().with_range(6, 5).validate().unwrap_err();
        assert!(matches!(err, GameError::InvalidBounds { low: 6, high: 5 }));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
