//! Error types for the game.
//!
//! Malformed console input and end-of-input are not errors: the input
//! reader recovers from both locally. What remains is invalid configuration
//! and genuine I/O failure on the console streams.

/// Game errors.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Configured range has no members.
    #[error("invalid range: lower bound {low} is greater than upper bound {high}")]
    InvalidBounds { low: i64, high: i64 },

    /// Reading the input source or writing the transcript failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
