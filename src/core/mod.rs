//! Core types: bounds, RNG, configuration, errors.
//!
//! Everything else in the crate is built on these; none of them know
//! about consoles or participants.

pub mod bounds;
pub mod rng;
pub mod config;
pub mod error;

pub use bounds::Bounds;
pub use rng::GameRng;
pub use config::{ComputerStrategy, GameConfig, LOWER_BOUND, THINK_DELAY, UPPER_BOUND};
pub use error::{GameError, GameResult};
