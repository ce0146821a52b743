//! Command line arguments for the `guess-duel` binary.

use clap::{ArgAction, Parser, ValueEnum};
use std::time::Duration;

use crate::core::{ComputerStrategy, GameConfig, LOWER_BOUND, UPPER_BOUND};

/// How the computer guesses, as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ComputerArg {
    /// Uniform sample from the current bounds
    Random,
    /// Midpoint of the current bounds
    Bisect,
}

impl From<ComputerArg> for ComputerStrategy {
    fn from(arg: ComputerArg) -> Self {
        match arg {
            ComputerArg::Random => ComputerStrategy::Random,
            ComputerArg::Bisect => ComputerStrategy::Bisect,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Guess the computer's number, then let it guess yours",
    long_about = None,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Your number. Prompted for when missing or not an integer.
    pub target: Option<String>,

    /// Lower end of the guessing range
    #[arg(long, default_value_t = LOWER_BOUND)]
    pub low: i64,

    /// Upper end of the guessing range
    #[arg(long, default_value_t = UPPER_BOUND)]
    pub high: i64,

    /// Pause after each computer guess, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub delay_ms: u64,

    /// Seed for every random choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer guessing strategy
    #[arg(long, value_enum, default_value_t = ComputerArg::Random)]
    pub computer: ComputerArg,

    /// Reject guesses outside the current bounds
    #[arg(long)]
    pub strict: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Game configuration described by these arguments.
    pub fn config(&self) -> GameConfig {
        let config = GameConfig::new()
            .with_range(self.low, self.high)
            .with_think_delay(Duration::from_millis(self.delay_ms))
            .with_strict_input(self.strict)
            .with_computer(self.computer.into());
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}
