//! Session orchestration: setup, the two rounds, and their report.

mod game;
mod report;

pub use game::{Session, TARGET_PROMPT};
pub use report::{RoundReport, SessionReport};
