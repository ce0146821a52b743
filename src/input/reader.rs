//! Line-oriented reader for non-negative integers.
//!
//! ## States
//!
//! - `AwaitingInput`: prompt written, waiting for a line
//! - `Validating`: a line arrived, check it against the digit pattern
//! - `Done`: a value is ready (parsed, or a fallback on end-of-input)
//!
//! A rejected line sends the reader back to `AwaitingInput` after an error
//! message. End-of-input never fails: it yields a fallback value.

use regex::Regex;
use std::io::{BufRead, Write};
use std::sync::LazyLock;

use crate::core::{Bounds, GameResult, GameRng};

/// Value returned when input ends while re-prompting after a bad line.
///
/// End-of-input on the *first* read yields a random value in the bounds
/// instead. The two cases are kept distinct on purpose: callers that hit
/// end-of-input mid-retry get a fixed, recognisable value.
pub const RETRY_EOF_FALLBACK: i64 = 0;

/// Optional leading whitespace, optional `+`, one or more ASCII digits.
static NON_NEGATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\+?[0-9]+$").expect("static pattern compiles"));

/// Why a line was not accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Does not match the digit pattern.
    Malformed,
    /// Matches the pattern but does not fit in an `i64`.
    TooLarge,
    /// Parsed, but outside the bounds (strict mode only).
    OutOfRange(i64),
}

/// Validate `line` and parse it. Pure.
///
/// ```
/// use guess_duel::input::parse_non_negative;
///
/// assert_eq!(parse_non_negative("  +15"), Some(15));
/// assert_eq!(parse_non_negative("-5"), None);
/// assert_eq!(parse_non_negative("abc"), None);
/// ```
#[must_use]
pub fn parse_non_negative(line: &str) -> Option<i64> {
    validate(line).ok()
}

fn validate(line: &str) -> Result<i64, Rejection> {
    if !NON_NEGATIVE.is_match(line) {
        return Err(Rejection::Malformed);
    }
    let digits = line.trim_start();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    digits.parse::<i64>().map_err(|_| Rejection::TooLarge)
}

/// Internal read state.
#[derive(Debug)]
enum ReadState {
    AwaitingInput { retry: bool },
    Validating { line: String },
    Done(i64),
}

/// Reads validated integers from a line source.
///
/// Generic over `BufRead` so sessions can run against stdin or an
/// in-memory script.
pub struct InputReader<R> {
    source: R,
    rng: GameRng,
    strict: bool,
}

impl<R: BufRead> InputReader<R> {
    /// Create a reader. `rng` supplies first-read end-of-input fallbacks.
    pub fn new(source: R, rng: GameRng) -> Self {
        Self {
            source,
            rng,
            strict: false,
        }
    }

    /// Also reject values outside the bounds passed to each read.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Prompt until a non-negative integer is entered.
    ///
    /// `bounds` feeds the end-of-input fallback and, in strict mode, the
    /// range check.
    pub fn read_non_negative_integer(
        &mut self,
        prompt: &str,
        bounds: Bounds,
        out: &mut dyn Write,
    ) -> GameResult<i64> {
        let mut state = ReadState::AwaitingInput { retry: false };

        loop {
            state = match state {
                ReadState::AwaitingInput { retry } => {
                    write!(out, "{}", prompt)?;
                    out.flush()?;
                    match self.next_line()? {
                        Some(line) => ReadState::Validating { line },
                        None => ReadState::Done(self.eof_fallback(retry, bounds)),
                    }
                }
                ReadState::Validating { line } => match self.accept(&line, bounds) {
                    Ok(value) => ReadState::Done(value),
                    Err(rejection) => {
                        report(out, &line, rejection, bounds)?;
                        ReadState::AwaitingInput { retry: true }
                    }
                },
                ReadState::Done(value) => return Ok(value),
            };
        }
    }

    fn accept(&self, line: &str, bounds: Bounds) -> Result<i64, Rejection> {
        let value = validate(line)?;
        if self.strict && !bounds.contains(value) {
            return Err(Rejection::OutOfRange(value));
        }
        Ok(value)
    }

    fn eof_fallback(&mut self, retry: bool, bounds: Bounds) -> i64 {
        let value = if retry {
            RETRY_EOF_FALLBACK
        } else {
            self.rng.pick(bounds)
        };
        log::warn!("end of input, falling back to {}", value);
        value
    }

    /// Next line without its terminator, or `None` at end-of-input.
    fn next_line(&mut self) -> GameResult<Option<String>> {
        let mut line = String::new();
        if self.source.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

fn report(out: &mut dyn Write, line: &str, rejection: Rejection, bounds: Bounds) -> GameResult<()> {
    writeln!(out, "The input data is incorrect.")?;
    match rejection {
        Rejection::Malformed => {
            writeln!(out, "\"{}\" is not a positive integer. Please try again.", line)?
        }
        Rejection::TooLarge => writeln!(out, "\"{}\" is too large. Please try again.", line)?,
        Rejection::OutOfRange(value) => writeln!(
            out,
            "{} is outside the range {} to {}. Please try again.",
            value, bounds.low, bounds.high
        )?,
    }
    Ok(())
}
