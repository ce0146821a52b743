//! Two-round session between the computer and a human.

use std::io::{BufRead, Write};

use crate::core::{GameConfig, GameResult, GameRng};
use crate::input::InputReader;
use crate::players::{Automated, Interactive, Participant, ParticipantKind};
use crate::rules::{describe, Round, RoundResult};

use super::report::{RoundReport, SessionReport};

/// Prompt used when the human's number was not given up front.
pub const TARGET_PROMPT: &str = "Enter a number you think of:";

/// Owns both participants and the transcript writer.
///
/// Round one: the computer holds a number, the human guesses.
/// Round two: roles swap. The same participants serve both rounds.
pub struct Session<W> {
    config: GameConfig,
    computer: Participant,
    human: Participant,
    out: W,
}

impl<W: Write> Session<W> {
    /// Build a session from the console.
    ///
    /// The computer's target is drawn uniformly from the configured range.
    /// The human's target is `seed_value` when it parses as an integer,
    /// otherwise it is read from `input` after a prompt.
    pub fn setup<R>(
        config: GameConfig,
        seed_value: Option<&str>,
        input: R,
        mut out: W,
    ) -> GameResult<Self>
    where
        R: BufRead + 'static,
    {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::debug!("session seed {}", rng.seed());

        let mut reader = InputReader::new(input, rng.fork()).with_strict(config.strict_input);
        let human_target = match seed_value.and_then(|s| s.trim().parse::<i64>().ok()) {
            Some(target) => target,
            None => {
                if let Some(raw) = seed_value {
                    log::info!("ignoring non-numeric target argument {:?}", raw);
                }
                reader.read_non_negative_integer(TARGET_PROMPT, config.range, &mut out)?
            }
        };

        let computer_target = rng.for_context("target").pick(config.range);
        let computer = Participant::new(
            computer_target,
            Box::new(Automated::new(rng.fork(), config.computer, config.think_delay)),
        );
        let human = Participant::new(human_target, Box::new(Interactive::new(reader)));

        Ok(Self::with_participants(config, computer, human, out))
    }

    /// Build a session from ready-made participants.
    pub fn with_participants(
        config: GameConfig,
        computer: Participant,
        human: Participant,
        out: W,
    ) -> Self {
        log::debug!(
            "computer holds {}, human holds {}",
            computer.target(),
            human.target()
        );
        Self {
            config,
            computer,
            human,
            out,
        }
    }

    #[must_use]
    pub fn computer(&self) -> &Participant {
        &self.computer
    }

    #[must_use]
    pub fn human(&self) -> &Participant {
        &self.human
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play both rounds.
    pub fn run(&mut self) -> GameResult<SessionReport> {
        let first = play_round(&self.config, &self.computer, &mut self.human, &mut self.out)?;
        let second = play_round(&self.config, &self.human, &mut self.computer, &mut self.out)?;
        Ok(SessionReport::new([first, second]))
    }

    /// Consume the session, returning the transcript writer.
    pub fn into_output(self) -> W {
        self.out
    }
}

/// One round: `holder` keeps its number, `guesser` narrows it down.
fn play_round(
    config: &GameConfig,
    holder: &Participant,
    guesser: &mut Participant,
    out: &mut dyn Write,
) -> GameResult<RoundReport> {
    let range = config.range;
    writeln!(
        out,
        "{} thinking of a number between {} and {} inclusively.",
        holder.kind().thinking_subject(),
        range.low,
        range.high
    )?;
    log::debug!("{} is guessing {}'s number {}", guesser.kind(), holder.kind(), holder.target());

    let mut round = Round::new(holder.target(), range);
    while !round.is_over() {
        let guess = guesser.guess(round.bounds(), out)?;
        let outcome = round.submit(guess);
        writeln!(out, "{}", describe(outcome, guess))?;
    }
    let result = round.finish();

    if !result.is_solved() {
        report_exhausted(out, holder.kind(), config)?;
    }
    log_result(guesser.kind(), &result);

    Ok(RoundReport {
        holder: holder.kind(),
        guesser: guesser.kind(),
        result,
    })
}

fn report_exhausted(out: &mut dyn Write, holder: ParticipantKind, config: &GameConfig) -> GameResult<()> {
    writeln!(
        out,
        "{} thinking of a number that is out of the range from {} to {}",
        holder.thinking_subject(),
        config.range.low,
        config.range.high
    )?;
    writeln!(out, "Please start a new game.")?;
    Ok(())
}

fn log_result(guesser: ParticipantKind, result: &RoundResult) {
    if result.is_solved() {
        log::info!("{} found {} in {} guesses", guesser, result.target, result.guess_count());
    } else {
        log::info!(
            "{} exhausted the range after {} guesses, target was {}",
            guesser,
            result.guess_count(),
            result.target
        );
    }
}
