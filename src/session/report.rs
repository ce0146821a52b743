//! Session and round summaries.

use crate::players::ParticipantKind;
use crate::rules::RoundResult;

/// One finished round and who played which role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    /// Participant whose number was being guessed.
    pub holder: ParticipantKind,
    /// Participant doing the guessing.
    pub guesser: ParticipantKind,
    pub result: RoundResult,
}

/// Both rounds of a session, in play order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    rounds: [RoundReport; 2],
}

impl SessionReport {
    pub fn new(rounds: [RoundReport; 2]) -> Self {
        Self { rounds }
    }

    #[must_use]
    pub fn rounds(&self) -> &[RoundReport; 2] {
        &self.rounds
    }

    /// The round where `guesser` did the guessing.
    #[must_use]
    pub fn guessed_by(&self, guesser: ParticipantKind) -> Option<&RoundReport> {
        self.rounds.iter().find(|r| r.guesser == guesser)
    }

    /// Guesser that solved its round in fewer guesses, if any.
    ///
    /// `None` on a tie or when neither round was solved.
    #[must_use]
    pub fn faster_guesser(&self) -> Option<ParticipantKind> {
        let [a, b] = &self.rounds;
        match (a.result.is_solved(), b.result.is_solved()) {
            (true, false) => Some(a.guesser),
            (false, true) => Some(b.guesser),
            (true, true) => match a.result.guess_count().cmp(&b.result.guess_count()) {
                std::cmp::Ordering::Less => Some(a.guesser),
                std::cmp::Ordering::Greater => Some(b.guesser),
                std::cmp::Ordering::Equal => None,
            },
            (false, false) => None,
        }
    }
}
