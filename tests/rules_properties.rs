//! Property tests for classification, narrowing and termination.

use proptest::prelude::*;

use guess_duel::input::parse_non_negative;
use guess_duel::{classify, Bounds, GameRng, GuessOutcome, Round, RoundOutcome};

const RANGE: Bounds = Bounds::new(0, 100);

proptest! {
    #[test]
    fn classify_is_exhaustive(x in any::<i64>(), t in any::<i64>()) {
        let expected = if x < t {
            GuessOutcome::TooLow
        } else if x > t {
            GuessOutcome::TooHigh
        } else {
            GuessOutcome::Correct
        };
        prop_assert_eq!(classify(x, t), expected);
    }

    #[test]
    fn narrowing_moves_one_side(target in 0i64..=100, guess in 0i64..=100) {
        let mut round = Round::new(target, RANGE);
        let before = round.bounds();

        match round.submit(guess) {
            GuessOutcome::TooHigh => {
                prop_assert_eq!(round.bounds().high, guess - 1);
                prop_assert_eq!(round.bounds().low, before.low);
            }
            GuessOutcome::TooLow => {
                prop_assert_eq!(round.bounds().low, guess + 1);
                prop_assert_eq!(round.bounds().high, before.high);
            }
            GuessOutcome::Correct => {
                prop_assert!(round.is_over());
                prop_assert_eq!(round.bounds(), before);
            }
        }
    }

    #[test]
    fn random_guesser_always_solves_in_range_target(target in 0i64..=100, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let result = Round::new(target, RANGE).play_out(|b| rng.pick(b));

        prop_assert_eq!(result.outcome, RoundOutcome::Solved);
        prop_assert!(result.guess_count() <= 101);
        prop_assert_eq!(result.guesses.last().unwrap().guess, target);
    }

    #[test]
    fn out_of_range_target_exhausts(target in 101i64..1000, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let result = Round::new(target, RANGE).play_out(|b| rng.pick(b));

        prop_assert_eq!(result.outcome, RoundOutcome::Exhausted);
        prop_assert!(result.guesses.iter().all(|g| g.outcome == GuessOutcome::TooLow));
    }

    #[test]
    fn only_correct_guess_is_last(target in 0i64..=100, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let result = Round::new(target, RANGE).play_out(|b| rng.pick(b));
        let (last, rest) = result.guesses.split_last().unwrap();

        prop_assert!(last.outcome.is_correct());
        prop_assert!(rest.iter().all(|g| !g.outcome.is_correct()));
    }

    #[test]
    fn digit_strings_parse(n in 0u32..=u32::MAX, pad in "[ \t]{0,3}", plus in any::<bool>()) {
        let line = format!("{}{}{}", pad, if plus { "+" } else { "" }, n);
        prop_assert_eq!(parse_non_negative(&line), Some(i64::from(n)));
    }

    #[test]
    fn negative_numbers_rejected(n in 1i64..=i64::MAX) {
        let line = format!("-{}", n);
        prop_assert_eq!(parse_non_negative(&line), None);
    }

    #[test]
    fn non_digit_strings_rejected(line in "[a-zA-Z.,_-]{1,8}") {
        prop_assert_eq!(parse_non_negative(&line), None);
    }
}

#[test]
fn midpoint_guesser_needs_at_most_seven_guesses() {
    for target in 0..=100 {
        let result = Round::new(target, RANGE).play_out(|b| b.midpoint());
        assert!(result.is_solved(), "target {} not found", target);
        assert!(
            result.guess_count() <= 7,
            "target {} took {} guesses",
            target,
            result.guess_count()
        );
    }
}

#[test]
fn midpoint_scenario_target_42() {
    let result = Round::new(42, RANGE).play_out(|b| b.midpoint());

    let trace: Vec<_> = result
        .guesses
        .iter()
        .map(|g| (g.guess, g.outcome, g.bounds))
        .collect();

    assert_eq!(
        trace,
        vec![
            (50, GuessOutcome::TooHigh, Bounds::new(0, 100)),
            (24, GuessOutcome::TooLow, Bounds::new(0, 49)),
            (37, GuessOutcome::TooLow, Bounds::new(25, 49)),
            (43, GuessOutcome::TooHigh, Bounds::new(38, 49)),
            (40, GuessOutcome::TooLow, Bounds::new(38, 42)),
            (41, GuessOutcome::TooLow, Bounds::new(41, 42)),
            (42, GuessOutcome::Correct, Bounds::new(42, 42)),
        ]
    );
}

#[test]
fn exhausted_round_stops_guessing() {
    let mut calls = 0;
    let result = Round::new(-1, RANGE).play_out(|b| {
        calls += 1;
        b.low
    });

    assert_eq!(result.outcome, RoundOutcome::Exhausted);
    // 0 is too high; bounds become [0, -1] and the round stops
    assert_eq!(calls, 1);
    assert_eq!(result.guess_count(), 1);
}
