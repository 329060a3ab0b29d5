//! Whole-match scenarios driven only through the public API.

use arena_core::{
    Direction, EventLog, Fighter, FighterTemplate, HitOutcome, MatchEngine, MatchState, PcgRng,
    RngOracle, Roster, StepOutcome, Winner,
};
use arena_core::DEFAULT_TIMER;

/// Oracle that returns the same raw value forever.
struct Constant(u32);

impl RngOracle for Constant {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

fn a() -> FighterTemplate {
    FighterTemplate::new("A", 30, 4, 8, 0.5, 0.1)
}

fn b() -> FighterTemplate {
    FighterTemplate::new("B", 10, 3, 3, 0.6, 0.2)
}

fn fresh(left: &FighterTemplate, right: &FighterTemplate, timer: i32) -> MatchState {
    MatchState::with_fighters(
        Fighter::with_timer(left, timer),
        Fighter::with_timer(right, timer),
    )
    .unwrap()
}

#[test]
fn faster_fighter_opens_with_a_plain_hit() {
    let roster = Roster::new(vec![a(), b()]).unwrap();
    let mut state = fresh(&a(), &b(), 0);
    // Zero passes every accuracy check, but also every crit check; keep A from
    // critting so the base damage shows.
    state.left.crit_rate = 0.0;
    let mut rng = Constant(0);
    let mut log = EventLog::new();

    let outcome = MatchEngine::new(&mut state, &roster, &mut rng, &mut log)
        .step()
        .unwrap();

    let StepOutcome::Acted(resolution) = outcome else {
        panic!("expected A to act, got {outcome:?}");
    };
    assert_eq!(resolution.action.direction, Direction::LeftToRight);
    assert_eq!(resolution.outcome, HitOutcome::Hit);
    assert_eq!(state.right.health, 6);
    assert_eq!(log.last(), Some("A just hit B for 4"));
}

#[test]
fn equal_double_knockout_draws_and_recreates() {
    let roster = Roster::reference();
    let left = roster.get("Svelte").unwrap().clone();
    let right = roster.get("Solid").unwrap().clone();
    let mut state = fresh(&left, &right, 10);
    state.left.health = -4;
    state.right.health = -4;
    state.frame_count = 90;
    let mut rng = PcgRng::seed_from_u64(5);
    let mut log = EventLog::new();

    let outcome = MatchEngine::new(&mut state, &roster, &mut rng, &mut log)
        .step()
        .unwrap();

    assert!(matches!(
        outcome,
        StepOutcome::RoundOver(ref summary) if summary.winner == Winner::Neither
    ));
    assert_eq!(state.frame_count, 0);
    assert_eq!(state.round, 1);
    assert_eq!(state.streak, None);
    assert_ne!(state.left.name, state.right.name);
    assert!(log.is_empty());
}

#[test]
fn zero_accuracy_never_lands_whatever_the_source() {
    let roster = Roster::new(vec![a(), b()]).unwrap();
    let sources: Vec<Box<dyn RngOracle>> = vec![
        Box::new(Constant(0)),
        Box::new(Constant(u32::MAX)),
        Box::new(PcgRng::seed_from_u64(1)),
        Box::new(PcgRng::seed_from_u64(99)),
    ];

    for mut rng in sources {
        let mut blind = a();
        blind.accuracy = 0.0;
        // B can never act: its timer stays far above zero for the whole run.
        let mut state = fresh(&blind, &b(), 0);
        state.right.timer = 1_000_000;
        let mut log = EventLog::new();

        for _ in 0..200 {
            let outcome = MatchEngine::new(&mut state, &roster, &mut rng, &mut log)
                .step()
                .unwrap();
            if let StepOutcome::Acted(resolution) = outcome {
                assert_eq!(resolution.outcome, HitOutcome::Miss);
            }
        }

        assert_eq!(state.right.health, state.right.max_health);
        assert!(log.entries().all(|line| line == "A just missed..."));
        assert!(!log.is_empty());
    }
}

#[test]
fn winner_keeps_identity_across_many_rounds() {
    let roster = Roster::reference();
    let mut rng = PcgRng::seed_from_u64(31);
    let mut state = MatchState::create(&roster, &mut rng).unwrap();
    let mut log = EventLog::new();
    let mut rounds = 0;

    while rounds < 25 {
        let before = state.clone();
        let outcome = MatchEngine::new(&mut state, &roster, &mut rng, &mut log)
            .step()
            .unwrap();

        let StepOutcome::RoundOver(summary) = outcome else {
            continue;
        };
        rounds += 1;

        if let Some(side) = summary.winner.side() {
            let kept = state.fighter(side);
            assert_eq!(kept.template(), before.fighter(side).template());
            assert_eq!(kept.health, kept.max_health);
            assert_ne!(state.fighter(side.opponent()).name, kept.name);
            assert_eq!(state.round, before.round + 1);
        } else {
            assert_eq!(state.round, 1);
        }
        assert_eq!(state.last_result, Some(summary.winner));
    }
}

#[test]
fn extreme_speeds_keep_stepping() {
    let blur = FighterTemplate::new("Blur", 40, 2, 1_500_000_000, 0.5, 0.1);
    let flash = FighterTemplate::new("Flash", 40, 2, 1_400_000_000, 0.5, 0.1);
    let roster = Roster::new(vec![blur, flash]).unwrap();
    let mut rng = PcgRng::seed_from_u64(11);
    let mut state = MatchState::create(&roster, &mut rng).unwrap();
    let mut log = EventLog::new();
    let mut engine = MatchEngine::new(&mut state, &roster, &mut rng, &mut log);

    for _ in 0..200 {
        engine.step().unwrap();
    }

    assert!(state.left.timer <= DEFAULT_TIMER && state.right.timer <= DEFAULT_TIMER);
    assert!(!log.is_empty());
}
