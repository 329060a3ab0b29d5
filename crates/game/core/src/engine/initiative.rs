//! Initiative: which fighter, if any, acts this tick.

use core::cmp::Ordering;

use crate::env::RngOracle;
use crate::state::{Direction, Fighter, Side};

/// Decides the acting side from both fighters' timers and speeds.
///
/// A fighter is ready once its timer reaches zero. When both are ready the
/// tie-break cascade is:
///
/// 1. lower timer (more overdue) acts first;
/// 2. on equal timers, higher speed acts first;
/// 3. on equal speed too, a fair coin decides.
///
/// The coin is only flipped in the last case, so the cascade consumes
/// randomness deterministically for a given pair of fighters.
#[derive(Clone, Copy, Debug, Default)]
pub struct InitiativeScheduler;

impl InitiativeScheduler {
    pub fn select<R: RngOracle + ?Sized>(
        left: &Fighter,
        right: &Fighter,
        rng: &mut R,
    ) -> Option<Direction> {
        let side = match (left.is_ready(), right.is_ready()) {
            (false, false) => return None,
            (true, false) => Side::Left,
            (false, true) => Side::Right,
            (true, true) => Self::break_tie(left, right, rng),
        };
        Some(Direction::from_attacker(side))
    }

    fn break_tie<R: RngOracle + ?Sized>(left: &Fighter, right: &Fighter, rng: &mut R) -> Side {
        match left.timer.cmp(&right.timer) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => match left.speed.cmp(&right.speed) {
                Ordering::Greater => Side::Left,
                Ordering::Less => Side::Right,
                Ordering::Equal => {
                    if rng.coin_flip() {
                        Side::Left
                    } else {
                        Side::Right
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FighterTemplate;
    use crate::test_utils::ScriptedRng;

    fn fighter(name: &str, speed: i32, timer: i32) -> Fighter {
        Fighter::with_timer(&FighterTemplate::new(name, 10, 1, speed, 0.5, 0.0), timer)
    }

    #[test]
    fn nobody_acts_when_neither_is_ready() {
        let mut rng = ScriptedRng::default();
        let selected = InitiativeScheduler::select(&fighter("A", 5, 1), &fighter("B", 5, 3), &mut rng);
        assert_eq!(selected, None);
    }

    #[test]
    fn single_ready_fighter_acts() {
        let mut rng = ScriptedRng::default();
        assert_eq!(
            InitiativeScheduler::select(&fighter("A", 1, 0), &fighter("B", 9, 1), &mut rng),
            Some(Direction::LeftToRight)
        );
        assert_eq!(
            InitiativeScheduler::select(&fighter("A", 9, 4), &fighter("B", 1, -2), &mut rng),
            Some(Direction::RightToLeft)
        );
    }

    #[test]
    fn more_overdue_fighter_acts_first() {
        let mut rng = ScriptedRng::default();
        let selected =
            InitiativeScheduler::select(&fighter("A", 9, -1), &fighter("B", 1, -4), &mut rng);
        assert_eq!(selected, Some(Direction::RightToLeft));
    }

    #[test]
    fn faster_fighter_wins_timer_tie() {
        let mut rng = ScriptedRng::default();
        let selected =
            InitiativeScheduler::select(&fighter("A", 8, 0), &fighter("B", 3, 0), &mut rng);
        assert_eq!(selected, Some(Direction::LeftToRight));
    }

    #[test]
    fn coin_decides_full_tie() {
        let mut rng = ScriptedRng::new([0.25, 0.75]);
        let a = fighter("A", 5, -2);
        let b = fighter("B", 5, -2);

        assert_eq!(
            InitiativeScheduler::select(&a, &b, &mut rng),
            Some(Direction::LeftToRight)
        );
        assert_eq!(
            InitiativeScheduler::select(&a, &b, &mut rng),
            Some(Direction::RightToLeft)
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn non_tied_decisions_consume_no_randomness() {
        // An empty script panics if rolled.
        let mut rng = ScriptedRng::default();
        InitiativeScheduler::select(&fighter("A", 5, 0), &fighter("B", 4, 0), &mut rng);
        InitiativeScheduler::select(&fighter("A", 5, 0), &fighter("B", 5, -1), &mut rng);
    }
}
