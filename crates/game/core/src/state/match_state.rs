use crate::config::EngineConfig;
use crate::env::{RngOracle, Roster};
use crate::error::{MatchError, RosterError};

use super::{Direction, Fighter, Side, Winner};

/// Record of the most recent resolved action. Informational only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub direction: Direction,
    pub was_hit: bool,
    pub was_crit: bool,
}

/// Consecutive rounds won by the fighter currently holding `side`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Streak {
    pub side: Side,
    pub wins: u32,
}

/// State of one match: two fighters and the bookkeeping around them.
///
/// A match spans many rounds. The winner of a round stays in its slot with
/// restored health while the loser's slot is redrawn; a draw recreates the
/// whole match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchState {
    pub left: Fighter,
    pub right: Fighter,
    /// Winner marker of the round being decided. Cleared back to
    /// [`Winner::Neither`] once the next round is prepared.
    pub winner: Winner,
    /// Ticks since the match was (re)created.
    pub frame_count: u64,
    pub last_action: Option<Action>,
    /// Round number within this match, starting at 1.
    pub round: u32,
    pub streak: Option<Streak>,
    /// Result of the previous round, if any.
    pub last_result: Option<Winner>,
    pub config: EngineConfig,
}

impl MatchState {
    /// Draws two distinct fighters from `roster` with the default config.
    pub fn create<R: RngOracle + ?Sized>(roster: &Roster, rng: &mut R) -> Result<Self, RosterError> {
        Self::create_with_config(roster, rng, EngineConfig::default())
    }

    /// Draws two distinct fighters; the second draw excludes the first's name.
    pub fn create_with_config<R: RngOracle + ?Sized>(
        roster: &Roster,
        rng: &mut R,
        config: EngineConfig,
    ) -> Result<Self, RosterError> {
        let left = roster.pick_random(rng);
        let right = roster.pick_random_excluding(&left.name, rng)?;

        Ok(Self::assemble(
            Fighter::with_timer(left, config.default_timer),
            Fighter::with_timer(right, config.default_timer),
            config,
        ))
    }

    /// Builds a match from explicit fighters, e.g. for scripted scenarios.
    pub fn with_fighters(left: Fighter, right: Fighter) -> Result<Self, MatchError> {
        if left.name == right.name {
            return Err(MatchError::DuplicateFighter { name: left.name });
        }
        Ok(Self::assemble(left, right, EngineConfig::default()))
    }

    fn assemble(left: Fighter, right: Fighter, config: EngineConfig) -> Self {
        Self {
            left,
            right,
            winner: Winner::Neither,
            frame_count: 0,
            last_action: None,
            round: 1,
            streak: None,
            last_result: None,
            config,
        }
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Splits the match into `(attacker, defender)` for `direction`.
    pub fn combatants_mut(&mut self, direction: Direction) -> (&mut Fighter, &mut Fighter) {
        match direction {
            Direction::LeftToRight => (&mut self.left, &mut self.right),
            Direction::RightToLeft => (&mut self.right, &mut self.left),
        }
    }

    /// Owned read-only copy for presentation layers.
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            left: self.left.clone(),
            right: self.right.clone(),
            winner: self.winner,
            frame_count: self.frame_count,
            last_action: self.last_action,
            round: self.round,
            streak: self.streak,
            last_result: self.last_result,
        }
    }
}

/// Point-in-time view of a match, taken between ticks.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSnapshot {
    pub left: Fighter,
    pub right: Fighter,
    pub winner: Winner,
    pub frame_count: u64,
    pub last_action: Option<Action>,
    pub round: u32,
    pub streak: Option<Streak>,
    pub last_result: Option<Winner>,
}

impl MatchSnapshot {
    pub fn fighter(&self, side: Side) -> &Fighter {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TIMER;
    use crate::env::PcgRng;
    use crate::state::FighterTemplate;

    #[test]
    fn create_draws_two_distinct_fighters() {
        let roster = Roster::reference();

        for seed in 0..100 {
            let mut rng = PcgRng::seed_from_u64(seed);
            let state = MatchState::create(&roster, &mut rng).unwrap();

            assert_ne!(state.left.name, state.right.name);
            assert!(roster.contains(&state.left.name));
            assert!(roster.contains(&state.right.name));
            assert_eq!(state.winner, Winner::Neither);
            assert_eq!(state.frame_count, 0);
            assert_eq!(state.left.timer, DEFAULT_TIMER);
            assert_eq!(state.right.timer, DEFAULT_TIMER);
        }
    }

    #[test]
    fn create_respects_configured_timer() {
        let roster = Roster::reference();
        let mut rng = PcgRng::seed_from_u64(1);
        let state = MatchState::create_with_config(
            &roster,
            &mut rng,
            EngineConfig::with_default_timer(10),
        )
        .unwrap();

        assert_eq!(state.left.timer, 10);
        assert_eq!(state.right.timer, 10);
    }

    #[test]
    fn with_fighters_rejects_mirror_match() {
        let template = FighterTemplate::new("A", 10, 1, 1, 0.5, 0.0);
        let result = MatchState::with_fighters(
            Fighter::from_template(&template),
            Fighter::from_template(&template),
        );

        assert_eq!(
            result,
            Err(MatchError::DuplicateFighter { name: "A".into() })
        );
    }

    #[test]
    fn combatants_follow_direction() {
        let state = MatchState::with_fighters(
            Fighter::from_template(&FighterTemplate::new("A", 10, 1, 1, 0.5, 0.0)),
            Fighter::from_template(&FighterTemplate::new("B", 10, 1, 1, 0.5, 0.0)),
        );
        let mut state = state.unwrap();

        let (attacker, defender) = state.combatants_mut(Direction::RightToLeft);
        assert_eq!(attacker.name, "B");
        assert_eq!(defender.name, "A");
    }
}
