//! Per-tick transition and round-reset policy.
//!
//! The [`MatchEngine`] is the only code path that advances a [`MatchState`].
//! It borrows the state together with the capabilities a tick needs (the
//! roster, the random source and the narrative sink), so each match can run
//! with its own isolated log and a seeded generator.

mod initiative;
mod terminal;

pub use initiative::InitiativeScheduler;
pub use terminal::judge;

use crate::combat::{Resolution, resolve};
use crate::env::{RngOracle, Roster};
use crate::error::RosterError;
use crate::event::{Cue, Cues, EventSink};
use crate::state::{Fighter, FighterState, MatchState, Side, Streak, Winner};

/// What a single [`MatchEngine::step`] did.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// Neither fighter was ready; timers advanced.
    Idle,
    /// One fighter acted.
    Acted(Resolution),
    /// The terminal check ended the round and the next one was prepared.
    RoundOver(RoundSummary),
}

impl StepOutcome {
    pub fn cues(&self) -> &[Cue] {
        match self {
            Self::Idle => &[],
            Self::Acted(resolution) => &resolution.cues,
            Self::RoundOver(summary) => &summary.cues,
        }
    }
}

/// How a round ended, captured before the reset replaced anyone.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    pub winner: Winner,
    pub round: u32,
    /// Tick on which the round was decided.
    pub frame_count: u64,
    /// Both fighters as they stood at the terminal check. Defeated fighters
    /// carry [`FighterState::Dying`].
    pub final_left: Fighter,
    pub final_right: Fighter,
    pub cues: Cues,
}

/// Drives one match.
pub struct MatchEngine<'a, R: ?Sized, S: ?Sized> {
    state: &'a mut MatchState,
    roster: &'a Roster,
    rng: &'a mut R,
    sink: &'a mut S,
}

impl<'a, R, S> MatchEngine<'a, R, S>
where
    R: RngOracle + ?Sized,
    S: EventSink + ?Sized,
{
    pub fn new(
        state: &'a mut MatchState,
        roster: &'a Roster,
        rng: &'a mut R,
        sink: &'a mut S,
    ) -> Self {
        Self {
            state,
            roster,
            rng,
            sink,
        }
    }

    pub fn state(&self) -> &MatchState {
        self.state
    }

    /// Advances the match by one tick.
    ///
    /// 1. Poses reset to [`FighterState::Ready`].
    /// 2. Terminal check; a decided round is reset and the step ends here.
    /// 3. Initiative picks the acting side, if any.
    /// 4. The acting side's action is resolved.
    /// 5. Both timers count down by their own speed.
    ///
    /// Fails only when a roster draw during reset hits a name missing from
    /// the roster, which means the match can no longer be trusted. On error
    /// the state is left exactly as it was before the call.
    pub fn step(&mut self) -> Result<StepOutcome, RosterError> {
        let verdict = judge(&self.state.left, &self.state.right);
        let checkpoint = verdict.is_some().then(|| self.state.clone());

        self.state.frame_count += 1;
        self.state.left.state = FighterState::Ready;
        self.state.right.state = FighterState::Ready;

        if let Some(winner) = verdict {
            return match self.finish_round(winner) {
                Ok(summary) => Ok(StepOutcome::RoundOver(summary)),
                Err(error) => {
                    if let Some(checkpoint) = checkpoint {
                        *self.state = checkpoint;
                    }
                    Err(error)
                }
            };
        }

        let direction =
            InitiativeScheduler::select(&self.state.left, &self.state.right, &mut *self.rng);

        let resolution: Option<Resolution> = match direction {
            Some(direction) => {
                let reset_timer = self.state.config.default_timer;
                let (attacker, defender) = self.state.combatants_mut(direction);
                Some(resolve(
                    attacker,
                    defender,
                    direction,
                    reset_timer,
                    &mut *self.rng,
                    &mut *self.sink,
                ))
            }
            None => None,
        };

        if let Some(resolution) = &resolution {
            self.state.last_action = Some(resolution.action);
        }

        self.state.left.tick_timer();
        self.state.right.tick_timer();

        Ok(match resolution {
            Some(resolution) => StepOutcome::Acted(resolution),
            None => StepOutcome::Idle,
        })
    }

    /// Prepares the next round according to the current winner marker.
    ///
    /// - Left or right won: the winner is restored in place, the other slot is
    ///   redrawn excluding the winner's name.
    /// - No winner: the whole match is recreated.
    ///
    /// The winner marker is cleared afterwards.
    pub fn reset_keep_winner(&mut self) -> Result<(), RosterError> {
        let timer = self.state.config.default_timer;

        match self.state.winner.side() {
            Some(side) => {
                let kept = self.state.fighter(side).name.clone();
                let replacement = self.roster.pick_random_excluding(&kept, &mut *self.rng)?;
                let replacement = Fighter::with_timer(replacement, timer);

                self.state.fighter_mut(side).restore(timer);
                *self.state.fighter_mut(side.opponent()) = replacement;

                self.state.round += 1;
                self.state.streak = Some(match self.state.streak {
                    Some(streak) if streak.side == side => Streak {
                        side,
                        wins: streak.wins + 1,
                    },
                    _ => Streak { side, wins: 1 },
                });
            }
            None => {
                let config = self.state.config;
                *self.state = MatchState::create_with_config(self.roster, &mut *self.rng, config)?;
            }
        }

        self.state.winner = Winner::Neither;
        Ok(())
    }

    fn finish_round(&mut self, winner: Winner) -> Result<RoundSummary, RosterError> {
        let mut cues = Cues::new();
        for side in [Side::Left, Side::Right] {
            let fighter = self.state.fighter_mut(side);
            if fighter.is_defeated() {
                fighter.state = FighterState::Dying;
                cues.push(Cue::Dying(side));
            }
        }
        cues.push(match winner.side() {
            Some(side) => Cue::Victory(side),
            None => Cue::Draw,
        });

        let summary = RoundSummary {
            winner,
            round: self.state.round,
            frame_count: self.state.frame_count,
            final_left: self.state.left.clone(),
            final_right: self.state.right.clone(),
            cues,
        };

        self.state.winner = winner;
        self.reset_keep_winner()?;
        self.state.last_result = Some(winner);

        Ok(summary)
    }
}
