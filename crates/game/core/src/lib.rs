//! Deterministic duel simulation shared by the runtime and offline tools.
//!
//! `arena-core` defines the canonical rules of a timer-driven duel: roster
//! draws, initiative, hit/crit/damage resolution, terminal detection and the
//! round-reset policy. It performs no I/O. Randomness and narrative output are
//! injected through [`RngOracle`] and [`EventSink`], and every mutation of a
//! [`MatchState`] flows through [`MatchEngine::step`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use combat::{HitOutcome, Resolution};
pub use config::{DEFAULT_TIMER, EngineConfig};
pub use engine::{InitiativeScheduler, MatchEngine, RoundSummary, StepOutcome};
pub use env::{PcgRng, RngOracle, Roster};
pub use error::{MatchError, RosterError};
pub use event::{Cue, Cues, EventLog, EventSink, NullSink};
pub use state::{
    Action, Direction, Fighter, FighterState, FighterTemplate, MatchSnapshot, MatchState, Side,
    Streak, Winner,
};
