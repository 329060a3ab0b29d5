//! Authoritative match state.
//!
//! [`MatchState`] owns both fighters exclusively; everything a presentation
//! layer needs is exposed through [`MatchSnapshot`], an owned copy taken
//! between ticks.
mod fighter;
mod match_state;
mod side;

pub use fighter::{Fighter, FighterState, FighterTemplate};
pub use match_state::{Action, MatchSnapshot, MatchState, Streak};
pub use side::{Direction, Side, Winner};
