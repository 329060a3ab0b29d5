//! Event types for different topics.

use arena_core::{Cue, RoundSummary, Winner};
use serde::{Deserialize, Serialize};

/// One narrative line, in the order the match produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeEvent {
    /// Tick that produced the line.
    pub frame: u64,
    pub round: u32,
    pub text: String,
}

/// Presentation cue emitted on a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueEvent {
    pub frame: u64,
    pub cue: Cue,
}

/// A round was decided and the next one prepared.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEvent {
    pub summary: RoundSummary,
    /// Fighters entering the next round, left then right.
    pub next_left: String,
    pub next_right: String,
}

impl RoundEvent {
    pub fn winner(&self) -> Winner {
        self.summary.winner
    }
}
