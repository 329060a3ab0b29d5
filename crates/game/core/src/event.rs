//! Narrative output and presentation cues.
//!
//! The simulation reports what happened in two channels:
//!
//! - **Narrative**: one human-readable line per resolved action, written to an
//!   injected [`EventSink`] in chronological order.
//! - **Cues**: discrete [`Cue`] values returned from each step, so presentation
//!   layers (sound, animation) never read pose flags back out of the fighters.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::state::Side;

/// Receives narrative lines in emission order.
pub trait EventSink {
    fn write(&mut self, text: String);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn write(&mut self, text: String) {
        (**self).write(text);
    }
}

impl<S: EventSink + ?Sized> EventSink for Box<S> {
    fn write(&mut self, text: String) {
        (**self).write(text);
    }
}

impl EventSink for Vec<String> {
    fn write(&mut self, text: String) {
        self.push(text);
    }
}

/// Discards everything. Useful for headless fast-forwarding.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn write(&mut self, _text: String) {}
}

/// In-memory narrative log for a single match.
///
/// Unbounded by default; [`EventLog::with_capacity_limit`] keeps only the most
/// recent entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLog {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log that already holds one line.
    pub fn from_entry(text: impl Into<String>) -> Self {
        let mut log = Self::new();
        log.write(text.into());
        log
    }

    /// A log that evicts its oldest entry once `limit` entries are held.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes and returns every entry, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        self.entries.drain(..).collect()
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }
}

impl EventSink for EventLog {
    fn write(&mut self, text: String) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.entries.len() >= limit {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(text);
    }
}

/// Presentation cue emitted alongside state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cue {
    /// A fighter swung (landed or not).
    Attack(Side),
    /// A fighter landed a critical hit.
    Crit(Side),
    /// A fighter avoided an incoming attack.
    Dodge(Side),
    /// A fighter took a landed hit.
    Block(Side),
    /// A fighter fell at the end of a round.
    Dying(Side),
    /// A fighter won the round.
    Victory(Side),
    /// The round ended with no winner.
    Draw,
}

/// Cues produced by a single step. Never more than three in practice.
pub type Cues = ArrayVec<Cue, 4>;

pub(crate) fn missed(attacker: &str) -> String {
    format!("{attacker} just missed...")
}

pub(crate) fn hit(attacker: &str, defender: &str, damage: i32) -> String {
    format!("{attacker} just hit {defender} for {damage}")
}

pub(crate) fn crit(attacker: &str, defender: &str, damage: i32) -> String {
    format!("{attacker} just crit {defender} for {damage}")
}
