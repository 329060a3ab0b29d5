//! Helpers shared by unit tests.

use std::collections::VecDeque;

use crate::env::RngOracle;

/// Replays a fixed sequence of `[0, 1)` rolls.
///
/// Lets tests force hit, crit, initiative and roster outcomes. Panics when the
/// script runs dry so an unexpected extra roll fails loudly.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    rolls: VecDeque<f32>,
}

impl ScriptedRng {
    pub fn new(rolls: impl IntoIterator<Item = f32>) -> Self {
        Self {
            rolls: rolls.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (f64::from(self.unit()) * f64::from(u32::MAX)) as u32
    }

    fn unit(&mut self) -> f32 {
        self.rolls.pop_front().expect("scripted rng exhausted")
    }

    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f32) as usize).min(len - 1)
    }
}
