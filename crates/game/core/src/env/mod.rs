//! Inputs the simulation reads but never owns: the fighter roster and the
//! random source.
//!
//! Both are injected by the caller so that matches stay reproducible under a
//! fixed seed and the roster can be shared read-only across matches.
mod rng;
mod roster;

pub use rng::{PcgRng, RngOracle};
pub use roster::Roster;
