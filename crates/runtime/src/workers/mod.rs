//! Worker tasks that back the runtime orchestration.
//!
//! The tick worker is the single writer of the shared match; every other
//! component only reads it.

mod tick;

pub use tick::{Command, MatchCell, SharedMatch, TickWorker};
