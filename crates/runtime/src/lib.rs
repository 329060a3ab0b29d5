//! Runtime orchestration for the duel simulation.
//!
//! This crate runs a match in the background: a single tick worker owns the
//! write side of the shared match, advances it on a fixed cadence (or on
//! demand), and publishes narrative, cue and round events on a topic-based
//! bus. Consumers embed [`Runtime`] to start and stop the worker, and read
//! snapshots or subscribe to events through [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`rng`] supplies the production random source
//! - `workers` keeps the tick worker internal to the crate
pub mod api;
pub mod events;
pub mod rng;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{CueEvent, Event, EventBus, NarrativeEvent, RoundEvent, Topic};
pub use rng::StdRngOracle;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
