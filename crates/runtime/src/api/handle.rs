//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! stepping the match, reading snapshots, or streaming events from specific
//! topics.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use arena_core::{MatchSnapshot, StepOutcome};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, SharedMatch};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    shared: SharedMatch,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        shared: SharedMatch,
        event_bus: EventBus,
    ) -> Self {
        Self {
            command_tx,
            shared,
            event_bus,
        }
    }

    /// Owned copy of the match as of the last completed tick.
    ///
    /// Readers share the lock, so any number of callers may snapshot
    /// concurrently; they only wait while a tick is being applied.
    pub async fn snapshot(&self) -> MatchSnapshot {
        self.shared.read().await.state.snapshot()
    }

    /// Recent narrative lines, oldest first.
    pub async fn history(&self) -> Vec<String> {
        self.shared.read().await.history.to_vec()
    }

    /// Advance the match by one tick, independent of the autoplay cadence.
    ///
    /// An integrity violation is returned as [`RuntimeError::Roster`] and
    /// stops the worker; later calls fail with
    /// [`RuntimeError::CommandChannelClosed`].
    pub async fn step(&self) -> Result<StepOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Step { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx
            .await
            .map_err(RuntimeError::ReplyChannelClosed)?
            .map_err(RuntimeError::from)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Narrative` - one line per resolved action
    /// - `Topic::Cue` - presentation cues (attack, dodge, victory, ...)
    /// - `Topic::Round` - round results and the next pairing
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use arena_runtime::{Event, Topic};
    ///
    /// let mut rx = handle.subscribe(Topic::Narrative);
    /// while let Ok(Event::Narrative(line)) = rx.recv().await {
    ///     println!("{}", line.text);
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
