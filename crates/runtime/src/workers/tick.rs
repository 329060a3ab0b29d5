//! Tick worker that owns the write side of the shared [`MatchState`].
//!
//! Advances the match once per tick interval (or on demand), publishes
//! narrative, cue and round events, and answers control commands from
//! [`RuntimeHandle`](crate::RuntimeHandle).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, mpsc, oneshot, watch};
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, error, info};

use arena_core::{
    EventLog, EventSink, MatchEngine, MatchState, RngOracle, Roster, RosterError, StepOutcome,
};

use crate::api::{Result, RuntimeError};
use crate::events::{BusSink, CueEvent, Event, EventBus, RoundEvent};

/// Match state plus its recent narrative, updated together under one lock so
/// readers never observe a tick half-applied.
#[derive(Debug)]
pub struct MatchCell {
    pub state: MatchState,
    pub history: EventLog,
}

/// Single-writer / multi-reader handle on the match.
pub type SharedMatch = Arc<RwLock<MatchCell>>;

/// Commands that can be sent to the tick worker
pub enum Command {
    /// Advance the match by one tick immediately, outside the cadence.
    Step {
        reply: oneshot::Sender<std::result::Result<StepOutcome, RosterError>>,
    },
}

/// Background task that advances the match.
pub struct TickWorker {
    shared: SharedMatch,
    roster: Arc<Roster>,
    rng: Box<dyn RngOracle + Send>,
    bus: EventBus,
    command_rx: mpsc::Receiver<Command>,
    shutdown_rx: watch::Receiver<bool>,
    tick_interval: Option<Duration>,
    max_ticks: Option<u64>,
    ticks: u64,
}

impl TickWorker {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        shared: SharedMatch,
        roster: Arc<Roster>,
        rng: Box<dyn RngOracle + Send>,
        bus: EventBus,
        command_rx: mpsc::Receiver<Command>,
        shutdown_rx: watch::Receiver<bool>,
        tick_interval: Option<Duration>,
        max_ticks: Option<u64>,
    ) -> Self {
        info!(
            target: "runtime::worker",
            roster_size = roster.len(),
            interval_ms = tick_interval.map(|d| d.as_millis() as u64),
            max_ticks,
            "TickWorker initialized"
        );

        Self {
            shared,
            roster,
            rng,
            bus,
            command_rx,
            shutdown_rx,
            tick_interval,
            max_ticks,
            ticks: 0,
        }
    }

    /// Main worker loop.
    ///
    /// Returns an error only on an integrity violation, after which the match
    /// is left as it was before the failing tick.
    pub async fn run(mut self) -> Result<()> {
        let mut interval = self.tick_interval.map(|period| {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            interval
        });

        loop {
            let autoplay = !self.budget_exhausted();

            tokio::select! {
                changed = self.shutdown_rx.changed() => {
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        debug!(target: "runtime::worker", ticks = self.ticks, "Shutdown requested");
                        break;
                    }
                }
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await?;
                }
                _ = next_tick(&mut interval), if autoplay => {
                    self.advance().await?;
                    self.ticks += 1;
                    if self.budget_exhausted() {
                        info!(target: "runtime::worker", ticks = self.ticks, "Tick budget exhausted");
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn budget_exhausted(&self) -> bool {
        self.max_ticks.is_some_and(|max| self.ticks >= max)
    }

    async fn handle_command(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Step { reply } => {
                let result = self.advance().await;
                let fatal = result.as_ref().err().cloned();
                if reply.send(result).is_err() {
                    debug!(target: "runtime::worker", "Step reply channel closed (caller dropped)");
                }
                match fatal {
                    Some(error) => Err(RuntimeError::Roster(error)),
                    None => Ok(()),
                }
            }
        }
    }

    /// Runs one step under the write lock, then publishes what it produced.
    async fn advance(&mut self) -> std::result::Result<StepOutcome, RosterError> {
        let mut guard = self.shared.write().await;
        let MatchCell { state, history } = &mut *guard;

        let frame = state.frame_count + 1;
        let round = state.round;
        // Work on a copy so a failed reset leaves the shared match untouched.
        let mut next = state.clone();
        let mut staged = EventLog::new();

        let outcome = MatchEngine::new(&mut next, &self.roster, &mut self.rng, &mut staged).step();

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(error) => {
                error!(
                    target: "runtime::worker",
                    frame,
                    error = %error,
                    "Roster integrity violated, stopping match"
                );
                return Err(error);
            }
        };

        *state = next;
        let mut sink = BusSink::new(&self.bus, history, frame, round);
        for line in staged.drain() {
            sink.write(line);
        }

        let (next_left, next_right) = (state.left.name.clone(), state.right.name.clone());
        drop(guard);

        self.publish_outcome(&outcome, frame, next_left, next_right);
        Ok(outcome)
    }

    fn publish_outcome(
        &self,
        outcome: &StepOutcome,
        frame: u64,
        next_left: String,
        next_right: String,
    ) {
        for &cue in outcome.cues() {
            self.bus.publish(Event::Cue(CueEvent { frame, cue }));
        }

        match outcome {
            StepOutcome::Idle => {
                debug!(target: "runtime::worker", frame, "Idle tick");
            }
            StepOutcome::Acted(resolution) => {
                debug!(
                    target: "runtime::worker",
                    frame,
                    direction = %resolution.action.direction,
                    outcome = ?resolution.outcome,
                    damage = ?resolution.damage,
                    "Action resolved"
                );
            }
            StepOutcome::RoundOver(summary) => {
                info!(
                    target: "runtime::worker",
                    frame,
                    round = summary.round,
                    winner = %summary.winner,
                    left = %summary.final_left.name,
                    right = %summary.final_right.name,
                    "Round decided"
                );
                self.bus.publish(Event::Round(Box::new(RoundEvent {
                    summary: summary.clone(),
                    next_left,
                    next_right,
                })));
            }
        }
    }
}

async fn next_tick(interval: &mut Option<Interval>) {
    match interval {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}
