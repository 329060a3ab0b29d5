//! High-level runtime orchestrator.
//!
//! The runtime owns the tick worker, wires up command/event channels and the
//! shared match, and exposes a builder-based API for clients to drive the
//! simulation.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{RwLock, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use arena_content::ContentFactory;
use arena_core::{EngineConfig, EventLog, MatchState, RngOracle, Roster};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::rng::StdRngOracle;
use crate::workers::{Command, MatchCell, TickWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub engine: EngineConfig,
    /// Autoplay cadence. `None` advances only on [`RuntimeHandle::step`].
    pub tick_interval: Option<Duration>,
    /// Stop autoplay after this many ticks.
    pub max_ticks: Option<u64>,
    /// Fixed RNG seed for reproducible matches.
    pub seed: Option<u64>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Narrative lines retained for [`RuntimeHandle::history`].
    pub history_capacity: usize,
    /// Directory holding `roster.ron` and `engine.toml`.
    pub data_dir: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            tick_interval: Some(Duration::from_millis(1000)),
            max_ticks: None,
            seed: None,
            event_buffer_size: 100,
            command_buffer_size: 32,
            history_capacity: 64,
            data_dir: None,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `ARENA_*` environment variables.
    ///
    /// `ARENA_TICK_MS=0` disables autoplay.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("ARENA_TICK_MS") {
            config.tick_interval = (ms > 0).then(|| Duration::from_millis(ms));
        }
        if let Some(max) = read_env::<u64>("ARENA_MAX_TICKS") {
            config.max_ticks = Some(max);
        }
        if let Some(seed) = read_env::<u64>("ARENA_SEED") {
            config.seed = Some(seed);
        }
        if let Some(capacity) = read_env::<usize>("ARENA_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("ARENA_HISTORY") {
            config.history_capacity = capacity;
        }
        if let Some(dir) = read_env::<PathBuf>("ARENA_DATA_DIR") {
            config.data_dir = Some(dir);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Main runtime that drives one match in the background.
///
/// Design: Runtime owns the worker and its shutdown signal.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: JoinHandle<Result<()>>,
    shutdown_tx: watch::Sender<bool>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Whether the worker has stopped, either by budget, shutdown or error.
    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Signal the worker to stop and wait for it.
    ///
    /// Returns the error that stopped the worker early, if any.
    pub async fn shutdown(self) -> Result<()> {
        self.run_until(std::future::ready(())).await
    }

    /// Wait for the worker to stop on its own (tick budget or error).
    pub async fn wait(self) -> Result<()> {
        self.run_until(std::future::pending()).await
    }

    /// Run until the worker stops on its own or `signal` resolves, whichever
    /// comes first. On `signal` the worker is asked to stop and awaited.
    pub async fn run_until(self, signal: impl Future<Output = ()>) -> Result<()> {
        let Self {
            handle,
            mut worker,
            shutdown_tx,
        } = self;
        drop(handle);

        let joined = tokio::select! {
            joined = &mut worker => joined,
            () = signal => {
                // Err only when the worker already exited and dropped its receiver.
                let _ = shutdown_tx.send(true);
                worker.await
            }
        };

        let result = joined.map_err(RuntimeError::WorkerJoin)?;
        debug!(target: "runtime", ok = result.is_ok(), "Tick worker stopped");
        result
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    roster: Option<Arc<Roster>>,
    rng: Option<Box<dyn RngOracle + Send>>,
    state: Option<MatchState>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            roster: None,
            rng: None,
            state: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use this roster instead of loading one.
    pub fn roster(mut self, roster: impl Into<Arc<Roster>>) -> Self {
        self.roster = Some(roster.into());
        self
    }

    /// Inject the random source, e.g. a scripted one for replays.
    pub fn rng(mut self, rng: impl RngOracle + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Start from an explicit match instead of drawing one from the roster.
    pub fn initial_state(mut self, state: MatchState) -> Self {
        self.state = Some(state);
        self
    }

    /// Build the runtime and spawn its tick worker.
    ///
    /// Content resolution order: an explicit [`roster`](Self::roster), then
    /// `config.data_dir`, then [`Roster::reference`].
    pub async fn build(self) -> Result<Runtime> {
        let Self {
            mut config,
            roster,
            rng,
            state,
        } = self;

        let roster = match (roster, &config.data_dir) {
            (Some(roster), _) => roster,
            (None, Some(dir)) => {
                let factory = ContentFactory::new(dir);
                config.engine = factory
                    .load_engine_config()
                    .map_err(|error| RuntimeError::Content(error.into()))?;
                let roster = factory
                    .load_roster()
                    .map_err(|error| RuntimeError::Content(error.into()))?;
                info!(
                    target: "runtime",
                    data_dir = %dir.display(),
                    fighters = roster.len(),
                    "Loaded content"
                );
                Arc::new(roster)
            }
            (None, None) => Arc::new(Roster::reference()),
        };

        let mut rng =
            rng.unwrap_or_else(|| Box::new(StdRngOracle::from_optional_seed(config.seed)));

        let initial_state = match state {
            Some(state) => state,
            None => MatchState::create_with_config(&roster, &mut rng, config.engine)?,
        };

        info!(
            target: "runtime",
            left = %initial_state.left.name,
            right = %initial_state.right.name,
            seed = ?config.seed,
            "Match created"
        );

        let shared = Arc::new(RwLock::new(MatchCell {
            state: initial_state,
            history: EventLog::with_capacity_limit(config.history_capacity),
        }));

        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let bus = EventBus::with_capacity(config.event_buffer_size);

        let handle = RuntimeHandle::new(command_tx, Arc::clone(&shared), bus.clone());

        let worker = TickWorker::new(
            shared,
            roster,
            rng,
            bus,
            command_rx,
            shutdown_rx,
            config.tick_interval,
            config.max_ticks,
        );

        let worker = tokio::spawn(worker.run());

        Ok(Runtime {
            handle,
            worker,
            shutdown_tx,
        })
    }
}
