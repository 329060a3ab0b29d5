//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, content loading and the match
//! itself so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use arena_core::RosterError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A roster draw failed mid-match. The match is no longer trustworthy and
    /// the tick worker has stopped.
    #[error("match integrity violated: {0}")]
    Roster(#[from] RosterError),

    #[error("failed to load match content")]
    Content(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("tick worker command channel closed")]
    CommandChannelClosed,

    #[error("tick worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("tick worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
