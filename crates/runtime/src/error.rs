//! Unified error types surfaced by the runtime API.
//!
//! Game-data problems never surface here; the core degrades around them.
//! Runtime errors cover session lifecycle and worker coordination only.

use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Stepping or reading before any battle was started.
    #[error("no active combat session")]
    NoActiveSession,

    #[error("combat setup failed")]
    Setup(#[from] arena_core::SetupError),

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
