//! Client-facing runtime surface.

use std::sync::Arc;

use arena_core::StepOutcome;
use arena_content::ContentBundle;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{Result, RuntimeError};
use crate::event::GameEvent;
use crate::session::{SessionConfig, UnitView};
use crate::worker::{Command, SessionWorker};

const COMMAND_BUFFER: usize = 32;
const EVENT_BUFFER: usize = 128;

/// Cloneable handle to the session worker.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl RuntimeHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T>>) -> Command,
    ) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.command_tx
            .send(make(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Start a new battle, replacing any active session.
    pub async fn start_combat(&self, config: SessionConfig) -> Result<()> {
        self.request(|reply| Command::Start { config, reply }).await
    }

    /// Advance the active battle by one discrete action.
    pub async fn step(&self) -> Result<StepOutcome> {
        self.request(|reply| Command::Step { reply }).await
    }

    /// Snapshot every unit of the active battle.
    pub async fn units(&self) -> Result<Vec<UnitView>> {
        self.request(|reply| Command::Units { reply }).await
    }

    /// Subscribe to game events.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_tx.subscribe()
    }
}

/// Owns the worker task; cloneable [`RuntimeHandle`]s drive it.
pub struct Runtime {
    handle: RuntimeHandle,
    worker: JoinHandle<()>,
}

impl Runtime {
    /// Spawn the session worker over the given content.
    pub fn spawn(content: ContentBundle) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (event_tx, _) = broadcast::channel(EVENT_BUFFER);

        let worker = SessionWorker::new(Arc::new(content), command_rx, event_tx.clone());
        let worker = tokio::spawn(worker.run());

        Self {
            handle: RuntimeHandle {
                command_tx,
                event_tx,
            },
            worker,
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Drop the handle and wait for the worker to drain and stop.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}
