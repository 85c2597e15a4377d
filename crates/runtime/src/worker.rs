//! The session worker: the one mutator of combat state.

use std::sync::Arc;

use arena_core::{StepOutcome, StepStatus};
use arena_content::ContentBundle;
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::event::GameEvent;
use crate::session::{CombatSession, SessionConfig, UnitView};

/// Commands the handle sends to the worker.
pub enum Command {
    /// Start a new battle, discarding any previous session.
    Start {
        config: SessionConfig,
        reply: oneshot::Sender<Result<()>>,
    },
    /// Advance the active battle by one action.
    Step {
        reply: oneshot::Sender<Result<StepOutcome>>,
    },
    /// Snapshot every unit of the active battle.
    Units {
        reply: oneshot::Sender<Result<Vec<UnitView>>>,
    },
}

/// Worker task owning the active [`CombatSession`].
///
/// Exactly one worker mutates combat state, so the core needs no locks;
/// commands are applied strictly in arrival order.
pub struct SessionWorker {
    content: Arc<ContentBundle>,
    session: Option<CombatSession>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<GameEvent>,
}

impl SessionWorker {
    pub fn new(
        content: Arc<ContentBundle>,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<GameEvent>,
    ) -> Self {
        Self {
            content,
            session: None,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop; ends when every handle is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!("command channel closed, session worker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Start { config, reply } => {
                let _ = reply.send(self.start(config));
            }
            Command::Step { reply } => {
                let _ = reply.send(self.step());
            }
            Command::Units { reply } => {
                let result = self
                    .session
                    .as_ref()
                    .map(CombatSession::unit_views)
                    .ok_or(RuntimeError::NoActiveSession);
                let _ = reply.send(result);
            }
        }
    }

    fn start(&mut self, config: SessionConfig) -> Result<()> {
        let round = config.round;
        // The previous session, if any, is dropped wholesale.
        let session = CombatSession::new(Arc::clone(&self.content), config)?;
        let units = session.unit_views().len();
        info!(round, units, "combat started");
        let _ = self.event_tx.send(GameEvent::CombatStarted { round, units });
        self.session = Some(session);
        Ok(())
    }

    fn step(&mut self) -> Result<StepOutcome> {
        let session = self.session.as_mut().ok_or(RuntimeError::NoActiveSession)?;
        let outcome = session.step();

        if let Some(action) = &outcome.action {
            debug!(actor = %action.actor, "action resolved");
            let _ = self.event_tx.send(GameEvent::ActionResolved {
                action: action.clone(),
            });
        }
        if let StepStatus::Resolved { winner } = outcome.status {
            info!(%winner, "combat resolved");
            let _ = self.event_tx.send(GameEvent::CombatResolved { winner });
        }

        Ok(outcome)
    }
}
