//! Events emitted by the runtime during a battle.

use arena_core::{Side, TurnAction};

/// Broadcast to every subscriber as battles progress.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A new battle began with this many deployed units.
    CombatStarted { round: u32, units: usize },
    /// One discrete action resolved.
    ActionResolved { action: TurnAction },
    /// The battle reached a terminal state.
    CombatResolved { winner: Side },
}
