//! Authoritative combat state.
//!
//! One `CombatState` describes one battle from setup to resolution. Runtime
//! layers read it freely but mutate it exclusively through the engine.

pub mod turn;
pub mod types;

pub use turn::TurnState;
pub use types::{
    BaseStats, Cell, CombatUnit, Side, StatusBoard, Taunt, TimedPct, TimedValue, Tribe, UnitClass,
    UnitId, UnitMods,
};

use crate::env::AiDifficulty;

/// Where the battle stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatPhase {
    Combat,
    Resolved { winner: Side },
}

/// Canonical state of one battle session.
///
/// Units are created once at setup and stay in the roster for the whole
/// battle; death flips them inert rather than removing them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    /// Base seed for every roll this battle makes.
    ///
    /// Set once at setup and never modified; combined with the turn nonce to
    /// derive per-step roll seeds.
    pub seed: u64,
    pub difficulty: AiDifficulty,
    pub units: Vec<CombatUnit>,
    pub turn: TurnState,
    pub phase: CombatPhase,
}

impl CombatState {
    pub fn unit(&self, id: UnitId) -> Option<&CombatUnit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut CombatUnit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Living units of one side.
    pub fn living(&self, side: Side) -> impl Iterator<Item = &CombatUnit> {
        self.units
            .iter()
            .filter(move |u| u.alive && u.side == side)
    }

    pub fn living_count(&self, side: Side) -> usize {
        self.living(side).count()
    }

    /// The living unit standing on a cell, if any.
    pub fn unit_at(&self, side: Side, cell: Cell) -> Option<&CombatUnit> {
        self.living(side).find(|u| u.pos == cell)
    }

    /// Sum of remaining hp on one side, for the action-cap tiebreak.
    pub fn total_hp(&self, side: Side) -> u64 {
        self.living(side).map(|u| u.hp as u64).sum()
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, CombatPhase::Resolved { .. })
    }
}
