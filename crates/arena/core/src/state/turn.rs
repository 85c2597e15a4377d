//! Turn bookkeeping for one battle.

use arrayvec::ArrayVec;

use super::types::UnitId;
use crate::config::GameConfig;

/// Ephemeral action order plus the counters that pace a battle.
///
/// The queue is rebuilt whenever it runs dry; dead actors are skipped at pop
/// time rather than being removed eagerly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Interleaved snake order for the current round.
    pub queue: ArrayVec<UnitId, { GameConfig::MAX_UNITS }>,
    /// Next entry to pop.
    pub cursor: usize,
    /// Total actions taken this battle, driving sudden death and the cap.
    pub action_count: u32,
    /// Sudden-death escalation multiplier applied to all damage.
    pub damage_scale: f64,
    /// Per-step counter mixed into roll seeds.
    pub nonce: u64,
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            queue: ArrayVec::new(),
            cursor: 0,
            action_count: 0,
            damage_scale: 1.0,
            nonce: 0,
        }
    }

    /// True when every queued entry has been handed out.
    pub fn exhausted(&self) -> bool {
        self.cursor >= self.queue.len()
    }

    /// Hand out the next queued actor, if any.
    pub fn pop(&mut self) -> Option<UnitId> {
        let id = self.queue.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(id)
    }
}
