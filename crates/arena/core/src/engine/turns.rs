//! Action-order construction.

use crate::config::GameConfig;
use crate::state::{Cell, CombatState, Side, UnitId};

/// Rebuild the turn queue for a fresh round.
///
/// Each side is swept row by row from the top, columns running toward the
/// enemy (the frontline acts before the backline). The two side orders are
/// then interleaved so actions alternate left/right as long as both sides
/// have units left in the round.
pub fn build_queue(state: &mut CombatState) {
    let left = side_order(state, Side::Left);
    let right = side_order(state, Side::Right);

    state.turn.queue.clear();
    state.turn.cursor = 0;

    let longest = left.len().max(right.len());
    for i in 0..longest {
        if let Some(&id) = left.get(i) {
            state.turn.queue.push(id);
        }
        if let Some(&id) = right.get(i) {
            state.turn.queue.push(id);
        }
    }
}

fn side_order(state: &CombatState, side: Side) -> Vec<UnitId> {
    let mut order = Vec::new();
    for row in 0..GameConfig::ROWS {
        match side {
            Side::Left => {
                for col in (0..=GameConfig::LEFT_COL_MAX).rev() {
                    if let Some(unit) = state.unit_at(side, Cell::new(row, col)) {
                        order.push(unit.id);
                    }
                }
            }
            Side::Right => {
                for col in GameConfig::RIGHT_COL_MIN..GameConfig::COLS {
                    if let Some(unit) = state.unit_at(side, Cell::new(row, col)) {
                        order.push(unit.id);
                    }
                }
            }
        }
    }
    order
}
