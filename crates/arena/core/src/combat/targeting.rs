//! Target selection.
//!
//! Taunt overrides everything. AI-side attackers away from their frontline
//! sometimes pick at random, by difficulty. Everyone else scores every living
//! enemy with a class-archetype priority tuple and takes the smallest.

use super::ActionCtx;
use crate::state::{CombatState, CombatUnit, Side, UnitClass, UnitId};

/// Priority tuple; compared lexicographically, smallest wins. Later slots
/// break ties in earlier ones.
type Score = [u32; 5];

/// Pick the enemy the attacker goes after this turn, or `None` when no
/// living enemy remains (a combat-ending condition, not an error).
pub fn select_target(
    state: &CombatState,
    ctx: &mut ActionCtx<'_>,
    attacker: UnitId,
) -> Option<UnitId> {
    let attacker = state.unit(attacker)?;
    let enemies: Vec<&CombatUnit> = state.living(attacker.side.enemy()).collect();
    if enemies.is_empty() {
        return None;
    }

    // A live taunter drags the attack onto itself.
    if let Some(forced) = attacker.statuses.taunt.forced_target() {
        if let Some(enemy) = enemies.iter().find(|e| e.id == forced) {
            return Some(enemy.id);
        }
    }

    // Imperfect AI: backline attackers on the right sometimes spray randomly.
    if attacker.side == Side::Right
        && attacker.pos.distance_to_frontline(Side::Right) > 0
        && ctx.dice.chance(ctx.profile.random_target_chance)
    {
        let pick = ctx.dice.index(enemies.len());
        return Some(enemies[pick].id);
    }

    enemies
        .iter()
        .min_by_key(|enemy| score(attacker, enemy))
        .map(|enemy| enemy.id)
}

fn score(attacker: &CombatUnit, target: &CombatUnit) -> Score {
    let same_row = if target.pos.row == attacker.pos.row {
        0
    } else {
        1
    };
    let line_dist = attacker.pos.manhattan(target.pos);
    let frontline_dist = target.pos.distance_to_frontline(target.side);
    let backline_dist = target.pos.distance_to_backline(target.side);
    let hp_ratio = (target.hp_ratio() * 1000.0).round() as u32;
    let hp_raw = target.hp;

    match attacker.class {
        // Dive the squishiest thing hiding in the back.
        UnitClass::Assassin => [backline_dist, hp_ratio, line_dist, frontline_dist, hp_raw],
        // Shoot straight ahead, closest first.
        UnitClass::Archer | UnitClass::Mage => {
            [same_row, line_dist, frontline_dist, hp_ratio, hp_raw]
        }
        // Everyone else walks into the nearest frontline threat.
        _ => [frontline_dist, line_dist, same_row, hp_ratio, hp_raw],
    }
}
