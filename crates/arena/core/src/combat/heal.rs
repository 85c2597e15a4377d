//! Healing and shield grants.

use crate::state::{CombatState, UnitId};

/// Heal a living target, boosted by the caster's heal bonus.
///
/// Returns the hp actually restored after the max-hp cap; dead targets are
/// never healed back up.
pub fn heal_unit(
    state: &mut CombatState,
    caster: Option<UnitId>,
    target: UnitId,
    amount: f64,
) -> u32 {
    let bonus = caster
        .and_then(|id| state.unit(id))
        .map(|c| 1.0 + c.mods.heal_pct)
        .unwrap_or(1.0);
    let raw = (amount * bonus).round().max(1.0) as u32;

    match state.unit_mut(target) {
        Some(t) if t.alive => t.restore_hp(raw),
        _ => 0,
    }
}

/// Grant shield points to a living target. Shield has no cap; it absorbs
/// before hp and vanishes on death.
pub fn grant_shield(state: &mut CombatState, target: UnitId, amount: f64) -> u32 {
    let value = amount.round().max(1.0) as u32;
    match state.unit_mut(target) {
        Some(t) if t.alive => {
            t.shield += value;
            value
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::duel_state;

    #[test]
    fn healing_respects_the_max_hp_cap() {
        let mut state = duel_state();
        let id = state.units[0].id;
        state.units[0].hp = state.units[0].max_hp - 5;
        let applied = heal_unit(&mut state, None, id, 50.0);
        assert_eq!(applied, 5);
        assert_eq!(state.units[0].hp, state.units[0].max_hp);
    }

    #[test]
    fn heal_bonus_scales_the_amount() {
        let mut state = duel_state();
        let (caster, target) = (state.units[0].id, state.units[1].id);
        state.units[0].mods.heal_pct = 0.5;
        state.units[1].hp = 10;
        let applied = heal_unit(&mut state, Some(caster), target, 20.0);
        assert_eq!(applied, 30);
    }

    #[test]
    fn dead_targets_stay_down() {
        let mut state = duel_state();
        let id = state.units[1].id;
        state.units[1].mark_dead();
        assert_eq!(heal_unit(&mut state, None, id, 40.0), 0);
        assert_eq!(grant_shield(&mut state, id, 40.0), 0);
    }
}
