//! Start-of-turn status processing.

use crate::combat::damage::{DamageOptions, DamageType, resolve_damage};
use crate::combat::ActionCtx;
use crate::state::{CombatState, UnitId};

/// Why a unit lost its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SkipReason {
    /// Killed by burn or poison before acting.
    Dot,
    Freeze,
    Stun,
    Sleep,
}

/// Run the start-of-turn sequence for the acting unit.
///
/// Order matters and is fixed: timed buffs/debuffs tick down first, then burn
/// and poison land (as true damage that grants no rage and cannot be
/// reflected), then the hard-control gate runs in freeze > stun > sleep
/// priority. The first active control consumes one turn of itself and the
/// unit's whole action.
///
/// Returns `Some(reason)` when the unit does not get to act.
pub fn process_turn_start(
    state: &mut CombatState,
    ctx: &mut ActionCtx<'_>,
    id: UnitId,
) -> Option<SkipReason> {
    let (burn, poison) = {
        let unit = state.unit_mut(id)?;

        unit.statuses.taunt.tick();
        if unit.statuses.silence > 0 {
            unit.statuses.silence -= 1;
        }
        unit.statuses.armor_break.tick();
        unit.statuses.reflect.tick();
        unit.statuses.atk_buff.tick();
        unit.statuses.def_buff.tick();
        unit.statuses.mdef_buff.tick();
        unit.statuses.evade_buff.tick();
        unit.statuses.evade_debuff.tick();

        (
            unit.statuses.burn.active_value(),
            unit.statuses.poison.active_value(),
        )
    };

    if burn > 0 {
        resolve_damage(
            state,
            ctx,
            None,
            id,
            burn as f64,
            DamageType::True,
            DamageOptions::DOT,
        );
        if let Some(unit) = state.unit_mut(id) {
            unit.statuses.burn.tick();
        }
    }
    if poison > 0 {
        resolve_damage(
            state,
            ctx,
            None,
            id,
            poison as f64,
            DamageType::True,
            DamageOptions::DOT,
        );
        if let Some(unit) = state.unit_mut(id) {
            unit.statuses.poison.tick();
        }
    }

    let unit = state.unit_mut(id)?;
    if !unit.alive {
        return Some(SkipReason::Dot);
    }

    if unit.statuses.freeze > 0 {
        unit.statuses.freeze -= 1;
        return Some(SkipReason::Freeze);
    }
    if unit.statuses.stun > 0 {
        unit.statuses.stun -= 1;
        return Some(SkipReason::Stun);
    }
    if unit.statuses.sleep > 0 {
        unit.statuses.sleep -= 1;
        return Some(SkipReason::Sleep);
    }

    None
}
