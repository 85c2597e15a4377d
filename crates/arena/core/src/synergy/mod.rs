//! Team synergy bonuses.
//!
//! Fielding enough units of one class or tribe unlocks a tier of bonuses for
//! every member of that group. Counts are taken once at combat start; the
//! highest threshold met wins and lower tiers never stack on top.

use crate::env::{Env, SynergyOracle};
use crate::state::{CombatState, CombatUnit, Side, Tribe, UnitClass};

/// Sparse stat deltas for one synergy tier. Flat stats add directly,
/// percentage stats multiply the already-derived value, everything else
/// accumulates into the unit's mods.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SynergyBonus {
    pub def_flat: u32,
    pub mdef_flat: u32,
    pub hp_pct: f64,
    pub atk_pct: f64,
    pub matk_pct: f64,
    pub heal_pct: f64,
    pub lifesteal_pct: f64,
    pub crit_pct: f64,
    pub evade_pct: f64,
    pub shield_start: u32,
    pub starting_rage: u32,
    pub burn_on_hit: u32,
    pub poison_on_hit: u32,
}

/// Thresholds and the bonus unlocked at each, ascending and equal length.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SynergyDef {
    pub thresholds: Vec<u32>,
    pub bonuses: Vec<SynergyBonus>,
}

/// Live-unit tallies per class and tribe for one side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynergyCounts {
    pub class: [u32; UnitClass::COUNT],
    pub tribe: [u32; Tribe::COUNT],
}

impl SynergyCounts {
    pub fn class_count(&self, class: UnitClass) -> u32 {
        self.class[class.as_index()]
    }

    pub fn tribe_count(&self, tribe: Tribe) -> u32 {
        self.tribe[tribe.as_index()]
    }
}

/// Tally living units of one side, then fold optional augment extras into the
/// currently largest class and tribe groups. Extras are never spread across
/// groups and only apply to the player side by convention of the caller.
pub fn calculate_counts(
    units: &[CombatUnit],
    side: Side,
    extra_class: u32,
    extra_tribe: u32,
) -> SynergyCounts {
    let mut counts = SynergyCounts::default();
    for unit in units.iter().filter(|u| u.alive && u.side == side) {
        counts.class[unit.class.as_index()] += 1;
        counts.tribe[unit.tribe.as_index()] += 1;
    }

    if extra_class > 0 {
        if let Some(top) = argmax(&counts.class) {
            counts.class[top] += extra_class;
        }
    }
    if extra_tribe > 0 {
        if let Some(top) = argmax(&counts.tribe) {
            counts.tribe[top] += extra_tribe;
        }
    }
    counts
}

/// Index of the largest nonzero tally; ties go to the earlier entry.
fn argmax(tallies: &[u32]) -> Option<usize> {
    let (idx, &max) = tallies
        .iter()
        .enumerate()
        .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)))?;
    (max > 0).then_some(idx)
}

/// The bonus for the highest threshold the count satisfies, scanning
/// ascending and keeping the last hit.
pub fn resolve_bonus(def: &SynergyDef, count: u32) -> Option<&SynergyBonus> {
    let mut bonus = None;
    for (threshold, tier) in def.thresholds.iter().zip(def.bonuses.iter()) {
        if count >= *threshold {
            bonus = Some(tier);
        }
    }
    bonus
}

/// Apply one resolved bonus to a unit.
pub fn apply_bonus(unit: &mut CombatUnit, bonus: &SynergyBonus) {
    unit.def += bonus.def_flat;
    unit.mdef += bonus.mdef_flat;

    if bonus.hp_pct > 0.0 {
        let add = (unit.max_hp as f64 * bonus.hp_pct).round() as u32;
        unit.max_hp += add;
        unit.hp += add;
    }
    if bonus.atk_pct > 0.0 {
        unit.atk = (unit.atk as f64 * (1.0 + bonus.atk_pct)).round() as u32;
    }
    if bonus.matk_pct > 0.0 {
        unit.matk = (unit.matk as f64 * (1.0 + bonus.matk_pct)).round() as u32;
    }

    unit.mods.heal_pct += bonus.heal_pct;
    unit.mods.lifesteal_pct += bonus.lifesteal_pct;
    unit.mods.crit_pct += bonus.crit_pct;
    unit.mods.evade_pct += bonus.evade_pct;
    unit.mods.shield_start += bonus.shield_start;
    unit.mods.starting_rage += bonus.starting_rage;
    unit.mods.burn_on_hit += bonus.burn_on_hit;
    unit.mods.poison_on_hit += bonus.poison_on_hit;
}

/// Apply class and tribe synergies to every unit of one side.
///
/// Runs exactly once at combat start. Team composition is locked in at that
/// point; counts are not re-evaluated as units die.
pub fn apply_side_synergies(
    state: &mut CombatState,
    env: Env<'_>,
    side: Side,
    extra_class: u32,
    extra_tribe: u32,
) {
    let counts = calculate_counts(&state.units, side, extra_class, extra_tribe);

    for unit in state.units.iter_mut().filter(|u| u.side == side) {
        if let Some(def) = env.synergies.class_synergy(unit.class) {
            if let Some(bonus) = resolve_bonus(def, counts.class_count(unit.class)) {
                apply_bonus(unit, bonus);
            }
        }
        if let Some(def) = env.synergies.tribe_synergy(unit.tribe) {
            if let Some(bonus) = resolve_bonus(def, counts.tribe_count(unit.tribe)) {
                apply_bonus(unit, bonus);
            }
        }
    }
}
