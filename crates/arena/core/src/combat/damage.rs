//! Damage resolution.
//!
//! Every point of damage in a battle funnels through [`resolve_damage`]:
//! basic attacks, skill hits, damage over time, and reflect all end here, so
//! the hp/shield/rage invariants live in exactly one place.

use super::ActionCtx;
use super::heal::heal_unit;
use crate::config::GameConfig;
use crate::state::{CombatState, Side, Tribe, UnitClass, UnitId};

/// How a damage amount interacts with mitigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DamageType {
    /// Reduced by defense, can crit, subject to armor break.
    #[default]
    Physical,
    /// Reduced by magic defense.
    Magic,
    /// Bypasses mitigation entirely.
    True,
}

/// Flags for special resolution paths.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DamageOptions {
    /// Skip the evasion roll (reflect, guaranteed hits).
    pub force_hit: bool,
    /// Suppress rage income on both sides (damage over time).
    pub no_rage: bool,
    /// Suppress reflect, breaking the recursion (reflected damage itself).
    pub no_reflect: bool,
}

impl DamageOptions {
    /// The option set for DOT ticks: no rage income, no reflection.
    pub const DOT: Self = Self {
        force_hit: true,
        no_rage: true,
        no_reflect: true,
    };
}

/// Snapshot of the attacker facts the pipeline needs after mutation starts.
#[derive(Clone, Copy)]
struct AttackerFacts {
    id: UnitId,
    side: Side,
    tribe: Tribe,
    class: UnitClass,
    crit_pct: f64,
    burn_on_hit: u32,
    poison_on_hit: u32,
    lifesteal_pct: f64,
}

/// Resolve one raw damage amount into net hp loss on the defender.
///
/// Pipeline: evasion roll, floor, counter advantage, crit, mitigation,
/// sudden-death scaling, shield absorption, rage income, on-hit DOTs,
/// reflect, lifesteal, death. Returns the hp damage actually applied
/// (post-shield) so callers can chain lifesteal-style effects.
///
/// A `None` attacker means environmental damage (burn/poison ticks): no
/// evasion, no crit, no counters, no attacker-side bookkeeping.
pub fn resolve_damage(
    state: &mut CombatState,
    ctx: &mut ActionCtx<'_>,
    attacker: Option<UnitId>,
    defender: UnitId,
    raw_amount: f64,
    damage_type: DamageType,
    opts: DamageOptions,
) -> u32 {
    let Some(def_unit) = state.unit(defender) else {
        return 0;
    };
    if !def_unit.alive {
        return 0;
    }

    let attacker_facts = match attacker {
        Some(id) => match state.unit(id) {
            Some(u) if u.alive => Some(AttackerFacts {
                id,
                side: u.side,
                tribe: u.tribe,
                class: u.class,
                crit_pct: u.mods.crit_pct,
                burn_on_hit: u.mods.burn_on_hit,
                poison_on_hit: u.mods.poison_on_hit,
                lifesteal_pct: u.mods.lifesteal_pct,
            }),
            // A dead or unknown attacker lands nothing.
            _ => return 0,
        },
        None => None,
    };

    // Evasion roll.
    if let Some(_att) = attacker_facts {
        if !opts.force_hit && !ctx.dice.chance(state.unit(defender).map_or(1.0, |d| d.hit_chance()))
        {
            return 0;
        }
    }

    let def_snapshot = state.unit(defender).expect("defender checked above");
    let def_tribe = def_snapshot.tribe;
    let def_class = def_snapshot.class;
    let def_physical = def_snapshot
        .effective_def()
        .saturating_sub(def_snapshot.statuses.armor_break.active_value());
    let def_magic = def_snapshot.effective_mdef();

    let mut raw = raw_amount.max(1.0);

    // Tribe/class counter advantage.
    if let Some(att) = attacker_facts {
        let mut mult = 1.0;
        let synergies = ctx.env.synergies;
        if synergies.tribe_counter(att.tribe) == Some(def_tribe)
            || synergies.class_counters(att.class, def_class)
        {
            mult *= 1.0 + GameConfig::COUNTER_BONUS;
        }
        if synergies.tribe_counter(def_tribe) == Some(att.tribe) {
            mult *= 1.0 - GameConfig::COUNTER_BONUS;
        }
        raw = (raw * mult).max(1.0);
    }

    // Crit, physical only.
    if let Some(att) = attacker_facts {
        if damage_type == DamageType::Physical && ctx.dice.chance(att.crit_pct) {
            raw *= GameConfig::CRIT_MULTIPLIER;
        }
    }

    // Mitigation.
    let mitigated = match damage_type {
        DamageType::Physical => raw * (100.0 / (100.0 + def_physical as f64)),
        DamageType::Magic => raw * (100.0 / (100.0 + def_magic as f64)),
        DamageType::True => raw,
    };

    let final_amount = ((mitigated * state.turn.damage_scale).round() as i64).max(1) as u32;

    // Shield absorbs first, remainder hits hp.
    let damage_to_hp;
    {
        let def_unit = state.unit_mut(defender).expect("defender checked above");
        let absorbed = def_unit.shield.min(final_amount);
        def_unit.shield -= absorbed;
        damage_to_hp = (final_amount - absorbed).min(def_unit.hp);
        def_unit.hp -= damage_to_hp;
    }

    // Rage income.
    if !opts.no_rage {
        if let Some(att) = attacker_facts {
            let gain = match att.side {
                Side::Right => ctx.profile.rage_gain,
                Side::Left => 1,
            };
            if let Some(a) = state.unit_mut(att.id) {
                a.gain_rage(gain);
            }
        }
        if let Some(d) = state.unit_mut(defender) {
            d.gain_rage(1);
        }
    }

    // On-hit DOTs from the attacker's mods.
    if let Some(att) = attacker_facts {
        if let Some(d) = state.unit_mut(defender) {
            if d.alive && d.hp > 0 {
                if att.burn_on_hit > 0 {
                    d.statuses
                        .burn
                        .extend(GameConfig::ON_HIT_DOT_TURNS, att.burn_on_hit);
                }
                if att.poison_on_hit > 0 {
                    d.statuses
                        .poison
                        .extend(GameConfig::ON_HIT_DOT_TURNS, att.poison_on_hit);
                }
            }
        }
    }

    // Reflect sends a share of the hp damage back as unavoidable true damage.
    // The recursive call is marked no_reflect, so the chain is depth one.
    if let Some(att) = attacker_facts {
        if !opts.no_reflect {
            let reflect = state
                .unit(defender)
                .map(|d| d.statuses.reflect.active_value())
                .unwrap_or(0.0);
            let attacker_alive = state.unit(att.id).is_some_and(|a| a.alive);
            if reflect > 0.0 && attacker_alive {
                let reflected = ((damage_to_hp as f64 * reflect).round()).max(1.0);
                resolve_damage(
                    state,
                    ctx,
                    Some(defender),
                    att.id,
                    reflected,
                    DamageType::True,
                    DamageOptions {
                        force_hit: true,
                        no_rage: false,
                        no_reflect: true,
                    },
                );
            }
        }
    }

    // Lifesteal on the hp portion.
    if let Some(att) = attacker_facts {
        if att.lifesteal_pct > 0.0 && damage_to_hp > 0 {
            let steal = (damage_to_hp as f64 * att.lifesteal_pct).round();
            if steal >= 1.0 {
                heal_unit(state, Some(att.id), att.id, steal);
            }
        }
    }

    // Death.
    if let Some(d) = state.unit_mut(defender) {
        if d.alive && d.hp == 0 {
            d.mark_dead();
        }
    }

    damage_to_hp
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ActionCtx;
    use crate::engine::testing::{duel_state, env_of, test_content};
    use crate::env::{AiDifficulty, Dice, Env, PcgRng, compute_seed};

    fn ctx<'a>(env: Env<'a>, rng: &'a PcgRng, seed: u64) -> ActionCtx<'a> {
        ActionCtx::new(
            env,
            AiDifficulty::Medium.profile(),
            Dice::new(rng, compute_seed(seed, 0)),
        )
    }

    #[test]
    fn physical_mitigation_follows_the_armor_curve() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        {
            let attacker = &mut state.units[0];
            attacker.mods.crit_pct = 0.0;
        }
        {
            let defender = &mut state.units[1];
            defender.def = 20;
            defender.mods.evade_pct = 0.0;
            defender.hp = 1000;
            defender.max_hp = 1000;
        }
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 5);

        let dealt = resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            100.0,
            DamageType::Physical,
            DamageOptions {
                force_hit: true,
                ..Default::default()
            },
        );
        // 100 * 100 / 120, rounded.
        assert_eq!(dealt, 83);
    }

    #[test]
    fn shield_absorbs_before_hp() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        {
            let defender = &mut state.units[1];
            defender.shield = 30;
            defender.def = 0;
            defender.hp = 100;
            defender.max_hp = 100;
        }
        state.units[0].mods.crit_pct = 0.0;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 7);

        let dealt = resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            50.0,
            DamageType::True,
            DamageOptions {
                force_hit: true,
                ..Default::default()
            },
        );
        assert_eq!(dealt, 20);
        let d = state.unit(defender).unwrap();
        assert_eq!(d.shield, 0);
        assert_eq!(d.hp, 80);
    }

    #[test]
    fn true_damage_ignores_defense() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        state.units[1].def = 500;
        state.units[1].mdef = 500;
        state.units[1].hp = 1000;
        state.units[1].max_hp = 1000;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 11);

        let dealt = resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            40.0,
            DamageType::True,
            DamageOptions {
                force_hit: true,
                ..Default::default()
            },
        );
        assert_eq!(dealt, 40);
    }

    #[test]
    fn reflect_returns_true_damage_without_looping() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        {
            let defender = &mut state.units[1];
            defender.def = 0;
            defender.hp = 500;
            defender.max_hp = 500;
            defender.statuses.reflect.extend(2, 0.5);
        }
        {
            let attacker = &mut state.units[0];
            attacker.hp = 500;
            attacker.max_hp = 500;
            attacker.mods.crit_pct = 0.0;
            attacker.statuses.reflect.extend(2, 0.5);
        }
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 13);

        let dealt = resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            40.0,
            DamageType::True,
            DamageOptions {
                force_hit: true,
                ..Default::default()
            },
        );
        assert_eq!(dealt, 40);
        let attacker_hp = state.unit(attacker).unwrap().hp;
        // Half of 40 came back; the attacker's own reflect must not bounce it
        // again, which would recurse forever.
        assert_eq!(attacker_hp, 480);
    }

    #[test]
    fn counters_swing_raw_damage_both_ways() {
        let content = test_content();
        let rng = PcgRng;
        let opts = DamageOptions {
            force_hit: true,
            ..Default::default()
        };

        // Fire counters Spirit: +20% before mitigation.
        let mut state = duel_state();
        state.units[0].tribe = Tribe::Fire;
        state.units[1].tribe = Tribe::Spirit;
        state.units[1].hp = 1000;
        state.units[1].max_hp = 1000;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut c = ctx(env_of(&content, &rng), &rng, 29);
        let dealt = resolve_damage(
            &mut state,
            &mut c,
            Some(attacker),
            defender,
            100.0,
            DamageType::True,
            opts,
        );
        assert_eq!(dealt, 120);

        // Attacking into the counter: -20%.
        let mut state = duel_state();
        state.units[0].tribe = Tribe::Spirit;
        state.units[1].tribe = Tribe::Fire;
        state.units[1].hp = 1000;
        state.units[1].max_hp = 1000;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut c = ctx(env_of(&content, &rng), &rng, 31);
        let dealt = resolve_damage(
            &mut state,
            &mut c,
            Some(attacker),
            defender,
            100.0,
            DamageType::True,
            opts,
        );
        assert_eq!(dealt, 80);

        // Class advantage grants the same +20%.
        let mut state = duel_state();
        state.units[0].class = UnitClass::Assassin;
        state.units[1].class = UnitClass::Mage;
        state.units[1].hp = 1000;
        state.units[1].max_hp = 1000;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut c = ctx(env_of(&content, &rng), &rng, 37);
        let dealt = resolve_damage(
            &mut state,
            &mut c,
            Some(attacker),
            defender,
            100.0,
            DamageType::True,
            opts,
        );
        assert_eq!(dealt, 120);
    }

    #[test]
    fn dead_defenders_take_nothing() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        state.units[1].mark_dead();
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 17);

        let dealt = resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            99.0,
            DamageType::True,
            DamageOptions::default(),
        );
        assert_eq!(dealt, 0);
    }

    #[test]
    fn lethal_damage_marks_death_and_zeroes_shield() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        {
            let defender = &mut state.units[1];
            defender.hp = 10;
            defender.shield = 5;
            defender.def = 0;
        }
        state.units[0].mods.crit_pct = 0.0;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 19);

        resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            200.0,
            DamageType::True,
            DamageOptions {
                force_hit: true,
                ..Default::default()
            },
        );
        let d = state.unit(defender).unwrap();
        assert!(!d.alive);
        assert_eq!(d.hp, 0);
        assert_eq!(d.shield, 0);
    }

    #[test]
    fn rage_flows_to_both_sides_unless_suppressed() {
        let content = test_content();
        let rng = PcgRng;
        let mut state = duel_state();
        state.units[1].def = 0;
        let (attacker, defender) = (state.units[0].id, state.units[1].id);
        let mut ctx = ctx(env_of(&content, &rng), &rng, 23);

        resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            10.0,
            DamageType::True,
            DamageOptions {
                force_hit: true,
                ..Default::default()
            },
        );
        assert_eq!(state.unit(attacker).unwrap().rage, 1);
        assert_eq!(state.unit(defender).unwrap().rage, 1);

        resolve_damage(
            &mut state,
            &mut ctx,
            Some(attacker),
            defender,
            10.0,
            DamageType::True,
            DamageOptions::DOT,
        );
        assert_eq!(state.unit(attacker).unwrap().rage, 1);
        assert_eq!(state.unit(defender).unwrap().rage, 1);
    }
}
