//! Skill execution.
//!
//! A skill resolves through its declared effect tag, a closed vocabulary with
//! one handler per variant. Every handler funnels damage through
//! [`resolve_damage`] and healing/shields through the heal helpers; the only
//! differences between effects are the selection set and the side effects.

use super::damage::{DamageOptions, DamageType, resolve_damage};
use super::heal::{grant_shield, heal_unit};
use super::ActionCtx;
use crate::config::GameConfig;
use crate::env::{ScaleStat, SkillDef};
use crate::state::{Cell, CombatState, CombatUnit, Side, UnitId};

/// The closed set of skill effect archetypes.
///
/// Data files name these tags; parsing happens at load time, so combat never
/// sees an unknown tag. A skill row that fails to parse degrades to
/// `SingleBurst`, the plain single-target damage profile.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillEffect {
    /// Damage the target, shield self, taunt every enemy onto the caster.
    DamageShieldTaunt,
    /// Damage plus a chance to stun.
    DamageStun,
    /// Damage, shield self, and raise a reflect buff.
    DamageShieldReflect,
    /// Armor and magic-armor buff for allies sharing the caster's row.
    AllyRowDefBuff,
    /// Plain single-target damage.
    #[default]
    SingleBurst,
    /// Two separately-scaled hits on the same target.
    DoubleHit,
    /// Single-target damage that heals the caster for a share of it.
    SingleBurstLifesteal,
    /// Single-target damage followed by an echo hit if the target survives.
    SingleDelayedEcho,
    /// Damage every enemy in a cross of five cells around the target.
    #[cfg_attr(feature = "serde", serde(rename = "cross_5"))]
    #[strum(serialize = "cross_5")]
    Cross5,
    /// Damage the nearest N enemies in the target's row.
    RowMulti,
    /// Damage plus a chance to put the target to sleep.
    SingleSleep,
    /// Damage plus an armor break on the target.
    SingleArmorBreak,
    /// Damage everyone in the target's column, each with a freeze chance.
    ColumnFreeze,
    /// Damage every enemy in the 3x3 box around the target.
    AoeCircle,
    /// Full damage down the target's column, splash on adjacent columns.
    ColumnPlusSplash,
    /// 3x3 box damage that also applies poison.
    AoePoison,
    /// Heal the two lowest allies.
    DualHeal,
    /// Shield the lowest ally and cleanse its control and DOT statuses.
    ShieldCleanse,
    /// Grant rage to the closest N allies.
    TeamRage,
    /// Attack buff and a permanent evasion floor for the caster's column.
    ColumnBless,
    /// Damage plus armor break on the whole target row.
    RowCleave,
    /// Buff own attack, strike, and call a row-mate to assist.
    SelfAtkAndAssist,
    /// Physical 3x3 smash.
    ConeSmash,
    /// Single-target true damage.
    TrueSingle,
    /// Damage the farthest N enemies by Manhattan distance.
    FarthestSnipe,
    /// Damage N uniformly random living enemies.
    ScatterVolley,
}

/// Perform a basic attack: effective attack with a small uniform swing,
/// resolved as physical damage.
pub fn basic_attack(
    state: &mut CombatState,
    ctx: &mut ActionCtx<'_>,
    attacker: UnitId,
    target: UnitId,
) {
    let Some(att) = state.unit(attacker) else {
        return;
    };
    let jitter = ctx
        .dice
        .range_i32(GameConfig::ATTACK_JITTER_MIN, GameConfig::ATTACK_JITTER_MAX);
    let raw = att.effective_atk() as f64 + jitter as f64;
    resolve_damage(
        state,
        ctx,
        Some(attacker),
        target,
        raw,
        DamageType::Physical,
        DamageOptions::default(),
    );
}

/// Cast the unit's bound skill at the chosen target.
///
/// A unit without a resolvable skill falls back to a basic attack; the rage
/// the scheduler already spent stays spent either way.
pub fn cast_skill(
    state: &mut CombatState,
    ctx: &mut ActionCtx<'_>,
    caster: UnitId,
    target: UnitId,
) {
    let skill = state
        .unit(caster)
        .and_then(|u| u.skill_id.as_deref())
        .and_then(|id| ctx.env.skills.skill(id))
        .cloned();

    let Some(skill) = skill else {
        basic_attack(state, ctx, caster, target);
        return;
    };

    apply_effect(state, ctx, caster, target, &skill);
}

/// Raw damage for a skill: `base + scaled stat * scale`.
fn skill_raw(caster: &CombatUnit, skill: &SkillDef) -> f64 {
    let stat = match skill.scale_stat {
        ScaleStat::Atk => caster.effective_atk(),
        ScaleStat::Matk => caster.effective_matk(),
        ScaleStat::Def => caster.def,
        ScaleStat::MaxHp => caster.max_hp,
    };
    skill.base + stat as f64 * skill.scale
}

fn apply_effect(
    state: &mut CombatState,
    ctx: &mut ActionCtx<'_>,
    caster_id: UnitId,
    target_id: UnitId,
    skill: &SkillDef,
) {
    let Some(caster) = state.unit(caster_id) else {
        return;
    };
    let side = caster.side;
    let caster_pos = caster.pos;
    let eff_atk = caster.effective_atk();
    let eff_def = caster.effective_def();
    let eff_matk = caster.effective_matk();
    let raw = skill_raw(caster, skill);
    let dtype = skill.damage_type;

    let target_pos = match state.unit(target_id) {
        Some(t) => t.pos,
        None => return,
    };

    match skill.effect {
        SkillEffect::DamageShieldTaunt => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            grant_shield(
                state,
                caster_id,
                skill.shield_base + eff_atk as f64 * 0.4,
            );
            // Taunt lasts through the enemies' own ticking, hence the +1.
            let turns = skill.taunt_turns + 1;
            for id in living_ids(state, side.enemy()) {
                if let Some(enemy) = state.unit_mut(id) {
                    enemy.statuses.taunt.apply(turns, caster_id);
                }
            }
        }

        SkillEffect::DamageStun => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            if is_alive(state, target_id) && ctx.dice.chance(skill.stun_chance) {
                if let Some(t) = state.unit_mut(target_id) {
                    t.statuses.apply_stun(skill.stun_turns);
                }
            }
        }

        SkillEffect::DamageShieldReflect => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            grant_shield(
                state,
                caster_id,
                skill.shield_base + eff_def as f64 * 0.5,
            );
            if let Some(c) = state.unit_mut(caster_id) {
                c.statuses
                    .reflect
                    .extend(skill.reflect_turns, skill.reflect_pct);
            }
        }

        SkillEffect::AllyRowDefBuff => {
            for id in allies_in_row(state, side, caster_pos.row) {
                if let Some(ally) = state.unit_mut(id) {
                    ally.statuses.def_buff.extend(skill.turns, skill.armor_buff);
                    ally.statuses.mdef_buff.extend(skill.turns, skill.mdef_buff);
                }
            }
        }

        SkillEffect::SingleBurst => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
        }

        SkillEffect::DoubleHit => {
            let first = skill.hit1.base + eff_atk as f64 * skill.hit1.scale;
            let second = skill.hit2.base + eff_atk as f64 * skill.hit2.scale;
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                first,
                dtype,
                DamageOptions::default(),
            );
            if is_alive(state, target_id) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    target_id,
                    second,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }

        SkillEffect::SingleBurstLifesteal => {
            let dealt = resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            if dealt > 0 {
                heal_unit(
                    state,
                    Some(caster_id),
                    caster_id,
                    (dealt as f64 * skill.lifesteal).round(),
                );
            }
        }

        SkillEffect::SingleDelayedEcho => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            if is_alive(state, target_id) {
                let echo = skill.echo_base + eff_atk as f64 * skill.echo_scale;
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    target_id,
                    echo,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }

        SkillEffect::Cross5 => {
            for id in enemies_in_cross(state, side, target_pos) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }

        SkillEffect::RowMulti => {
            for id in nearest_in_row(state, side, caster_pos, target_pos.row, skill.max_hits) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }

        SkillEffect::SingleSleep => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            if is_alive(state, target_id) && ctx.dice.chance(skill.sleep_chance) {
                if let Some(t) = state.unit_mut(target_id) {
                    t.statuses.apply_sleep(skill.sleep_turns);
                }
            }
        }

        SkillEffect::SingleArmorBreak => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                dtype,
                DamageOptions::default(),
            );
            if let Some(t) = state.unit_mut(target_id) {
                t.statuses
                    .armor_break
                    .extend(skill.turns, skill.armor_break);
            }
        }

        SkillEffect::ColumnFreeze => {
            for id in enemies_in_column(state, side, target_pos.col) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
                if is_alive(state, id) && ctx.dice.chance(skill.freeze_chance) {
                    if let Some(enemy) = state.unit_mut(id) {
                        enemy.statuses.apply_freeze(skill.freeze_turns);
                    }
                }
            }
        }

        SkillEffect::AoeCircle | SkillEffect::ConeSmash => {
            for id in enemies_in_box(state, side, target_pos) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }

        SkillEffect::ColumnPlusSplash => {
            for id in living_ids(state, side.enemy()) {
                let col = match state.unit(id) {
                    Some(u) => u.pos.col,
                    None => continue,
                };
                if col == target_pos.col {
                    resolve_damage(
                        state,
                        ctx,
                        Some(caster_id),
                        id,
                        raw,
                        dtype,
                        DamageOptions::default(),
                    );
                } else if col + 1 == target_pos.col || col == target_pos.col + 1 {
                    resolve_damage(
                        state,
                        ctx,
                        Some(caster_id),
                        id,
                        raw * skill.splash_rate,
                        dtype,
                        DamageOptions::default(),
                    );
                }
            }
        }

        SkillEffect::AoePoison => {
            for id in enemies_in_box(state, side, target_pos) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
                if let Some(enemy) = state.unit_mut(id) {
                    if enemy.alive {
                        enemy
                            .statuses
                            .poison
                            .extend(skill.poison_turns, skill.poison_per_turn);
                    }
                }
            }
        }

        SkillEffect::DualHeal => {
            for id in lowest_hp_allies(state, side, 2) {
                heal_unit(state, Some(caster_id), id, raw);
            }
        }

        SkillEffect::ShieldCleanse => {
            if let Some(id) = lowest_hp_allies(state, side, 1).first().copied() {
                let amount = skill.shield_base + eff_matk as f64 * skill.shield_scale;
                grant_shield(state, id, amount);
                if let Some(ally) = state.unit_mut(id) {
                    ally.statuses.cleanse();
                }
            }
        }

        SkillEffect::TeamRage => {
            for id in nearest_allies(state, side, caster_pos, caster_id, skill.max_targets) {
                if let Some(ally) = state.unit_mut(id) {
                    ally.gain_rage(skill.rage_gain);
                }
            }
        }

        SkillEffect::ColumnBless => {
            for id in allies_in_column(state, side, caster_pos.col) {
                if let Some(ally) = state.unit_mut(id) {
                    ally.statuses.atk_buff.extend(skill.turns, skill.atk_buff);
                    // The blessing leaves a permanent evasion floor behind.
                    ally.mods.evade_pct = ally.mods.evade_pct.max(skill.evade_buff);
                }
            }
        }

        SkillEffect::RowCleave => {
            for id in enemies_in_row(state, side, target_pos.row) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
                if let Some(enemy) = state.unit_mut(id) {
                    enemy
                        .statuses
                        .armor_break
                        .extend(skill.turns, skill.armor_break);
                }
            }
        }

        SkillEffect::SelfAtkAndAssist => {
            if let Some(c) = state.unit_mut(caster_id) {
                c.statuses.atk_buff.extend(skill.turns, skill.self_atk_buff);
            }
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                DamageType::Physical,
                DamageOptions::default(),
            );
            let helper = allies_in_row(state, side, caster_pos.row)
                .into_iter()
                .find(|&id| id != caster_id);
            if let Some(helper) = helper {
                if is_alive(state, target_id) {
                    let assist = state
                        .unit(helper)
                        .map(|h| h.effective_atk() as f64 * skill.assist_rate)
                        .unwrap_or(0.0);
                    if assist > 0.0 {
                        resolve_damage(
                            state,
                            ctx,
                            Some(helper),
                            target_id,
                            assist,
                            DamageType::Physical,
                            DamageOptions::default(),
                        );
                    }
                }
            }
        }

        SkillEffect::TrueSingle => {
            resolve_damage(
                state,
                ctx,
                Some(caster_id),
                target_id,
                raw,
                DamageType::True,
                DamageOptions::default(),
            );
        }

        SkillEffect::FarthestSnipe => {
            for id in farthest_enemies(state, side, caster_pos, skill.max_targets) {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    id,
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }

        SkillEffect::ScatterVolley => {
            let pool = living_ids(state, side.enemy());
            let picks = ctx
                .dice
                .sample_indices(pool.len(), skill.max_targets as usize);
            for at in picks {
                resolve_damage(
                    state,
                    ctx,
                    Some(caster_id),
                    pool[at],
                    raw,
                    dtype,
                    DamageOptions::default(),
                );
            }
        }
    }
}

// ============================================================================
// Selection sets
// ============================================================================

fn is_alive(state: &CombatState, id: UnitId) -> bool {
    state.unit(id).is_some_and(|u| u.alive)
}

fn living_ids(state: &CombatState, side: Side) -> Vec<UnitId> {
    state.living(side).map(|u| u.id).collect()
}

fn enemies_in_row(state: &CombatState, side: Side, row: u8) -> Vec<UnitId> {
    state
        .living(side.enemy())
        .filter(|u| u.pos.row == row)
        .map(|u| u.id)
        .collect()
}

fn enemies_in_column(state: &CombatState, side: Side, col: u8) -> Vec<UnitId> {
    state
        .living(side.enemy())
        .filter(|u| u.pos.col == col)
        .map(|u| u.id)
        .collect()
}

fn enemies_in_box(state: &CombatState, side: Side, center: Cell) -> Vec<UnitId> {
    state
        .living(side.enemy())
        .filter(|u| {
            u.pos.row.abs_diff(center.row) <= 1 && u.pos.col.abs_diff(center.col) <= 1
        })
        .map(|u| u.id)
        .collect()
}

fn enemies_in_cross(state: &CombatState, side: Side, center: Cell) -> Vec<UnitId> {
    state
        .living(side.enemy())
        .filter(|u| {
            let dr = u.pos.row.abs_diff(center.row);
            let dc = u.pos.col.abs_diff(center.col);
            dr + dc <= 1
        })
        .map(|u| u.id)
        .collect()
}

fn nearest_in_row(
    state: &CombatState,
    side: Side,
    from: Cell,
    row: u8,
    count: u8,
) -> Vec<UnitId> {
    let mut victims: Vec<_> = state
        .living(side.enemy())
        .filter(|u| u.pos.row == row)
        .map(|u| (from.manhattan(u.pos), u.id))
        .collect();
    victims.sort_by_key(|(dist, id)| (*dist, *id));
    victims
        .into_iter()
        .take(count as usize)
        .map(|(_, id)| id)
        .collect()
}

fn farthest_enemies(state: &CombatState, side: Side, from: Cell, count: u8) -> Vec<UnitId> {
    let mut victims: Vec<_> = state
        .living(side.enemy())
        .map(|u| (from.manhattan(u.pos), u.id))
        .collect();
    victims.sort_by_key(|(dist, id)| (std::cmp::Reverse(*dist), *id));
    victims
        .into_iter()
        .take(count as usize)
        .map(|(_, id)| id)
        .collect()
}

fn allies_in_row(state: &CombatState, side: Side, row: u8) -> Vec<UnitId> {
    state
        .living(side)
        .filter(|u| u.pos.row == row)
        .map(|u| u.id)
        .collect()
}

fn allies_in_column(state: &CombatState, side: Side, col: u8) -> Vec<UnitId> {
    state
        .living(side)
        .filter(|u| u.pos.col == col)
        .map(|u| u.id)
        .collect()
}

fn nearest_allies(
    state: &CombatState,
    side: Side,
    from: Cell,
    except: UnitId,
    count: u8,
) -> Vec<UnitId> {
    let mut allies: Vec<_> = state
        .living(side)
        .filter(|u| u.id != except)
        .map(|u| (from.manhattan(u.pos), u.id))
        .collect();
    allies.sort_by_key(|(dist, id)| (*dist, *id));
    allies
        .into_iter()
        .take(count as usize)
        .map(|(_, id)| id)
        .collect()
}

/// Allies ordered by hp ratio, lowest first.
fn lowest_hp_allies(state: &CombatState, side: Side, count: usize) -> Vec<UnitId> {
    let mut allies: Vec<_> = state
        .living(side)
        .map(|u| ((u.hp_ratio() * 1_000_000.0) as u64, u.id))
        .collect();
    allies.sort_by_key(|(ratio, id)| (*ratio, *id));
    allies.into_iter().take(count).map(|(_, id)| id).collect()
}
