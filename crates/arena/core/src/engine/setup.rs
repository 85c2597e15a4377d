//! Battle setup: roster resolution, stat derivation, synergy application.

use crate::config::GameConfig;
use crate::env::{AiDifficulty, Env};
use crate::state::{
    Cell, CombatPhase, CombatState, CombatUnit, Side, StatusBoard, TurnState, UnitId, UnitMods,
};
use crate::stats::{TeamBonuses, derive_stats};
use crate::synergy::apply_side_synergies;

use super::errors::SetupError;
use super::turns::build_queue;

/// One roster entry: which unit, how upgraded, and where it stands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitPlacement {
    pub base_id: String,
    pub star: u8,
    pub cell: Cell,
    /// Pre-aggregated equipment bonuses for this unit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub mods: UnitMods,
}

impl UnitPlacement {
    pub fn new(base_id: impl Into<String>, star: u8, row: u8, col: u8) -> Self {
        Self {
            base_id: base_id.into(),
            star,
            cell: Cell::new(row, col),
            mods: UnitMods::default(),
        }
    }
}

/// Player-wide bonuses accumulated during planning, consumed once at setup.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerAugments {
    pub team: TeamBonuses,
    pub lifesteal_pct: f64,
    /// Rage every player unit starts with, before synergy bonuses.
    pub starting_rage: u32,
    /// Shield every player unit starts with.
    pub starting_shield: u32,
    /// Phantom members added to the largest class/tribe group when counting
    /// synergies.
    pub extra_class_count: u32,
    pub extra_tribe_count: u32,
}

/// Resolve both rosters against the catalog and produce a ready-to-step
/// battle state.
///
/// Placements with unknown base ids are dropped silently; a side that ends up
/// with no units at all is the one unrecoverable condition.
pub fn start_combat(
    env: Env<'_>,
    seed: u64,
    difficulty: AiDifficulty,
    player_board: &[UnitPlacement],
    enemy_roster: &[UnitPlacement],
    augments: &PlayerAugments,
) -> Result<CombatState, SetupError> {
    let mut units = Vec::with_capacity(player_board.len() + enemy_roster.len());
    let mut next_id = 1u32;

    for (side, roster) in [(Side::Left, player_board), (Side::Right, enemy_roster)] {
        for placement in roster {
            let Some(def) = env.units.unit_def(&placement.base_id) else {
                continue;
            };
            if !placement.cell.in_bounds() {
                continue;
            }

            let star = placement.star.clamp(1, GameConfig::MAX_STAR);
            let stats = derive_stats(
                &def.stats,
                star,
                side,
                difficulty.profile(),
                &augments.team,
            );

            let mut mods = placement.mods;
            mods.crit_pct += GameConfig::BASE_CRIT_PCT;
            if side.is_left() {
                mods.lifesteal_pct += augments.lifesteal_pct;
            }

            let unit = CombatUnit {
                id: UnitId(next_id),
                base_id: def.id.clone(),
                side,
                class: def.class,
                tribe: def.tribe,
                star,
                skill_id: def.skill_id.clone(),
                home: placement.cell,
                pos: placement.cell,
                max_hp: stats.hp,
                hp: stats.hp,
                atk: stats.atk,
                def: stats.def,
                matk: stats.matk,
                mdef: stats.mdef,
                range: stats.range,
                rage_max: stats.rage_max,
                rage: if side.is_left() {
                    augments.starting_rage.min(stats.rage_max)
                } else {
                    0
                },
                shield: if side.is_left() {
                    augments.starting_shield
                } else {
                    0
                },
                alive: true,
                mods,
                statuses: StatusBoard::default(),
            };
            next_id += 1;
            units.push(unit);
        }
    }

    if !units.iter().any(|u| u.side == Side::Left) {
        return Err(SetupError::EmptyRoster(Side::Left));
    }
    if !units.iter().any(|u| u.side == Side::Right) {
        return Err(SetupError::EmptyRoster(Side::Right));
    }

    let mut state = CombatState {
        seed,
        difficulty,
        units,
        turn: TurnState::new(),
        phase: CombatPhase::Combat,
    };

    apply_side_synergies(
        &mut state,
        env,
        Side::Left,
        augments.extra_class_count,
        augments.extra_tribe_count,
    );
    apply_side_synergies(&mut state, env, Side::Right, 0, 0);

    // Synergy-granted starting resources land after all bonuses accumulated.
    for unit in &mut state.units {
        let rage_bonus = unit.mods.starting_rage.min(GameConfig::STARTING_RAGE_CAP);
        unit.rage = (unit.rage + rage_bonus).min(unit.rage_max);
        unit.shield += unit.mods.shield_start;
    }

    build_queue(&mut state);
    Ok(state)
}
