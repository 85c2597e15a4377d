//! Combat unit state: derived stats, cumulative mods, and status channels.

use super::common::{Cell, Side, UnitClass, UnitId, Tribe};
use super::status::StatusBoard;
use crate::config::GameConfig;

/// Base stat block, as found in the unit catalog and after star scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub matk: u32,
    pub mdef: u32,
    pub range: u8,
    pub rage_max: u32,
}

/// Cumulative percentage/flat bonuses from synergies and pre-aggregated
/// equipment. Additive across sources; consumed throughout combat.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitMods {
    pub atk_pct: f64,
    pub matk_pct: f64,
    pub crit_pct: f64,
    pub evade_pct: f64,
    pub heal_pct: f64,
    pub lifesteal_pct: f64,
    pub burn_on_hit: u32,
    pub poison_on_hit: u32,
    pub shield_start: u32,
    pub starting_rage: u32,
}

/// One deployed unit for the duration of a battle.
///
/// Created from roster data at combat start and discarded when the battle
/// resolves. Once `alive` flips to false the unit is inert: it takes no
/// turns, cannot be targeted, and absorbs no damage, but it stays in the
/// roster so side counts remain stable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatUnit {
    pub id: UnitId,
    pub base_id: String,
    pub side: Side,
    pub class: UnitClass,
    pub tribe: Tribe,
    pub star: u8,
    pub skill_id: Option<String>,

    /// Deployment cell; units dash around visually but always fight from home.
    pub home: Cell,
    pub pos: Cell,

    pub max_hp: u32,
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub matk: u32,
    pub mdef: u32,
    pub range: u8,
    pub rage_max: u32,
    pub rage: u32,
    pub shield: u32,

    pub alive: bool,
    pub mods: UnitMods,
    pub statuses: StatusBoard,
}

impl CombatUnit {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current hp as a fraction of max, for targeting heuristics.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            0.0
        } else {
            self.hp as f64 / self.max_hp as f64
        }
    }

    /// Attack with the active buff applied, floored at 1.
    pub fn effective_atk(&self) -> u32 {
        (self.atk + self.statuses.atk_buff.active_value()).max(1)
    }

    /// Defense with the active buff applied. Armor break is subtracted at the
    /// mitigation site, not here.
    pub fn effective_def(&self) -> u32 {
        self.def + self.statuses.def_buff.active_value()
    }

    pub fn effective_matk(&self) -> u32 {
        self.matk.max(1)
    }

    pub fn effective_mdef(&self) -> u32 {
        self.mdef + self.statuses.mdef_buff.active_value()
    }

    /// Base evasion plus the active buff minus the active debuff, clamped to
    /// [0, EVASION_CAP].
    pub fn effective_evasion(&self) -> f64 {
        let raw = self.mods.evade_pct + self.statuses.evade_buff.active_value()
            - self.statuses.evade_debuff.active_value();
        raw.clamp(0.0, GameConfig::EVASION_CAP)
    }

    /// Chance an incoming attack connects: base accuracy minus evasion,
    /// clamped to [MIN_HIT_CHANCE, 1.0].
    pub fn hit_chance(&self) -> f64 {
        (GameConfig::BASE_ACCURACY - self.effective_evasion())
            .clamp(GameConfig::MIN_HIT_CHANCE, 1.0)
    }

    /// Whether the unit has banked enough rage to cast.
    pub fn rage_full(&self) -> bool {
        self.rage >= self.rage_max
    }

    /// Add rage, capped at the bar.
    pub fn gain_rage(&mut self, amount: u32) {
        self.rage = (self.rage + amount).min(self.rage_max);
    }

    /// Restore hp, capped at max. Returns the amount actually applied.
    pub fn restore_hp(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }

    /// Flip to the inert dead state.
    pub fn mark_dead(&mut self) {
        self.alive = false;
        self.hp = 0;
        self.shield = 0;
    }
}
