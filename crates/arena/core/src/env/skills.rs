//! Read-only skill library contract.
//!
//! A skill row is a flat bag of parameters; which ones matter depends on the
//! effect tag. Unused fields stay at their defaults, mirroring sparse columns
//! in the source data. Lookups return `None` for unknown ids and execution
//! falls back to a basic attack.

use crate::combat::damage::DamageType;
use crate::combat::skill::SkillEffect;

/// Which caster stat a skill's damage scales from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ScaleStat {
    /// Effective attack (buffs included).
    #[default]
    Atk,
    /// Effective magic attack.
    Matk,
    /// Raw defense, for guard-style skills.
    Def,
    /// Maximum hp, for bruiser skills.
    MaxHp,
}

/// One strike of a multi-hit skill.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillHit {
    pub base: f64,
    pub scale: f64,
}

/// One skill library entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillDef {
    pub id: String,
    pub name: String,
    pub effect: SkillEffect,
    pub damage_type: DamageType,

    // Damage formula: base + scale_stat * scale.
    pub base: f64,
    pub scale: f64,
    pub scale_stat: ScaleStat,

    // Shields.
    pub shield_base: f64,
    pub shield_scale: f64,

    // Control chances and durations.
    pub taunt_turns: u8,
    pub stun_chance: f64,
    pub stun_turns: u8,
    pub sleep_chance: f64,
    pub sleep_turns: u8,
    pub freeze_chance: f64,
    pub freeze_turns: u8,

    // Reflect.
    pub reflect_pct: f64,
    pub reflect_turns: u8,

    // Stat buffs/debuffs; `turns` is the shared duration.
    pub turns: u8,
    pub armor_buff: u32,
    pub mdef_buff: u32,
    pub atk_buff: u32,
    pub self_atk_buff: u32,
    pub evade_buff: f64,
    pub armor_break: u32,

    // Multi-hit and area parameters.
    pub hit1: SkillHit,
    pub hit2: SkillHit,
    pub echo_base: f64,
    pub echo_scale: f64,
    pub max_hits: u8,
    pub max_targets: u8,
    pub splash_rate: f64,

    // Damage over time.
    pub poison_turns: u8,
    pub poison_per_turn: u32,

    // Sustain and support.
    pub lifesteal: f64,
    pub rage_gain: u32,
    pub assist_rate: f64,
}

impl Default for SkillDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            effect: SkillEffect::default(),
            damage_type: DamageType::default(),
            base: 0.0,
            scale: 0.0,
            scale_stat: ScaleStat::default(),
            shield_base: 0.0,
            shield_scale: 0.0,
            taunt_turns: 0,
            stun_chance: 0.0,
            stun_turns: 0,
            sleep_chance: 0.0,
            sleep_turns: 0,
            freeze_chance: 0.0,
            freeze_turns: 0,
            reflect_pct: 0.0,
            reflect_turns: 0,
            turns: 0,
            armor_buff: 0,
            mdef_buff: 0,
            atk_buff: 0,
            self_atk_buff: 0,
            evade_buff: 0.0,
            armor_break: 0,
            hit1: SkillHit::default(),
            hit2: SkillHit::default(),
            echo_base: 0.0,
            echo_scale: 0.0,
            max_hits: 3,
            max_targets: 3,
            splash_rate: 0.5,
            poison_turns: 0,
            poison_per_turn: 0,
            lifesteal: 0.0,
            rage_gain: 0,
            assist_rate: 0.0,
        }
    }
}

/// Oracle over the skill library.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: &str) -> Option<&SkillDef>;
}
