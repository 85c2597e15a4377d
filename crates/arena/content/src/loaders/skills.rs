//! Skill library loader.
//!
//! Skill rows are parsed through a raw mirror whose `effect` and
//! `damage_type` are plain strings. Unknown tags fall back to the defaults
//! (plain single-target damage, physical), matching how the engine degrades
//! on missing data.

use std::path::Path;
use std::str::FromStr;

use arena_core::{DamageType, ScaleStat, SkillDef, SkillEffect, SkillHit};
use serde::{Deserialize, Serialize};

use super::{LoadResult, read_file};

/// One skill row as written in data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillRow {
    pub id: String,
    pub name: String,
    pub effect: String,
    pub damage_type: String,
    pub base: f64,
    pub scale: f64,
    pub scale_stat: String,
    pub shield_base: f64,
    pub shield_scale: f64,
    pub taunt_turns: u8,
    pub stun_chance: f64,
    pub stun_turns: u8,
    pub sleep_chance: f64,
    pub sleep_turns: u8,
    pub freeze_chance: f64,
    pub freeze_turns: u8,
    pub reflect_pct: f64,
    pub reflect_turns: u8,
    pub turns: u8,
    pub armor_buff: u32,
    pub mdef_buff: u32,
    pub atk_buff: u32,
    pub self_atk_buff: u32,
    pub evade_buff: f64,
    pub armor_break: u32,
    pub hit1: SkillHit,
    pub hit2: SkillHit,
    pub echo_base: f64,
    pub echo_scale: f64,
    pub max_hits: u8,
    pub max_targets: u8,
    pub splash_rate: f64,
    pub poison_turns: u8,
    pub poison_per_turn: u32,
    pub lifesteal: f64,
    pub rage_gain: u32,
    pub assist_rate: f64,
}

impl Default for SkillRow {
    fn default() -> Self {
        let base = SkillDef::default();
        Self {
            id: base.id,
            name: base.name,
            effect: String::new(),
            damage_type: String::new(),
            base: base.base,
            scale: base.scale,
            scale_stat: String::new(),
            shield_base: base.shield_base,
            shield_scale: base.shield_scale,
            taunt_turns: base.taunt_turns,
            stun_chance: base.stun_chance,
            stun_turns: base.stun_turns,
            sleep_chance: base.sleep_chance,
            sleep_turns: base.sleep_turns,
            freeze_chance: base.freeze_chance,
            freeze_turns: base.freeze_turns,
            reflect_pct: base.reflect_pct,
            reflect_turns: base.reflect_turns,
            turns: base.turns,
            armor_buff: base.armor_buff,
            mdef_buff: base.mdef_buff,
            atk_buff: base.atk_buff,
            self_atk_buff: base.self_atk_buff,
            evade_buff: base.evade_buff,
            armor_break: base.armor_break,
            hit1: base.hit1,
            hit2: base.hit2,
            echo_base: base.echo_base,
            echo_scale: base.echo_scale,
            max_hits: base.max_hits,
            max_targets: base.max_targets,
            splash_rate: base.splash_rate,
            poison_turns: base.poison_turns,
            poison_per_turn: base.poison_per_turn,
            lifesteal: base.lifesteal,
            rage_gain: base.rage_gain,
            assist_rate: base.assist_rate,
        }
    }
}

impl From<SkillRow> for SkillDef {
    fn from(row: SkillRow) -> Self {
        SkillDef {
            id: row.id,
            name: row.name,
            effect: SkillEffect::from_str(&row.effect).unwrap_or_default(),
            damage_type: DamageType::from_str(&row.damage_type).unwrap_or_default(),
            base: row.base,
            scale: row.scale,
            scale_stat: ScaleStat::from_str(&row.scale_stat).unwrap_or_default(),
            shield_base: row.shield_base,
            shield_scale: row.shield_scale,
            taunt_turns: row.taunt_turns,
            stun_chance: row.stun_chance,
            stun_turns: row.stun_turns,
            sleep_chance: row.sleep_chance,
            sleep_turns: row.sleep_turns,
            freeze_chance: row.freeze_chance,
            freeze_turns: row.freeze_turns,
            reflect_pct: row.reflect_pct,
            reflect_turns: row.reflect_turns,
            turns: row.turns,
            armor_buff: row.armor_buff,
            mdef_buff: row.mdef_buff,
            atk_buff: row.atk_buff,
            self_atk_buff: row.self_atk_buff,
            evade_buff: row.evade_buff,
            armor_break: row.armor_break,
            hit1: row.hit1,
            hit2: row.hit2,
            echo_base: row.echo_base,
            echo_scale: row.echo_scale,
            max_hits: row.max_hits,
            max_targets: row.max_targets,
            splash_rate: row.splash_rate,
            poison_turns: row.poison_turns,
            poison_per_turn: row.poison_per_turn,
            lifesteal: row.lifesteal,
            rage_gain: row.rage_gain,
            assist_rate: row.assist_rate,
        }
    }
}

/// Skill library structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillLibrary {
    pub skills: Vec<SkillRow>,
}

/// Loader for the skill library from RON files.
pub struct SkillLibraryLoader;

impl SkillLibraryLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<SkillDef>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<SkillDef>> {
        let library: SkillLibrary = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("failed to parse skill library: {e}"))?;
        Ok(library.skills.into_iter().map(SkillDef::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_sparse_skill_row() {
        let ron = r#"(
            skills: [
                (
                    id: "thorn_bark",
                    name: "Thorn Bark",
                    effect: "damage_shield_taunt",
                    base: 20.0,
                    scale: 0.5,
                    shield_base: 30.0,
                    taunt_turns: 2,
                ),
            ],
        )"#;
        let skills = SkillLibraryLoader::parse(ron).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].effect, SkillEffect::DamageShieldTaunt);
        assert_eq!(skills[0].damage_type, arena_core::DamageType::Physical);
        assert_eq!(skills[0].taunt_turns, 2);
        // Untouched columns keep their defaults.
        assert_eq!(skills[0].max_hits, 3);
    }

    #[test]
    fn unknown_effect_tags_degrade_to_single_burst() {
        let ron = r#"(
            skills: [
                (id: "odd_one", name: "Odd One", effect: "does_not_exist", damage_type: "magic"),
            ],
        )"#;
        let skills = SkillLibraryLoader::parse(ron).unwrap();
        assert_eq!(skills[0].effect, SkillEffect::SingleBurst);
        assert_eq!(skills[0].damage_type, arena_core::DamageType::Magic);
    }

    #[test]
    fn round_trips_a_library_matching_the_builtins() {
        let builtin = crate::builtin_skills();
        let rows: Vec<SkillRow> = builtin
            .iter()
            .map(|s| SkillRow {
                id: s.id.clone(),
                name: s.name.clone(),
                effect: s.effect.to_string(),
                damage_type: s.damage_type.to_string(),
                base: s.base,
                scale: s.scale,
                scale_stat: s.scale_stat.to_string(),
                shield_base: s.shield_base,
                shield_scale: s.shield_scale,
                taunt_turns: s.taunt_turns,
                stun_chance: s.stun_chance,
                stun_turns: s.stun_turns,
                sleep_chance: s.sleep_chance,
                sleep_turns: s.sleep_turns,
                freeze_chance: s.freeze_chance,
                freeze_turns: s.freeze_turns,
                reflect_pct: s.reflect_pct,
                reflect_turns: s.reflect_turns,
                turns: s.turns,
                armor_buff: s.armor_buff,
                mdef_buff: s.mdef_buff,
                atk_buff: s.atk_buff,
                self_atk_buff: s.self_atk_buff,
                evade_buff: s.evade_buff,
                armor_break: s.armor_break,
                hit1: s.hit1,
                hit2: s.hit2,
                echo_base: s.echo_base,
                echo_scale: s.echo_scale,
                max_hits: s.max_hits,
                max_targets: s.max_targets,
                splash_rate: s.splash_rate,
                poison_turns: s.poison_turns,
                poison_per_turn: s.poison_per_turn,
                lifesteal: s.lifesteal,
                rage_gain: s.rage_gain,
                assist_rate: s.assist_rate,
            })
            .collect();
        let ron = ron::to_string(&SkillLibrary { skills: rows }).unwrap();
        let parsed = SkillLibraryLoader::parse(&ron).unwrap();
        assert_eq!(parsed, builtin);
    }
}
