//! Built-in skill library.
//!
//! One row per skill id referenced by the catalog. Each row only fills the
//! parameters its effect reads; everything else stays at the defaults,
//! mirroring the sparse columns of the source data.

use arena_core::{DamageType, ScaleStat, SkillDef, SkillEffect, SkillHit};

fn skill(id: &str, name: &str, effect: SkillEffect, fill: impl FnOnce(&mut SkillDef)) -> SkillDef {
    let mut def = SkillDef {
        id: id.into(),
        name: name.into(),
        effect,
        ..Default::default()
    };
    fill(&mut def);
    def
}

/// The full built-in skill library.
pub fn builtin_skills() -> Vec<SkillDef> {
    vec![
        // ----- tanker kit -----
        skill("thorn_bark", "Thorn Bark", SkillEffect::DamageShieldTaunt, |s| {
            s.base = 20.0;
            s.scale = 0.5;
            s.shield_base = 30.0;
            s.taunt_turns = 2;
        }),
        skill("earth_ram", "Earth Ram", SkillEffect::DamageStun, |s| {
            s.base = 30.0;
            s.scale = 0.9;
            s.stun_chance = 0.55;
            s.stun_turns = 1;
        }),
        skill("shell_reflect", "Shell Ward", SkillEffect::DamageShieldReflect, |s| {
            s.base = 25.0;
            s.scale = 0.6;
            s.shield_base = 40.0;
            s.reflect_pct = 0.5;
            s.reflect_turns = 2;
        }),
        skill("mist_guard", "Mist Guard", SkillEffect::AllyRowDefBuff, |s| {
            s.turns = 2;
            s.armor_buff = 18;
            s.mdef_buff = 14;
        }),
        skill("ant_shield_wall", "Shield Wall", SkillEffect::DamageShieldTaunt, |s| {
            s.base = 15.0;
            s.scale = 0.4;
            s.shield_base = 55.0;
            s.taunt_turns = 1;
        }),
        // ----- assassin kit -----
        skill("void_execute", "Void Execute", SkillEffect::SingleBurst, |s| {
            s.base = 35.0;
            s.scale = 1.35;
        }),
        skill("flame_combo", "Flame Combo", SkillEffect::DoubleHit, |s| {
            s.hit1 = SkillHit {
                base: 12.0,
                scale: 0.75,
            };
            s.hit2 = SkillHit {
                base: 12.0,
                scale: 0.95,
            };
        }),
        skill("blood_bite", "Blood Bite", SkillEffect::SingleBurstLifesteal, |s| {
            s.base = 28.0;
            s.scale = 1.1;
            s.lifesteal = 0.6;
        }),
        skill("echo_slash", "Echo Slash", SkillEffect::SingleDelayedEcho, |s| {
            s.base = 24.0;
            s.scale = 1.0;
            s.echo_base = 10.0;
            s.echo_scale = 0.6;
        }),
        skill("mosquito_drain", "Drain Sting", SkillEffect::SingleBurstLifesteal, |s| {
            s.base = 22.0;
            s.scale = 1.0;
            s.lifesteal = 0.8;
        }),
        skill("mantis_slice", "Mantis Slice", SkillEffect::TrueSingle, |s| {
            s.base = 30.0;
            s.scale = 0.9;
            s.damage_type = DamageType::True;
        }),
        // ----- archer kit -----
        skill("cross_arrow", "Cross Arrow", SkillEffect::Cross5, |s| {
            s.base = 18.0;
            s.scale = 0.85;
        }),
        skill("row_pierce", "Row Pierce", SkillEffect::RowMulti, |s| {
            s.base = 16.0;
            s.scale = 0.8;
            s.max_hits = 3;
        }),
        skill("sleep_shot", "Sleep Shot", SkillEffect::SingleSleep, |s| {
            s.base = 26.0;
            s.scale = 1.0;
            s.sleep_chance = 0.5;
            s.sleep_turns = 1;
        }),
        skill("armor_break_arrow", "Sunder Arrow", SkillEffect::SingleArmorBreak, |s| {
            s.base = 24.0;
            s.scale = 1.0;
            s.turns = 2;
            s.armor_break = 14;
        }),
        skill("poison_sting", "Long Sting", SkillEffect::FarthestSnipe, |s| {
            s.base = 20.0;
            s.scale = 0.9;
            s.max_targets = 2;
        }),
        // ----- mage kit -----
        skill("ice_column", "Ice Column", SkillEffect::ColumnFreeze, |s| {
            s.base = 22.0;
            s.scale = 0.8;
            s.scale_stat = ScaleStat::Matk;
            s.damage_type = DamageType::Magic;
            s.freeze_chance = 0.35;
            s.freeze_turns = 1;
        }),
        skill("snow_burst", "Snow Burst", SkillEffect::AoeCircle, |s| {
            s.base = 20.0;
            s.scale = 0.75;
            s.scale_stat = ScaleStat::Matk;
            s.damage_type = DamageType::Magic;
        }),
        skill("storm_column", "Storm Column", SkillEffect::ColumnPlusSplash, |s| {
            s.base = 24.0;
            s.scale = 0.85;
            s.scale_stat = ScaleStat::Matk;
            s.damage_type = DamageType::Magic;
            s.splash_rate = 0.5;
        }),
        skill("spore_rain", "Spore Rain", SkillEffect::ScatterVolley, |s| {
            s.base = 18.0;
            s.scale = 0.7;
            s.scale_stat = ScaleStat::Matk;
            s.damage_type = DamageType::Magic;
            s.max_targets = 3;
        }),
        skill("worm_evolve", "Verdant Surge", SkillEffect::SingleBurst, |s| {
            s.base = 40.0;
            s.scale = 1.2;
            s.scale_stat = ScaleStat::Matk;
            s.damage_type = DamageType::Magic;
        }),
        skill("global_poison", "Plague Cloud", SkillEffect::AoePoison, |s| {
            s.base = 14.0;
            s.scale = 0.55;
            s.scale_stat = ScaleStat::Matk;
            s.damage_type = DamageType::Magic;
            s.poison_turns = 2;
            s.poison_per_turn = 10;
        }),
        // ----- support kit -----
        skill("life_song", "Life Song", SkillEffect::DualHeal, |s| {
            s.base = 30.0;
            s.scale = 0.6;
            s.scale_stat = ScaleStat::Matk;
        }),
        skill("mirror_shield", "Mirror Shield", SkillEffect::ShieldCleanse, |s| {
            s.shield_base = 35.0;
            s.shield_scale = 0.5;
        }),
        skill("rage_chant", "Rage Chant", SkillEffect::TeamRage, |s| {
            s.rage_gain = 1;
            s.max_targets = 3;
        }),
        skill("wind_path", "Wind Path", SkillEffect::ColumnBless, |s| {
            s.turns = 2;
            s.atk_buff = 12;
            s.evade_buff = 0.1;
        }),
        // ----- fighter kit -----
        skill("cleave_fang", "Cleave Fang", SkillEffect::RowCleave, |s| {
            s.base = 20.0;
            s.scale = 0.85;
            s.turns = 2;
            s.armor_break = 8;
        }),
        skill("alpha_howl", "Alpha Howl", SkillEffect::SelfAtkAndAssist, |s| {
            s.base = 22.0;
            s.scale = 0.9;
            s.turns = 2;
            s.self_atk_buff = 10;
            s.assist_rate = 0.7;
        }),
        skill("mud_slam", "Mud Slam", SkillEffect::ConeSmash, |s| {
            s.base = 24.0;
            s.scale = 0.8;
        }),
        skill("armor_drill", "Armor Drill", SkillEffect::SingleArmorBreak, |s| {
            s.base = 28.0;
            s.scale = 1.0;
            s.turns = 2;
            s.armor_break = 20;
        }),
        skill("scorpion_venom", "Scorpion Venom", SkillEffect::AoePoison, |s| {
            s.base = 18.0;
            s.scale = 0.7;
            s.poison_turns = 2;
            s.poison_per_turn = 12;
        }),
        skill("lion_roar_stun", "Royal Roar", SkillEffect::DamageStun, |s| {
            s.base = 45.0;
            s.scale = 1.0;
            s.stun_chance = 0.65;
            s.stun_turns = 1;
        }),
    ]
}
