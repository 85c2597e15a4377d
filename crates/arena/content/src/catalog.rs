//! Built-in unit catalog.
//!
//! Forty-odd beasts spread across the six classes and seven tribes, tiers 1
//! through 5. Stats are the values units enter the shop with; star scaling
//! and side multipliers happen in the core at combat setup.

use arena_core::{BaseStats, Tribe, UnitClass, UnitDef};

#[allow(clippy::too_many_arguments)]
fn unit(
    id: &str,
    name: &str,
    tribe: Tribe,
    class: UnitClass,
    tier: u8,
    hp: u32,
    atk: u32,
    def: u32,
    matk: u32,
    mdef: u32,
    range: u8,
    rage_max: u32,
    skill_id: &str,
) -> UnitDef {
    UnitDef {
        id: id.into(),
        name: name.into(),
        tribe,
        class,
        tier,
        stats: BaseStats {
            hp,
            atk,
            def,
            matk,
            mdef,
            range,
            rage_max,
        },
        skill_id: Some(skill_id.into()),
    }
}

/// The full built-in catalog.
pub fn builtin_units() -> Vec<UnitDef> {
    use Tribe::*;
    use UnitClass::*;

    vec![
        // Tankers hold the frontline.
        unit("bear_ancient", "Ancient Bear", Stone, Tanker, 1, 340, 42, 30, 10, 24, 1, 4, "thorn_bark"),
        unit("rhino_quake", "Quake Rhino", Stone, Tanker, 2, 380, 48, 33, 10, 24, 1, 4, "earth_ram"),
        unit("turtle_mire", "Mire Turtle", Tide, Tanker, 3, 410, 50, 36, 16, 30, 1, 5, "shell_reflect"),
        unit("buffalo_mist", "Mist Buffalo", Wind, Tanker, 4, 450, 55, 38, 18, 31, 1, 4, "mist_guard"),
        unit("ant_guard", "Guard Ant", Swarm, Tanker, 2, 420, 45, 45, 10, 30, 1, 4, "ant_shield_wall"),
        // Assassins dive the backline.
        unit("panther_void", "Void Panther", Night, Assassin, 1, 240, 69, 14, 14, 12, 1, 2, "void_execute"),
        unit("fox_flame", "Flame Fox", Fire, Assassin, 2, 255, 72, 15, 18, 13, 1, 2, "flame_combo"),
        unit("bat_blood", "Blood Bat", Night, Assassin, 3, 275, 78, 16, 20, 15, 1, 3, "blood_bite"),
        unit("lynx_echo", "Echo Lynx", Wind, Assassin, 4, 295, 84, 18, 22, 16, 1, 3, "echo_slash"),
        unit("mosquito_toxic", "Toxic Mosquito", Swarm, Assassin, 2, 240, 75, 14, 15, 12, 1, 3, "mosquito_drain"),
        unit("mantis_blade", "Blade Mantis", Swarm, Assassin, 3, 310, 88, 20, 15, 18, 1, 3, "mantis_slice"),
        // Archers shoot down their row.
        unit("eagle_marksman", "Marksman Eagle", Wind, Archer, 1, 230, 62, 12, 10, 11, 4, 3, "cross_arrow"),
        unit("monkey_spear", "Spear Monkey", Wind, Archer, 2, 250, 68, 12, 12, 12, 4, 3, "row_pierce"),
        unit("owl_nightshot", "Nightshot Owl", Night, Archer, 3, 265, 74, 13, 14, 13, 4, 3, "sleep_shot"),
        unit("bee_goldbow", "Fire Bee", Fire, Archer, 4, 280, 82, 14, 16, 14, 4, 3, "armor_break_arrow"),
        unit("wasp_sting", "Sting Wasp", Swarm, Archer, 2, 260, 65, 15, 12, 14, 4, 3, "poison_sting"),
        // Mages burn whole columns and boxes.
        unit("dragonfly_ice", "Frost Dragonfly", Tide, Mage, 1, 215, 16, 10, 74, 20, 4, 5, "ice_column"),
        unit("worm_ice", "Ice Worm", Tide, Mage, 2, 230, 18, 10, 80, 21, 4, 5, "snow_burst"),
        unit("serpent_storm", "Storm Serpent", Wind, Mage, 3, 245, 20, 11, 88, 22, 4, 5, "storm_column"),
        unit("spider_spore", "Spore Spider", Swarm, Mage, 4, 260, 22, 11, 96, 23, 4, 5, "spore_rain"),
        unit("worm_queen", "Verdant Worm", Swarm, Mage, 3, 280, 20, 12, 85, 22, 4, 2, "worm_evolve"),
        unit("bug_plague", "Plague Beetle", Swarm, Mage, 4, 260, 22, 13, 92, 24, 4, 4, "global_poison"),
        // Supports keep everyone standing.
        unit("deer_song", "Song Deer", Spirit, Support, 1, 245, 22, 14, 62, 25, 3, 4, "life_song"),
        unit("butterfly_mirror", "Mirror Butterfly", Spirit, Support, 2, 260, 24, 15, 68, 26, 3, 4, "mirror_shield"),
        unit("parrot_roar", "Roaring Parrot", Wind, Support, 3, 280, 26, 16, 72, 27, 3, 4, "rage_chant"),
        unit("qilin_breeze", "Breeze Qilin", Spirit, Support, 4, 300, 28, 17, 82, 28, 3, 5, "wind_path"),
        // Fighters trade blows up close.
        unit("tiger_fang", "Fang Tiger", Fire, Fighter, 1, 305, 58, 20, 14, 16, 1, 3, "cleave_fang"),
        unit("wolf_alpha", "Alpha Wolf", Night, Fighter, 2, 325, 64, 21, 16, 17, 1, 3, "alpha_howl"),
        unit("hippo_maul", "Maul Hippo", Tide, Fighter, 3, 350, 70, 23, 18, 18, 1, 3, "mud_slam"),
        unit("beetle_drill", "Drill Beetle", Swarm, Fighter, 4, 370, 76, 24, 20, 19, 1, 3, "armor_drill"),
        unit("scorpion_king", "Scorpion King", Swarm, Fighter, 4, 440, 82, 32, 20, 25, 1, 3, "scorpion_venom"),
        unit("lion_general", "War Lion", Fire, Fighter, 5, 550, 95, 40, 30, 35, 1, 4, "lion_roar_stun"),
    ]
}
