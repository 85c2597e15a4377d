//! Built-in synergy and counter tables.
//!
//! Every class and tribe has three tiers at 2/4/6 fielded units. The counter
//! tables form one elemental cycle per triad plus the class-advantage list;
//! Swarm sits outside the cycles and counters nothing.

use arena_core::{SynergyBonus, SynergyDef, Tribe, UnitClass};

fn def3(thresholds: [u32; 3], bonuses: [SynergyBonus; 3]) -> SynergyDef {
    SynergyDef {
        thresholds: thresholds.to_vec(),
        bonuses: bonuses.to_vec(),
    }
}

/// Class synergy table, keyed by [`UnitClass`].
pub fn builtin_class_synergies() -> Vec<(UnitClass, SynergyDef)> {
    vec![
        (
            UnitClass::Tanker,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        def_flat: 8,
                        mdef_flat: 6,
                        ..Default::default()
                    },
                    SynergyBonus {
                        def_flat: 16,
                        mdef_flat: 12,
                        ..Default::default()
                    },
                    SynergyBonus {
                        def_flat: 28,
                        mdef_flat: 20,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            UnitClass::Assassin,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        atk_pct: 0.08,
                        ..Default::default()
                    },
                    SynergyBonus {
                        atk_pct: 0.18,
                        ..Default::default()
                    },
                    SynergyBonus {
                        atk_pct: 0.32,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            UnitClass::Archer,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        atk_pct: 0.10,
                        ..Default::default()
                    },
                    SynergyBonus {
                        atk_pct: 0.22,
                        ..Default::default()
                    },
                    SynergyBonus {
                        atk_pct: 0.36,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            UnitClass::Mage,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        matk_pct: 0.10,
                        ..Default::default()
                    },
                    SynergyBonus {
                        matk_pct: 0.22,
                        ..Default::default()
                    },
                    SynergyBonus {
                        matk_pct: 0.36,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            UnitClass::Support,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        heal_pct: 0.12,
                        ..Default::default()
                    },
                    SynergyBonus {
                        heal_pct: 0.25,
                        ..Default::default()
                    },
                    SynergyBonus {
                        heal_pct: 0.40,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            UnitClass::Fighter,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        hp_pct: 0.08,
                        atk_pct: 0.06,
                        ..Default::default()
                    },
                    SynergyBonus {
                        hp_pct: 0.16,
                        atk_pct: 0.14,
                        ..Default::default()
                    },
                    SynergyBonus {
                        hp_pct: 0.30,
                        atk_pct: 0.24,
                        ..Default::default()
                    },
                ],
            ),
        ),
    ]
}

/// Tribe synergy table, keyed by [`Tribe`].
pub fn builtin_tribe_synergies() -> Vec<(Tribe, SynergyDef)> {
    vec![
        (
            Tribe::Stone,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        shield_start: 18,
                        ..Default::default()
                    },
                    SynergyBonus {
                        shield_start: 40,
                        ..Default::default()
                    },
                    SynergyBonus {
                        shield_start: 72,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            Tribe::Wind,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        atk_pct: 0.06,
                        matk_pct: 0.06,
                        ..Default::default()
                    },
                    SynergyBonus {
                        atk_pct: 0.14,
                        matk_pct: 0.14,
                        ..Default::default()
                    },
                    SynergyBonus {
                        atk_pct: 0.24,
                        matk_pct: 0.24,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            Tribe::Fire,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        burn_on_hit: 6,
                        ..Default::default()
                    },
                    SynergyBonus {
                        burn_on_hit: 12,
                        ..Default::default()
                    },
                    SynergyBonus {
                        burn_on_hit: 20,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            Tribe::Tide,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        mdef_flat: 6,
                        heal_pct: 0.06,
                        ..Default::default()
                    },
                    SynergyBonus {
                        mdef_flat: 14,
                        heal_pct: 0.14,
                        ..Default::default()
                    },
                    SynergyBonus {
                        mdef_flat: 24,
                        heal_pct: 0.24,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            Tribe::Night,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        crit_pct: 0.08,
                        ..Default::default()
                    },
                    SynergyBonus {
                        crit_pct: 0.18,
                        ..Default::default()
                    },
                    SynergyBonus {
                        crit_pct: 0.30,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            Tribe::Spirit,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        starting_rage: 1,
                        ..Default::default()
                    },
                    SynergyBonus {
                        starting_rage: 1,
                        heal_pct: 0.12,
                        ..Default::default()
                    },
                    SynergyBonus {
                        starting_rage: 2,
                        heal_pct: 0.24,
                        ..Default::default()
                    },
                ],
            ),
        ),
        (
            Tribe::Swarm,
            def3(
                [2, 4, 6],
                [
                    SynergyBonus {
                        poison_on_hit: 8,
                        ..Default::default()
                    },
                    SynergyBonus {
                        poison_on_hit: 14,
                        ..Default::default()
                    },
                    SynergyBonus {
                        poison_on_hit: 22,
                        ..Default::default()
                    },
                ],
            ),
        ),
    ]
}

/// The tribe this one counters for +20% damage, if any.
pub fn tribe_counter(tribe: Tribe) -> Option<Tribe> {
    match tribe {
        Tribe::Fire => Some(Tribe::Spirit),
        Tribe::Spirit => Some(Tribe::Tide),
        Tribe::Tide => Some(Tribe::Fire),
        Tribe::Stone => Some(Tribe::Wind),
        Tribe::Wind => Some(Tribe::Night),
        Tribe::Night => Some(Tribe::Stone),
        Tribe::Swarm => None,
    }
}

/// True when the attacker's class has the advantage over the defender's.
pub fn class_counters(attacker: UnitClass, defender: UnitClass) -> bool {
    matches!(
        (attacker, defender),
        (UnitClass::Assassin, UnitClass::Mage)
            | (UnitClass::Assassin, UnitClass::Archer)
            | (UnitClass::Archer, UnitClass::Mage)
            | (UnitClass::Fighter, UnitClass::Assassin)
    )
}
