//! Combat stat derivation.
//!
//! Stats flow one way at combat start:
//!
//! ```text
//! catalog base stats
//!     -> star scaling (hp/atk/def/matk/mdef)
//!     -> side scaling (AI profile on the right, team bonuses on the left)
//!     -> synergy application (see crate::synergy)
//! ```
//!
//! Nothing here is re-run mid-battle; in-combat variation comes from the
//! status channels.

use crate::env::AiProfile;
use crate::state::{BaseStats, Side};

/// Team-wide percentage bonuses from augments, applied to the player side
/// before synergies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamBonuses {
    pub atk_pct: f64,
    pub matk_pct: f64,
    pub hp_pct: f64,
}

/// Star level multiplier for hp/atk/def/matk/mdef. Range and the rage bar are
/// never scaled.
pub fn star_multiplier(star: u8) -> f64 {
    match star {
        0 | 1 => 1.0,
        2 => 1.6,
        _ => 2.5,
    }
}

fn scale(value: u32, mult: f64) -> u32 {
    (value as f64 * mult).round() as u32
}

/// Apply star scaling to a catalog stat block.
pub fn scaled_base_stats(base: &BaseStats, star: u8) -> BaseStats {
    let mult = star_multiplier(star);
    BaseStats {
        hp: scale(base.hp, mult),
        atk: scale(base.atk, mult),
        def: scale(base.def, mult),
        matk: scale(base.matk, mult),
        mdef: scale(base.mdef, mult),
        range: base.range,
        rage_max: base.rage_max,
    }
}

/// Full derivation from catalog stats to the numbers a unit enters combat
/// with, before synergies.
pub fn derive_stats(
    base: &BaseStats,
    star: u8,
    side: Side,
    profile: &AiProfile,
    team: &TeamBonuses,
) -> BaseStats {
    let scaled = scaled_base_stats(base, star);
    match side {
        Side::Right => BaseStats {
            hp: scale(scaled.hp, profile.hp_mult),
            atk: scale(scaled.atk, profile.atk_mult),
            matk: scale(scaled.matk, profile.matk_mult),
            ..scaled
        },
        Side::Left => BaseStats {
            hp: scale(scaled.hp, 1.0 + team.hp_pct),
            atk: scale(scaled.atk, 1.0 + team.atk_pct),
            matk: scale(scaled.matk, 1.0 + team.matk_pct),
            ..scaled
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::AiDifficulty;

    const BASE: BaseStats = BaseStats {
        hp: 340,
        atk: 42,
        def: 30,
        matk: 10,
        mdef: 24,
        range: 1,
        rage_max: 4,
    };

    #[test]
    fn star_scaling_leaves_range_and_rage_alone() {
        let two = scaled_base_stats(&BASE, 2);
        assert_eq!(two.hp, 544);
        assert_eq!(two.atk, 67);
        assert_eq!(two.range, BASE.range);
        assert_eq!(two.rage_max, BASE.rage_max);

        let three = scaled_base_stats(&BASE, 3);
        assert_eq!(three.hp, 850);
        assert_eq!(three.def, 75);
    }

    #[test]
    fn right_side_takes_the_difficulty_multipliers() {
        let profile = AiDifficulty::Easy.profile();
        let derived = derive_stats(&BASE, 1, Side::Right, profile, &TeamBonuses::default());
        assert_eq!(derived.hp, (340.0_f64 * 0.84).round() as u32);
        assert_eq!(derived.atk, (42.0_f64 * 0.82).round() as u32);
        assert_eq!(derived.def, BASE.def);
    }

    #[test]
    fn left_side_takes_team_percentage_bonuses() {
        let team = TeamBonuses {
            atk_pct: 0.10,
            matk_pct: 0.0,
            hp_pct: 0.05,
        };
        let profile = AiDifficulty::Hard.profile();
        let derived = derive_stats(&BASE, 1, Side::Left, profile, &team);
        assert_eq!(derived.hp, 357);
        assert_eq!(derived.atk, 46);
        assert_eq!(derived.matk, BASE.matk);
    }

    #[test]
    fn missing_stats_default_to_zero_and_stay_there() {
        let derived = derive_stats(
            &BaseStats::default(),
            3,
            Side::Right,
            AiDifficulty::Hard.profile(),
            &TeamBonuses::default(),
        );
        assert_eq!(derived.hp, 0);
        assert_eq!(derived.atk, 0);
    }
}
