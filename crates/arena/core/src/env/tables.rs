//! Economy-facing balance tables.
//!
//! Tier odds govern which rarity bracket a shop or roster roll lands in at a
//! given player level. Rows are probability distributions over tiers 1-5.

use super::rng::Dice;

/// Levels with distinct tier odds; higher levels reuse the last row.
pub const TIER_ODDS_LEVELS: usize = 25;

/// Tier odds per level, rows indexed by `level - 1`.
pub const TIER_ODDS_BY_LEVEL: [[f64; 5]; TIER_ODDS_LEVELS] = [
    [1.0, 0.0, 0.0, 0.0, 0.0],
    [0.8, 0.2, 0.0, 0.0, 0.0],
    [0.65, 0.3, 0.05, 0.0, 0.0],
    [0.5, 0.35, 0.13, 0.02, 0.0],
    [0.35, 0.35, 0.22, 0.07, 0.01],
    [0.25, 0.3, 0.28, 0.14, 0.03],
    [0.18, 0.24, 0.3, 0.2, 0.08],
    [0.12, 0.18, 0.27, 0.26, 0.17],
    [0.08, 0.12, 0.2, 0.3, 0.3],
    [0.05, 0.10, 0.20, 0.35, 0.30],
    [0.01, 0.05, 0.15, 0.30, 0.49],
    [0.0, 0.0, 0.10, 0.30, 0.60],
    [0.0, 0.0, 0.08, 0.28, 0.64],
    [0.0, 0.0, 0.06, 0.26, 0.68],
    [0.0, 0.0, 0.05, 0.24, 0.71],
    [0.0, 0.0, 0.04, 0.22, 0.74],
    [0.0, 0.0, 0.03, 0.20, 0.77],
    [0.0, 0.0, 0.03, 0.18, 0.79],
    [0.0, 0.0, 0.02, 0.16, 0.82],
    [0.0, 0.0, 0.02, 0.14, 0.84],
    [0.0, 0.0, 0.02, 0.12, 0.86],
    [0.0, 0.0, 0.02, 0.10, 0.88],
    [0.0, 0.0, 0.02, 0.09, 0.89],
    [0.0, 0.0, 0.02, 0.08, 0.90],
    [0.0, 0.0, 0.02, 0.08, 0.90],
];

/// Tier odds row for a level, clamped into the table.
pub fn tier_odds(level: u32) -> &'static [f64; 5] {
    let idx = (level.clamp(1, TIER_ODDS_LEVELS as u32) - 1) as usize;
    &TIER_ODDS_BY_LEVEL[idx]
}

/// Roll a tier (1-5) for the given level.
pub fn roll_tier(level: u32, dice: &mut Dice<'_>) -> u8 {
    (dice.weighted(tier_odds(level)) + 1) as u8
}

/// Units a player may deploy at a level. Starts at 3 so early rounds still
/// allow tactical swaps.
pub fn deploy_cap(level: u32) -> u32 {
    (level + 2).clamp(3, 12)
}
