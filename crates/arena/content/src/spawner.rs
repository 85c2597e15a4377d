//! Enemy roster generation.
//!
//! Builds the right-side roster for a round: team size grows with the round
//! and the difficulty profile, unit tiers unlock every third round, stars
//! follow round-scaled chances, and positions land on the right half of the
//! board with frontline classes up front.

use arena_core::env::tables::deploy_cap;
use arena_core::{AiDifficulty, Cell, Dice, GameConfig, UnitClass, UnitDef, UnitOracle, UnitPlacement};

/// Share of the roster guaranteed to be tankers/fighters.
const FRONTLINE_RATIO: f64 = 0.4;

fn is_frontline(class: UnitClass) -> bool {
    matches!(class, UnitClass::Tanker | UnitClass::Fighter)
}

/// Roster size for a round: the deploy cap of the AI's estimated level plus
/// the profile's flat and growth bonuses.
pub fn enemy_team_size(round: u32, difficulty: AiDifficulty) -> u32 {
    let profile = difficulty.profile();
    let est_level = (1 + round / 2).clamp(1, 15);
    let base = deploy_cap(est_level) as i64;
    let growth = (round.saturating_sub(1) / profile.team_growth_every.max(1))
        .min(profile.team_growth_cap) as i64;
    (base + profile.team_size_bonus as i64 + growth).clamp(2, 15) as u32
}

/// Highest catalog tier the generator may pick at this round.
pub fn max_tier_for_round(round: u32) -> u8 {
    (1 + round / 3).clamp(1, 5) as u8
}

fn roll_star(round: u32, difficulty: AiDifficulty, dice: &mut Dice<'_>) -> u8 {
    let profile = difficulty.profile();
    if profile.max_star < 2 {
        return 1;
    }
    let two = ((round as f64 - 6.0) * 0.045 + profile.star2_bonus).clamp(0.0, 0.38);
    let three = if profile.max_star >= 3 {
        ((round as f64 - 11.0) * 0.018 + profile.star3_bonus).clamp(0.0, 0.08)
    } else {
        0.0
    };
    let roll = dice.unit();
    if roll < three {
        3
    } else if roll < three + two {
        2
    } else {
        1
    }
}

/// Free cell on the right half, preferring the class's natural band.
fn place(class: UnitClass, occupied: &mut Vec<Cell>, dice: &mut Dice<'_>) -> Option<Cell> {
    let (lo, hi) = match class {
        UnitClass::Tanker | UnitClass::Fighter => (GameConfig::RIGHT_COL_MIN, 6),
        UnitClass::Assassin => (6, 7),
        UnitClass::Support => (7, 8),
        UnitClass::Archer | UnitClass::Mage => (8, GameConfig::COLS - 1),
    };

    let band: Vec<Cell> = free_cells(lo, hi, occupied);
    let pool = if band.is_empty() {
        free_cells(GameConfig::RIGHT_COL_MIN, GameConfig::COLS - 1, occupied)
    } else {
        band
    };
    if pool.is_empty() {
        return None;
    }
    let cell = pool[dice.index(pool.len())];
    occupied.push(cell);
    Some(cell)
}

fn free_cells(col_lo: u8, col_hi: u8, occupied: &[Cell]) -> Vec<Cell> {
    let mut cells = Vec::new();
    for row in 0..GameConfig::ROWS {
        for col in col_lo..=col_hi {
            let cell = Cell::new(row, col);
            if !occupied.contains(&cell) {
                cells.push(cell);
            }
        }
    }
    cells
}

/// Generate the enemy roster for one round.
///
/// The returned placements feed straight into `start_combat`. An empty
/// catalog yields an empty roster, which setup then rejects.
pub fn generate_enemy_roster(
    units: &dyn UnitOracle,
    round: u32,
    difficulty: AiDifficulty,
    dice: &mut Dice<'_>,
) -> Vec<UnitPlacement> {
    let team_size = enemy_team_size(round, difficulty);
    let max_tier = max_tier_for_round(round);

    let mut pool: Vec<&UnitDef> = units
        .all_units()
        .iter()
        .filter(|u| u.tier <= max_tier)
        .collect();
    if pool.is_empty() {
        pool = units.all_units().iter().collect();
    }
    if pool.is_empty() {
        return Vec::new();
    }
    let front_pool: Vec<&UnitDef> = pool
        .iter()
        .copied()
        .filter(|u| is_frontline(u.class))
        .collect();

    let needed_front = (team_size as f64 * FRONTLINE_RATIO).ceil() as u32;
    let mut front_count = 0;
    let mut occupied = Vec::new();
    let mut roster = Vec::with_capacity(team_size as usize);

    for _ in 0..team_size {
        let pick = if front_count < needed_front && !front_pool.is_empty() {
            front_pool[dice.index(front_pool.len())]
        } else {
            pool[dice.index(pool.len())]
        };
        if is_frontline(pick.class) {
            front_count += 1;
        }

        let Some(cell) = place(pick.class, &mut occupied, dice) else {
            break;
        };
        let star = roll_star(round, difficulty, dice);
        roster.push(UnitPlacement {
            base_id: pick.id.clone(),
            star,
            cell,
            mods: Default::default(),
        });
    }

    roster
}
