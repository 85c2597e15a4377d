use std::fmt;

use crate::config::GameConfig;

/// Unique identifier for a combat unit within one battle session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which half of the board a unit fights for.
///
/// `Left` is the player, `Right` the AI opponent. The distinction matters
/// beyond orientation: the right side is scaled by the AI difficulty profile
/// while the left receives team-wide augment bonuses.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// The opposing side.
    #[inline]
    pub const fn enemy(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Side::Left)
    }
}

/// Discrete board coordinate (row 0 at the top, column 0 at the far left).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells.
    pub fn manhattan(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) as u32 + self.col.abs_diff(other.col) as u32
    }

    /// True when the cell lies on the board at all.
    pub fn in_bounds(self) -> bool {
        self.row < GameConfig::ROWS && self.col < GameConfig::COLS
    }

    /// Steps from this cell to its side's frontline column.
    pub fn distance_to_frontline(self, side: Side) -> u32 {
        match side {
            Side::Left => (GameConfig::LEFT_COL_MAX.saturating_sub(self.col)) as u32,
            Side::Right => (self.col.saturating_sub(GameConfig::RIGHT_COL_MIN)) as u32,
        }
    }

    /// Steps from this cell to its side's backline column.
    pub fn distance_to_backline(self, side: Side) -> u32 {
        match side {
            Side::Left => self.col as u32,
            Side::Right => ((GameConfig::COLS - 1).saturating_sub(self.col)) as u32,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Combat role, driving targeting behavior and class synergies.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum UnitClass {
    Tanker,
    Fighter,
    Assassin,
    Archer,
    Mage,
    Support,
}

impl UnitClass {
    pub const COUNT: usize = 6;

    pub const fn all() -> [UnitClass; Self::COUNT] {
        [
            UnitClass::Tanker,
            UnitClass::Fighter,
            UnitClass::Assassin,
            UnitClass::Archer,
            UnitClass::Mage,
            UnitClass::Support,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Elemental tribe, driving tribe synergies and the counter cycle.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Tribe {
    Stone,
    Wind,
    Fire,
    Tide,
    Night,
    Spirit,
    Swarm,
}

impl Tribe {
    pub const COUNT: usize = 7;

    pub const fn all() -> [Tribe; Self::COUNT] {
        [
            Tribe::Stone,
            Tribe::Wind,
            Tribe::Fire,
            Tribe::Tide,
            Tribe::Night,
            Tribe::Spirit,
            Tribe::Swarm,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontline_distance_is_measured_toward_the_middle() {
        let left_front = Cell::new(2, 4);
        let left_back = Cell::new(2, 0);
        assert_eq!(left_front.distance_to_frontline(Side::Left), 0);
        assert_eq!(left_back.distance_to_frontline(Side::Left), 4);
        assert_eq!(left_back.distance_to_backline(Side::Left), 0);

        let right_front = Cell::new(0, 5);
        let right_back = Cell::new(0, 9);
        assert_eq!(right_front.distance_to_frontline(Side::Right), 0);
        assert_eq!(right_back.distance_to_frontline(Side::Right), 4);
        assert_eq!(right_back.distance_to_backline(Side::Right), 0);
    }

    #[test]
    fn manhattan_is_symmetric() {
        let a = Cell::new(1, 2);
        let b = Cell::new(4, 8);
        assert_eq!(a.manhattan(b), 9);
        assert_eq!(b.manhattan(a), 9);
    }
}
