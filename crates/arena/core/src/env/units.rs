//! Read-only unit catalog contract.

use crate::state::{BaseStats, Tribe, UnitClass};

/// One catalog entry: identity, role, rarity, base stats, and skill binding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDef {
    pub id: String,
    pub name: String,
    pub tribe: Tribe,
    pub class: UnitClass,
    /// Rarity bracket 1-5, driving roster/shop odds.
    pub tier: u8,
    pub stats: BaseStats,
    /// Skill cast at full rage. None means the unit only ever basic-attacks.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_id: Option<String>,
}

/// Oracle over the unit catalog. The core never mutates it; unknown ids
/// resolve to `None` and the caller degrades gracefully.
pub trait UnitOracle: Send + Sync {
    fn unit_def(&self, id: &str) -> Option<&UnitDef>;

    /// Every catalog entry, for roster generation.
    fn all_units(&self) -> &[UnitDef];
}
