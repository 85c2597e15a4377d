//! Traits describing read-only game data.
//!
//! Oracles expose the unit catalog, skill library, synergy tables, and the
//! random source. The [`Env`] aggregate bundles them so the engine can reach
//! everything it needs without hard coupling to concrete implementations.

mod ai;
mod rng;
mod skills;
mod synergies;
pub mod tables;
mod units;

pub use ai::{AiDifficulty, AiProfile};
pub use rng::{Dice, PcgRng, RngOracle, compute_seed};
pub use skills::{ScaleStat, SkillDef, SkillHit, SkillOracle};
pub use synergies::SynergyOracle;
pub use units::{UnitDef, UnitOracle};

/// Aggregates the read-only oracles required by the engine.
///
/// Plain shared references: the aggregate is `Copy` and freely passed down
/// the call tree for the duration of one step.
#[derive(Clone, Copy)]
pub struct Env<'a> {
    pub units: &'a dyn UnitOracle,
    pub skills: &'a dyn SkillOracle,
    pub synergies: &'a dyn SynergyOracle,
    pub rng: &'a dyn RngOracle,
}

impl<'a> Env<'a> {
    pub fn new(
        units: &'a dyn UnitOracle,
        skills: &'a dyn SkillOracle,
        synergies: &'a dyn SynergyOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            units,
            skills,
            synergies,
            rng,
        }
    }
}
