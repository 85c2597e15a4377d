//! Built-in game data and loaders for the arena auto-battler.
//!
//! This crate houses the static catalogs the combat core consumes through its
//! oracle traits: the unit catalog, the skill library, and the synergy and
//! counter tables. [`ContentBundle`] packages them behind the oracle traits;
//! the optional `loaders` feature adds RON file loading on top of the
//! built-ins. Content is read-only data and never appears in combat state.
pub mod bundle;
pub mod catalog;
pub mod skills;
pub mod spawner;
pub mod synergies;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bundle::ContentBundle;
pub use catalog::builtin_units;
pub use skills::builtin_skills;
pub use spawner::generate_enemy_roster;
pub use synergies::{
    builtin_class_synergies, builtin_tribe_synergies, class_counters, tribe_counter,
};

#[cfg(feature = "loaders")]
pub use loaders::{SkillLibraryLoader, SynergyTableLoader, UnitCatalogLoader};
