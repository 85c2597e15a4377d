//! Content loaders for reading catalogs from RON files.
//!
//! Loaders replace individual [`crate::ContentBundle`] catalogs with
//! data-driven tables. Skill rows carry their effect and damage type as free
//! text; tags that fail to parse degrade to the plain single-target damage
//! profile instead of failing the load, so a typo in one row never takes the
//! whole library down.

mod skills;
mod synergies;
mod units;

pub use skills::SkillLibraryLoader;
pub use synergies::SynergyTableLoader;
pub use units::UnitCatalogLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
}
