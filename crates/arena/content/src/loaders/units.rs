//! Unit catalog loader.

use std::path::Path;

use arena_core::UnitDef;
use serde::{Deserialize, Serialize};

use super::{LoadResult, read_file};

/// Unit catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitCatalog {
    pub units: Vec<UnitDef>,
}

/// Loader for the unit catalog from RON files.
pub struct UnitCatalogLoader;

impl UnitCatalogLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<UnitDef>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<UnitDef>> {
        let catalog: UnitCatalog =
            ron::from_str(content).map_err(|e| anyhow::anyhow!("failed to parse unit catalog: {e}"))?;
        Ok(catalog.units)
    }
}
