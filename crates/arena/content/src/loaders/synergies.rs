//! Synergy table loader.

use std::collections::HashMap;
use std::path::Path;

use arena_core::{SynergyDef, Tribe, UnitClass};
use serde::{Deserialize, Serialize};

use super::{LoadResult, read_file};

/// Synergy tables structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynergyTables {
    pub classes: HashMap<UnitClass, SynergyDef>,
    pub tribes: HashMap<Tribe, SynergyDef>,
}

/// Loader for class and tribe synergy tables from RON files.
pub struct SynergyTableLoader;

impl SynergyTableLoader {
    pub fn load(path: &Path) -> LoadResult<(Vec<(UnitClass, SynergyDef)>, Vec<(Tribe, SynergyDef)>)> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(
        content: &str,
    ) -> LoadResult<(Vec<(UnitClass, SynergyDef)>, Vec<(Tribe, SynergyDef)>)> {
        let tables: SynergyTables = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("failed to parse synergy tables: {e}"))?;
        Ok((
            tables.classes.into_iter().collect(),
            tables.tribes.into_iter().collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_bonus_rows() {
        let ron = r#"(
            classes: {
                tanker: (
                    thresholds: [2, 4],
                    bonuses: [
                        (def_flat: 8, mdef_flat: 6),
                        (def_flat: 16, mdef_flat: 12),
                    ],
                ),
            },
            tribes: {
                fire: (
                    thresholds: [2],
                    bonuses: [(burn_on_hit: 6)],
                ),
            },
        )"#;
        let (classes, tribes) = SynergyTableLoader::parse(ron).unwrap();
        let tanker = &classes
            .iter()
            .find(|(c, _)| *c == UnitClass::Tanker)
            .unwrap()
            .1;
        assert_eq!(tanker.thresholds, vec![2, 4]);
        assert_eq!(tanker.bonuses[1].def_flat, 16);
        assert_eq!(tanker.bonuses[0].atk_pct, 0.0);
        let fire = &tribes.iter().find(|(t, _)| *t == Tribe::Fire).unwrap().1;
        assert_eq!(fire.bonuses[0].burn_on_hit, 6);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let (classes, tribes) = SynergyTableLoader::parse("()").unwrap();
        assert!(classes.is_empty());
        assert!(tribes.is_empty());
    }
}
