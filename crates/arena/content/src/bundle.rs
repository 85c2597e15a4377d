//! Content packaged behind the core's oracle traits.

use std::collections::HashMap;

use arena_core::{SkillDef, SkillOracle, SynergyDef, SynergyOracle, Tribe, UnitClass, UnitDef, UnitOracle};

use crate::{builtin_class_synergies, builtin_skills, builtin_tribe_synergies, builtin_units};

/// One bundle of catalogs implementing every data oracle the engine needs.
///
/// The default bundle carries the built-in tables; loaders (behind the
/// `loaders` feature) replace individual catalogs from RON files. Counter
/// tables can be switched off wholesale, which turns the advantage
/// multipliers into no-ops without touching combat code.
pub struct ContentBundle {
    units: Vec<UnitDef>,
    skills: HashMap<String, SkillDef>,
    class_synergies: HashMap<UnitClass, SynergyDef>,
    tribe_synergies: HashMap<Tribe, SynergyDef>,
    counters_enabled: bool,
}

impl ContentBundle {
    /// Bundle over the built-in catalogs.
    pub fn builtin() -> Self {
        Self::from_tables(
            builtin_units(),
            builtin_skills(),
            builtin_class_synergies(),
            builtin_tribe_synergies(),
        )
    }

    pub fn from_tables(
        units: Vec<UnitDef>,
        skills: Vec<SkillDef>,
        class_synergies: Vec<(UnitClass, SynergyDef)>,
        tribe_synergies: Vec<(Tribe, SynergyDef)>,
    ) -> Self {
        Self {
            units,
            skills: skills.into_iter().map(|s| (s.id.clone(), s)).collect(),
            class_synergies: class_synergies.into_iter().collect(),
            tribe_synergies: tribe_synergies.into_iter().collect(),
            counters_enabled: true,
        }
    }

    /// Disable the tribe/class counter multipliers.
    pub fn without_counters(mut self) -> Self {
        self.counters_enabled = false;
        self
    }

    pub fn replace_units(&mut self, units: Vec<UnitDef>) {
        self.units = units;
    }

    pub fn replace_skills(&mut self, skills: Vec<SkillDef>) {
        self.skills = skills.into_iter().map(|s| (s.id.clone(), s)).collect();
    }

    pub fn replace_synergies(
        &mut self,
        class_synergies: Vec<(UnitClass, SynergyDef)>,
        tribe_synergies: Vec<(Tribe, SynergyDef)>,
    ) {
        self.class_synergies = class_synergies.into_iter().collect();
        self.tribe_synergies = tribe_synergies.into_iter().collect();
    }
}

impl Default for ContentBundle {
    fn default() -> Self {
        Self::builtin()
    }
}

impl UnitOracle for ContentBundle {
    fn unit_def(&self, id: &str) -> Option<&UnitDef> {
        self.units.iter().find(|u| u.id == id)
    }

    fn all_units(&self) -> &[UnitDef] {
        &self.units
    }
}

impl SkillOracle for ContentBundle {
    fn skill(&self, id: &str) -> Option<&SkillDef> {
        self.skills.get(id)
    }
}

impl SynergyOracle for ContentBundle {
    fn class_synergy(&self, class: UnitClass) -> Option<&SynergyDef> {
        self.class_synergies.get(&class)
    }

    fn tribe_synergy(&self, tribe: Tribe) -> Option<&SynergyDef> {
        self.tribe_synergies.get(&tribe)
    }

    fn tribe_counter(&self, tribe: Tribe) -> Option<Tribe> {
        if self.counters_enabled {
            crate::synergies::tribe_counter(tribe)
        } else {
            None
        }
    }

    fn class_counters(&self, attacker: UnitClass, defender: UnitClass) -> bool {
        self.counters_enabled && crate::synergies::class_counters(attacker, defender)
    }
}
