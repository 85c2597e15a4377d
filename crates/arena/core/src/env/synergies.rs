//! Read-only synergy and counter table contract.

use crate::state::{Tribe, UnitClass};
use crate::synergy::SynergyDef;

/// Oracle over synergy definitions and the tribe/class counter tables.
///
/// Absent definitions simply grant nothing; a table-less implementation turns
/// the whole mechanic off without touching combat code.
pub trait SynergyOracle: Send + Sync {
    fn class_synergy(&self, class: UnitClass) -> Option<&SynergyDef>;

    fn tribe_synergy(&self, tribe: Tribe) -> Option<&SynergyDef>;

    /// The tribe this one counters, if any.
    fn tribe_counter(&self, _tribe: Tribe) -> Option<Tribe> {
        None
    }

    /// True when the attacker's class counters the defender's.
    fn class_counters(&self, _attacker: UnitClass, _defender: UnitClass) -> bool {
        false
    }
}
