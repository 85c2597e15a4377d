//! State types for one combat session.

pub mod common;
pub mod status;
pub mod unit;

pub use common::{Cell, Side, Tribe, UnitClass, UnitId};
pub use status::{StatusBoard, Taunt, TimedPct, TimedValue};
pub use unit::{BaseStats, CombatUnit, UnitMods};
