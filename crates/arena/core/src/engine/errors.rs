//! Errors surfaced while setting up a battle.
//!
//! Running combat itself never errors: data gaps degrade to safe fallbacks
//! and numeric edge cases are clamped at the mutation sites. The only hard
//! failure is starting with nothing to fight.

use crate::state::Side;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A side has no valid units after catalog resolution. The planning
    /// layer is expected to prevent this before invoking the core.
    #[error("cannot start combat: the {0} roster resolved to no units")]
    EmptyRoster(Side),
}
