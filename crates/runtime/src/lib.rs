//! Runtime orchestration for the combat core.
//!
//! This crate owns battle sessions and exposes the outward interface the
//! presentation layer drives. A single worker task holds the one active
//! [`CombatSession`]; clients interact through a cloneable [`RuntimeHandle`]
//! over command channels and subscribe to [`GameEvent`]s over broadcast.
//! Outcome computation stays synchronous and deterministic inside the
//! session; the async layer only sequences access to it.
pub mod error;
pub mod event;
pub mod handle;
pub mod session;
pub mod worker;

pub use error::{Result, RuntimeError};
pub use event::GameEvent;
pub use handle::{Runtime, RuntimeHandle};
pub use session::{CombatSession, SessionConfig, UnitView};
