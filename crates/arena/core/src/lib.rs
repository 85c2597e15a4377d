//! Deterministic combat rules for the arena auto-battler.
//!
//! `arena-core` defines the canonical battle semantics: unit state, stat
//! derivation, synergies, statuses, targeting, skill dispatch, damage
//! resolution, and the turn scheduler. All state mutation flows through
//! [`engine::CombatEngine`]; game data arrives through the read-only oracle
//! traits in [`env`], so the crate performs no I/O and holds no global state.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod progress;
pub mod state;
pub mod stats;
pub mod synergy;

pub use combat::{
    ActionCtx, DamageOptions, DamageType, SkillEffect, basic_attack, cast_skill, grant_shield,
    heal_unit, resolve_damage, select_target,
};
pub use config::GameConfig;
pub use engine::{
    ActionKind, CombatEngine, PlayerAugments, SetupError, SkipReason, StepOutcome, StepStatus,
    TurnAction, UnitPlacement, start_combat,
};
pub use env::{
    AiDifficulty, AiProfile, Dice, Env, PcgRng, RngOracle, ScaleStat, SkillDef, SkillHit,
    SkillOracle, SynergyOracle, UnitDef, UnitOracle, compute_seed,
};
pub use progress::{GamePhase, PlayerProgress, RoundOutcome};
pub use state::{
    BaseStats, Cell, CombatPhase, CombatState, CombatUnit, Side, StatusBoard, Taunt, TimedPct,
    TimedValue, Tribe, TurnState, UnitClass, UnitId, UnitMods,
};
pub use stats::{TeamBonuses, derive_stats, scaled_base_stats, star_multiplier};
pub use synergy::{
    SynergyBonus, SynergyCounts, SynergyDef, apply_bonus, apply_side_synergies, calculate_counts,
    resolve_bonus,
};
