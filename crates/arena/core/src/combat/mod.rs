//! Combat resolution: damage, healing, targeting, and skill dispatch.

pub mod damage;
pub mod heal;
pub mod skill;
pub mod targeting;

pub use damage::{DamageOptions, DamageType, resolve_damage};
pub use heal::{grant_shield, heal_unit};
pub use skill::{SkillEffect, basic_attack, cast_skill};
pub use targeting::select_target;

use crate::env::{AiProfile, Dice, Env};

/// Everything one action needs besides the state itself: the oracle bundle,
/// the difficulty profile of the battle, and the roll cursor for this step.
pub struct ActionCtx<'a> {
    pub env: Env<'a>,
    pub profile: &'static AiProfile,
    pub dice: Dice<'a>,
}

impl<'a> ActionCtx<'a> {
    pub fn new(env: Env<'a>, profile: &'static AiProfile, dice: Dice<'a>) -> Self {
        Self { env, profile, dice }
    }
}
