//! AI opponent difficulty profiles.
//!
//! A profile scales the right side's stats at unit creation and steers its
//! behavior during combat (rage income, imperfect targeting) and roster
//! generation (team size, star odds).

/// The three opponent difficulty tiers.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiDifficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Tuning knobs for one difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiProfile {
    pub hp_mult: f64,
    pub atk_mult: f64,
    pub matk_mult: f64,
    /// Rage the AI gains per landed hit (the player always gains 1).
    pub rage_gain: u32,
    /// Chance a non-frontline AI attacker picks a uniformly random target
    /// instead of scoring, simulating imperfect play.
    pub random_target_chance: f64,
    /// Flat addition to the generated roster size.
    pub team_size_bonus: i32,
    /// Extra roster slot every this many rounds...
    pub team_growth_every: u32,
    /// ...up to this many extra slots.
    pub team_growth_cap: u32,
    /// Highest star the generator may roll.
    pub max_star: u8,
    /// Additive adjustments to the round-scaled 2★/3★ chances. Negative
    /// values below -1 disable the bracket entirely.
    pub star2_bonus: f64,
    pub star3_bonus: f64,
}

impl AiDifficulty {
    const EASY: AiProfile = AiProfile {
        hp_mult: 0.84,
        atk_mult: 0.82,
        matk_mult: 0.82,
        rage_gain: 1,
        random_target_chance: 0.58,
        team_size_bonus: 0,
        team_growth_every: 5,
        team_growth_cap: 1,
        max_star: 1,
        star2_bonus: -1.0,
        star3_bonus: -1.0,
    };

    const MEDIUM: AiProfile = AiProfile {
        hp_mult: 0.95,
        atk_mult: 0.93,
        matk_mult: 0.93,
        rage_gain: 1,
        random_target_chance: 0.3,
        team_size_bonus: 0,
        team_growth_every: 5,
        team_growth_cap: 1,
        max_star: 2,
        star2_bonus: -0.02,
        star3_bonus: -1.0,
    };

    const HARD: AiProfile = AiProfile {
        hp_mult: 1.05,
        atk_mult: 1.04,
        matk_mult: 1.04,
        rage_gain: 1,
        random_target_chance: 0.12,
        team_size_bonus: 1,
        team_growth_every: 4,
        team_growth_cap: 2,
        max_star: 3,
        star2_bonus: 0.0,
        star3_bonus: 0.0,
    };

    /// The static profile for this tier.
    pub const fn profile(self) -> &'static AiProfile {
        match self {
            AiDifficulty::Easy => &Self::EASY,
            AiDifficulty::Medium => &Self::MEDIUM,
            AiDifficulty::Hard => &Self::HARD,
        }
    }
}
