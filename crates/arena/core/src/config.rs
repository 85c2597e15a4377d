/// Balance constants and board geometry shared by every rules module.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Hard ceiling on actions in a single battle before the remaining-hp
    /// tiebreak forces a winner.
    pub action_cap: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum deployed units across both sides (full board).
    pub const MAX_UNITS: usize = (Self::ROWS * Self::COLS) as usize;

    // ===== board geometry =====
    pub const ROWS: u8 = 5;
    pub const COLS: u8 = 10;
    /// Rightmost column of the left (player) half.
    pub const LEFT_COL_MAX: u8 = 4;
    /// Leftmost column of the right (enemy) half.
    pub const RIGHT_COL_MIN: u8 = 5;

    // ===== turn pacing =====
    pub const DEFAULT_ACTION_CAP: u32 = 240;
    /// Actions after which the sudden-death multiplier starts climbing.
    pub const SUDDEN_DEATH_AFTER: u32 = 100;
    /// The multiplier rises once every this many actions past the threshold.
    pub const SUDDEN_DEATH_INTERVAL: u32 = 5;
    pub const SUDDEN_DEATH_STEP: f64 = 0.2;

    // ===== hit model =====
    pub const BASE_ACCURACY: f64 = 0.95;
    pub const EVASION_CAP: f64 = 0.75;
    pub const MIN_HIT_CHANCE: f64 = 0.1;
    pub const CRIT_MULTIPLIER: f64 = 1.5;
    /// Every unit starts with this crit chance before synergies.
    pub const BASE_CRIT_PCT: f64 = 0.05;

    // ===== damage model =====
    /// Attack/defense counter advantage, applied as 1 + bonus or 1 - bonus.
    pub const COUNTER_BONUS: f64 = 0.2;
    /// Basic attacks swing by a uniform integer in [min, max].
    pub const ATTACK_JITTER_MIN: i32 = -5;
    pub const ATTACK_JITTER_MAX: i32 = 6;

    // ===== resources =====
    /// Starting-rage bonuses from mods are capped here no matter the rage bar.
    pub const STARTING_RAGE_CAP: u32 = 4;
    /// On-hit burn/poison refreshes duration to at least this many turns.
    pub const ON_HIT_DOT_TURNS: u8 = 2;

    pub const MAX_STAR: u8 = 3;

    pub fn new() -> Self {
        Self {
            action_cap: Self::DEFAULT_ACTION_CAP,
        }
    }

    pub fn with_action_cap(action_cap: u32) -> Self {
        Self { action_cap }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
