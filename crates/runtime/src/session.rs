//! One battle session from setup to resolution.

use std::sync::Arc;

use arena_core::{
    AiDifficulty, Cell, CombatEngine, CombatState, Dice, Env, GameConfig, PcgRng, PlayerAugments,
    Side, StatusBoard, StepOutcome, UnitId, UnitPlacement, compute_seed, start_combat,
};
use arena_content::{ContentBundle, generate_enemy_roster};

use crate::error::Result;

/// Everything needed to start one battle.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub seed: u64,
    pub difficulty: AiDifficulty,
    /// Current round, steering enemy roster generation.
    pub round: u32,
    pub player_board: Vec<UnitPlacement>,
    /// Explicit enemy roster; `None` generates one from the catalog.
    pub enemy_roster: Option<Vec<UnitPlacement>>,
    pub augments: PlayerAugments,
    pub game: GameConfig,
}

impl SessionConfig {
    pub fn new(seed: u64, difficulty: AiDifficulty, player_board: Vec<UnitPlacement>) -> Self {
        Self {
            seed,
            difficulty,
            round: 1,
            player_board,
            enemy_roster: None,
            augments: PlayerAugments::default(),
            game: GameConfig::default(),
        }
    }
}

/// Read-only per-unit snapshot for presentation layers.
#[derive(Clone, Debug, PartialEq)]
pub struct UnitView {
    pub id: UnitId,
    pub base_id: String,
    pub side: Side,
    pub star: u8,
    pub cell: Cell,
    pub hp: u32,
    pub max_hp: u32,
    pub rage: u32,
    pub rage_max: u32,
    pub shield: u32,
    pub alive: bool,
    pub statuses: StatusBoard,
}

/// One owned battle: combat state plus the content it rolls against.
///
/// The session is the single mutator of its state; starting a new battle
/// replaces the whole session. All computation is synchronous, so the type
/// works identically under the async runtime and in plain tests.
pub struct CombatSession {
    content: Arc<ContentBundle>,
    state: CombatState,
    config: GameConfig,
    round: u32,
    rng: PcgRng,
}

impl CombatSession {
    pub fn new(content: Arc<ContentBundle>, config: SessionConfig) -> Result<Self> {
        let rng = PcgRng;
        let enemy_roster = match config.enemy_roster {
            Some(roster) => roster,
            None => {
                // Roster rolls draw from a nonce no combat step ever reaches.
                let mut dice = Dice::new(&rng, compute_seed(config.seed, u64::MAX));
                generate_enemy_roster(&*content, config.round, config.difficulty, &mut dice)
            }
        };

        let env = Env::new(&*content, &*content, &*content, &rng);
        let state = start_combat(
            env,
            config.seed,
            config.difficulty,
            &config.player_board,
            &enemy_roster,
            &config.augments,
        )?;

        Ok(Self {
            content,
            state,
            config: config.game,
            round: config.round,
            rng,
        })
    }

    /// Advance the battle by one discrete action.
    pub fn step(&mut self) -> StepOutcome {
        let env = Env::new(&*self.content, &*self.content, &*self.content, &self.rng);
        CombatEngine::new(&mut self.state, &self.config).step(env)
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state.phase {
            arena_core::CombatPhase::Resolved { winner } => Some(winner),
            arena_core::CombatPhase::Combat => None,
        }
    }

    /// Living enemy units, for post-battle hp-loss accounting.
    pub fn survivors(&self, side: Side) -> u32 {
        self.state.living_count(side) as u32
    }

    pub fn unit_views(&self) -> Vec<UnitView> {
        self.state
            .units
            .iter()
            .map(|u| UnitView {
                id: u.id,
                base_id: u.base_id.clone(),
                side: u.side,
                star: u.star,
                cell: u.pos,
                hp: u.hp,
                max_hp: u.max_hp,
                rage: u.rage,
                rage_max: u.rage_max,
                shield: u.shield,
                alive: u.alive,
                statuses: u.statuses.clone(),
            })
            .collect()
    }
}
