//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`]. Presentation code
//! only ever reads it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::session::GamePhase;
use super::vector::Vector2D;
use crate::config::{ConfigError, GameConfig};

/// Something worth reacting to that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    CeilingBounce,
    PaddleBounce,
    /// Block index
    BlockDestroyed(usize),
    LifeLost,
    /// Gem index
    GemCaught(usize),
    GemMissed(usize),
    PhaseChanged(GamePhase),
}

/// Held directional input. Set and cleared by key edges, and cleared by the
/// paddle itself when it runs into a side of the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Gem placement RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub player_life: i32,
    pub blocks_hit: usize,
    pub score: u64,
    /// Milliseconds accumulated toward the next gem update
    pub elapsed_ms: f32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    pub paddle: Entity,
    pub paddle_input: PaddleInput,
    pub ball: Entity,
    /// Unit travel direction of the ball
    pub ball_direction: Vector2D,
    /// Grid in row-major order (row = index / columns)
    pub blocks: Vec<Entity>,
    pub gems: Vec<Entity>,
    /// Raised by the exit key; the driver stops when it sees this
    pub exit_requested: bool,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate `config`, then create a fresh session in the menu
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a fresh session in the menu.
    ///
    /// `config` must already pass [`GameConfig::validate`]; NaN or non-positive
    /// sizes make gem placement panic. Use [`GameState::try_new`] for configs
    /// that have not been checked.
    pub fn new(config: GameConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        let mut state = Self {
            paddle: Self::initial_paddle(&config),
            ball: Self::initial_ball(&config),
            ball_direction: Self::initial_direction(),
            blocks: Vec::new(),
            gems: Vec::new(),
            rng,
            phase: GamePhase::Menu,
            player_life: config.starting_lives,
            blocks_hit: 0,
            score: 0,
            elapsed_ms: 0.0,
            time_ticks: 0,
            paddle_input: PaddleInput::default(),
            exit_requested: false,
            events: Vec::new(),
            config,
        };
        state.populate();

        log::info!(
            "New session: {} blocks, {} gems, {} lives",
            state.blocks.len(),
            state.gems.len(),
            state.player_life
        );
        state
    }

    /// Reinitialize counters, entities and visibility for a fresh session.
    /// The RNG keeps running so consecutive sessions differ.
    pub fn reset(&mut self) {
        self.paddle = Self::initial_paddle(&self.config);
        self.ball = Self::initial_ball(&self.config);
        self.ball_direction = Self::initial_direction();
        self.phase = GamePhase::Menu;
        self.player_life = self.config.starting_lives;
        self.blocks_hit = 0;
        self.score = 0;
        self.elapsed_ms = 0.0;
        self.time_ticks = 0;
        self.paddle_input = PaddleInput::default();
        self.exit_requested = false;
        self.events.clear();
        self.populate();

        log::info!("Session reset");
    }

    /// Build the block grid and gem pool
    fn populate(&mut self) {
        let block_size = Vec2::new(self.config.block_width, self.config.block_height);
        self.blocks = (0..self.config.block_count())
            .map(|i| Entity::new(self.config.block_position(i), block_size, 0.0))
            .collect();

        let gem_size = Vec2::splat(self.config.gem_size);
        self.gems = (0..self.config.gem_count)
            .map(|_| {
                Entity::hidden(
                    Vec2::new(0.0, -self.config.gem_size),
                    gem_size,
                    self.config.gem_fall_rate,
                )
            })
            .collect();
        for index in 0..self.config.gem_initial_active.min(self.gems.len()) {
            self.respawn_gem(index);
            self.gems[index].visible = true;
        }
    }

    fn initial_paddle(config: &GameConfig) -> Entity {
        Entity::new(
            Vec2::new(config.paddle_max_x() / 2.0, config.paddle_y()),
            Vec2::new(config.paddle_width, config.paddle_height),
            config.velocity,
        )
    }

    fn initial_ball(config: &GameConfig) -> Entity {
        Entity::new(
            config.field_center(),
            Vec2::splat(config.ball_size),
            config.velocity,
        )
    }

    fn initial_direction() -> Vector2D {
        Vector2D::new(1.0, -1.0).normalised()
    }

    /// Total blocks in the grid
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Blocks still standing
    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| b.visible).count()
    }

    /// Put the ball back in the middle of the field
    pub fn recenter_ball(&mut self) {
        self.ball.pos = self.config.field_center();
    }

    /// Move a gem to a random x above the top of the field
    pub fn respawn_gem(&mut self, index: usize) {
        let max_x = (self.config.field_width - self.config.gem_size).max(0.0);
        let lowest = -self.config.gem_size;
        let highest = lowest - (self.config.field_height / 4.0).max(0.0);

        let x = self.rng.random_range(0.0..=max_x);
        let y = self.rng.random_range(highest..=lowest);
        if let Some(gem) = self.gems.get_mut(index) {
            gem.pos = Vec2::new(x, y);
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
