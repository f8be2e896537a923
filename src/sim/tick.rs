//! Per-frame simulation step
//!
//! Order within a tick is fixed: input edges, time accumulation, ball
//! collision rules, paddle movement, ball integration, gated gem pass,
//! session evaluation.

use super::collision::{
    aabb_overlap, ball_block_collision, ball_ceiling_collision, ball_floor_collision,
    ball_paddle_collision, ball_wall_collision,
};
use super::session::GamePhase;
use super::state::{GameEvent, GameState};
use crate::input::InputEdge;

/// Host clock for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the previous frame (milliseconds)
    pub delta_ms: f32,
    /// Monotonic host time (milliseconds). Not read by the simulation; the gem
    /// gate accumulates `delta_ms`.
    pub game_time_ms: f64,
}

impl FrameTime {
    pub fn new(delta_ms: f32, game_time_ms: f64) -> Self {
        Self {
            delta_ms,
            game_time_ms,
        }
    }

    /// Delta in seconds, never negative
    pub fn dt(&self) -> f32 {
        (self.delta_ms / 1000.0).max(0.0)
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key edges drained from the input queue since the last tick
    pub edges: Vec<InputEdge>,
    /// Idle/demo mode - the paddle follows the ball by itself
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, time: &FrameTime) {
    state.events.clear();

    for edge in &input.edges {
        state.handle_input(*edge);
    }

    // Nothing moves in the menu or after the session is decided
    if state.phase != GamePhase::Playing {
        return;
    }

    let dt = time.dt();
    state.time_ticks += 1;
    state.elapsed_ms += time.delta_ms.max(0.0);

    if input.idle_mode {
        autopilot(state, dt);
    }

    resolve_ball_contacts(state);
    resolve_block_contact(state);
    move_paddle(state, dt);
    integrate_ball(state, dt);
    update_gems(state, dt);

    state.evaluate();
}

/// Walls, ceiling, floor and paddle, in that order, against the ball's
/// current position. None of them short-circuits the others.
fn resolve_ball_contacts(state: &mut GameState) {
    let ball = state.ball.aabb();

    if ball_wall_collision(&ball, &mut state.ball_direction, state.config.field_width) {
        state.push_event(GameEvent::WallBounce);
    }

    if ball_ceiling_collision(&ball, &mut state.ball_direction) {
        state.push_event(GameEvent::CeilingBounce);
    }

    if ball_floor_collision(&ball, state.config.field_height, state.config.floor_margin) {
        state.recenter_ball();
        state.player_life -= 1;
        log::debug!("Ball lost, {} lives left", state.player_life);
        state.push_event(GameEvent::LifeLost);
    }

    let ball = state.ball.aabb();
    if ball_paddle_collision(&ball, &state.paddle, &mut state.ball_direction) {
        state.push_event(GameEvent::PaddleBounce);
    }
}

/// At most one block per tick
fn resolve_block_contact(state: &mut GameState) {
    let ball = state.ball.aabb();
    if let Some(index) = ball_block_collision(&ball, &mut state.blocks, &mut state.ball_direction)
    {
        state.blocks_hit += 1;
        state.score += state.config.block_award;
        log::debug!(
            "Block {} destroyed ({}/{})",
            index,
            state.blocks_hit,
            state.block_count()
        );
        state.push_event(GameEvent::BlockDestroyed(index));
    }
}

/// Held left/right input moves the paddle at its speed, clamped to the field.
/// A flag held against a side is dropped.
fn move_paddle(state: &mut GameState, dt: f32) {
    let max_x = state.config.paddle_max_x().max(0.0);
    let step = state.paddle.speed * dt;
    let paddle = &mut state.paddle;
    let input = &mut state.paddle_input;

    if input.left {
        if paddle.pos.x <= 0.0 {
            input.left = false;
        } else {
            paddle.pos.x = (paddle.pos.x - step).max(0.0);
        }
    }

    if input.right {
        if paddle.pos.x >= max_x {
            input.right = false;
        } else {
            paddle.pos.x = (paddle.pos.x + step).min(max_x);
        }
    }

    paddle.pos.x = paddle.pos.x.clamp(0.0, max_x);
}

/// The ball travels at half its configured speed
fn integrate_ball(state: &mut GameState, dt: f32) {
    let step = state.ball_direction * (state.ball.speed / 2.0 * dt);
    state.ball.pos += step.as_vec2();
}

/// Gems only move once enough time has accumulated since the last gem pass
fn update_gems(state: &mut GameState, dt: f32) {
    if state.elapsed_ms < state.config.gem_gate_interval_ms {
        return;
    }

    let paddle = state.paddle.aabb();
    let floor = state.config.field_height;
    let mut processed = false;

    for index in 0..state.gems.len() {
        let gem = &mut state.gems[index];
        if !gem.visible {
            continue;
        }
        processed = true;
        gem.pos.y += gem.speed * dt;

        if aabb_overlap(&gem.aabb(), &paddle) {
            state.score += state.config.gem_award;
            log::debug!("Gem {} caught, score {}", index, state.score);
            state.respawn_gem(index);
            state.push_event(GameEvent::GemCaught(index));
        } else if gem.pos.y > floor {
            state.respawn_gem(index);
            state.push_event(GameEvent::GemMissed(index));
        }
    }

    if processed {
        state.elapsed_ms = 0.0;
    }
}

/// Demo player: steer the paddle under the ball
fn autopilot(state: &mut GameState, dt: f32) {
    let target = state.ball.aabb().center().x - state.paddle.width() / 2.0;
    let deadband = state.paddle.speed * dt;
    let x = state.paddle.pos.x;

    state.paddle_input.left = x - target > deadband;
    state.paddle_input.right = target - x > deadband;
}
