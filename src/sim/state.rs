//! Game state and core simulation types
//!
//! Everything needed to recompute a frame lives here; there is no hidden
//! global state. Runs are reproducible from a single seed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::consts::*;

/// Which of the two game variants is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Ruleset {
    /// Endless: clearing the grid advances the level and scales ball speed
    #[default]
    Leveled,
    /// One grid: clearing it wins the game
    SingleLevel,
}

/// Session lifecycle
///
/// The only legal transitions are Stopped -> Running (explicit start, once)
/// and Running -> Ended (loss, or win under `SingleLevel`). There is no path
/// out of Ended; the host recreates the whole state to play again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunState {
    Stopped,
    Running,
    Ended,
}

/// The moving ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// The player's paddle
///
/// Only the left edge is mutable; width, height, and vertical placement are
/// fixed by the field constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    pub fn centered() -> Self {
        Self {
            x: (FIELD_WIDTH - PADDLE_WIDTH) / 2.0,
        }
    }

    /// Move by a delta, clamped to the field
    pub fn move_by(&mut self, delta: f32) {
        self.x = (self.x + delta).clamp(0.0, FIELD_WIDTH - PADDLE_WIDTH);
    }

    /// Center the paddle on a target x, clamped to the field
    pub fn set_center(&mut self, x: f32) {
        self.x = (x - PADDLE_WIDTH / 2.0).clamp(0.0, FIELD_WIDTH - PADDLE_WIDTH);
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::centered()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Live RNG, serialized so a round-tripped state keeps its sequence
    rng: Pcg32,
    pub ruleset: Ruleset,
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: Grid,
    /// Non-negative, monotonically non-decreasing within a session
    pub score: u32,
    /// Starts at 1; only increments, and only under `Ruleset::Leveled`
    pub level: u32,
    pub run_state: RunState,
}

impl GameState {
    /// Create a fresh session: full grid, zero score, level 1, Stopped.
    pub fn new(ruleset: Ruleset, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball {
            pos: spawn_position(&mut rng),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
        };

        Self {
            seed,
            rng,
            ruleset,
            ball,
            paddle: Paddle::centered(),
            grid: Grid::standard(),
            score: 0,
            level: 1,
            run_state: RunState::Stopped,
        }
    }

    /// Re-spawn the ball with the initial velocity (random x, fixed y)
    pub fn reset_ball(&mut self) {
        self.ball.pos = spawn_position(&mut self.rng);
        self.ball.vel = Vec2::new(BALL_START_DX, BALL_START_DY);
    }

    /// Re-spawn the ball keeping its current velocity (level advance)
    pub fn reposition_ball(&mut self) {
        self.ball.pos = spawn_position(&mut self.rng);
    }

    pub fn reset_paddle(&mut self) {
        self.paddle = Paddle::centered();
    }

    /// Score that clears the current grid
    ///
    /// Score accumulates across levels, so under `Leveled` the target for
    /// level N is N full grids.
    pub fn target_score(&self) -> u32 {
        let per_grid = (self.grid.cols() * self.grid.rows()) as u32;
        match self.ruleset {
            Ruleset::Leveled => per_grid * self.level,
            Ruleset::SingleLevel => per_grid,
        }
    }
}

/// Spawn point: uniform-random x across the field, fixed y near the bottom
fn spawn_position(rng: &mut Pcg32) -> Vec2 {
    let x = rng.random_range(BALL_RADIUS..FIELD_WIDTH - BALL_RADIUS);
    Vec2::new(x, FIELD_HEIGHT - BALL_SPAWN_BOTTOM_OFFSET)
}
