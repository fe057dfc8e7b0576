//! Brickfall - a paddle-and-brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, physics, collisions, game state)
//! - `input`: Input aggregation (key flags, pointer targets)
//! - `controller`: Frame orchestration and scheduling strategies
//! - `config`: Data-driven game configuration

pub mod config;
pub mod controller;
pub mod input;
pub mod sim;

pub use config::{GameConfig, SchedulerKind};
pub use controller::{ControlFlow, GameController};

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (origin top-left, y grows downward)
    pub const FIELD_WIDTH: f32 = 480.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_DX: f32 = 2.0;
    pub const BALL_START_DY: f32 = -2.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_SPAWN_BOTTOM_OFFSET: f32 = 30.0;

    /// Paddle defaults - fixed size, pinned to the bottom of the field
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Per-frame paddle displacement while a direction key is held
    pub const PADDLE_STEP: f32 = 10.0;

    /// Brick grid layout
    pub const BRICK_COLS: usize = 4;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_WIDTH: f32 = 85.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    /// Left offset that centers the grid in the field
    pub const BRICK_OFFSET_LEFT: f32 = (FIELD_WIDTH
        - ((BRICK_COLS as f32) * (BRICK_WIDTH + BRICK_PADDING) - BRICK_PADDING))
        / 2.0;

    /// Ball speed multiplier applied on every level advance
    pub const LEVEL_SPEED_SCALE: f32 = 1.2;
}
