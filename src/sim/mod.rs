//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-quantized velocities (no wall-clock time)
//! - Seeded RNG only
//! - Stable brick iteration order (column-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use grid::{Brick, BrickStatus, Grid, Rect};
pub use state::{Ball, GameState, Paddle, RunState, Ruleset};
pub use tick::{FrameEvent, TickInput, tick};
