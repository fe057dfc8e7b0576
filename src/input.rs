//! Input aggregation
//!
//! Raw device events land here and nowhere else: handlers only flip flags or
//! store a pointer target, and the physics engine samples the aggregate once
//! at the start of its frame. Key identity is resolved to a closed enum at
//! this boundary so the core never sees raw event encodings.

use crate::consts::FIELD_WIDTH;
use crate::sim::TickInput;

/// Horizontal movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDirection {
    Left,
    Right,
}

/// Normalized view of the input devices between two frames
///
/// The two held flags are independent; priority between them is the physics
/// engine's call. Pointer events use the direct-reposition policy: the stored
/// target recenters the paddle once, on the next frame.
#[derive(Debug, Clone, Default)]
pub struct InputAggregator {
    left_held: bool,
    right_held: bool,
    pointer_x: Option<f32>,
}

impl InputAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Press/release of a direction key
    pub fn key_direction(&mut self, dir: KeyDirection, pressed: bool) {
        match dir {
            KeyDirection::Left => self.left_held = pressed,
            KeyDirection::Right => self.right_held = pressed,
        }
    }

    /// Pointer (touch) position in field coordinates
    ///
    /// Out-of-field coordinates are clamped, never rejected.
    pub fn pointer_position(&mut self, x: f32) {
        self.pointer_x = Some(x.clamp(0.0, FIELD_WIDTH));
    }

    /// Snapshot for one frame; the pointer target is consumed.
    pub fn sample(&mut self) -> TickInput {
        TickInput {
            left_held: self.left_held,
            right_held: self.right_held,
            pointer_x: self.pointer_x.take(),
        }
    }

    /// Drop all pending input (session restart)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
