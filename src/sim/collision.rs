//! Collision predicates for the per-frame physics pass
//!
//! All tests are pure functions of current position and velocity. Brick and
//! paddle containment use strict inequalities: a point exactly on a boundary
//! edge does not count as a hit.

use glam::Vec2;

use super::grid::Rect;

/// Is the ball's center strictly inside a brick rectangle?
#[inline]
pub fn ball_in_brick(center: Vec2, brick: &Rect) -> bool {
    center.x > brick.x && center.x < brick.right() && center.y > brick.y && center.y < brick.bottom()
}

/// Would the projected x leave the side walls this frame?
#[inline]
pub fn hits_side_wall(pos: Vec2, vel: Vec2, radius: f32, field_w: f32) -> bool {
    let next_x = pos.x + vel.x;
    next_x > field_w - radius || next_x < radius
}

/// Would the projected y cross the top edge this frame?
#[inline]
pub fn hits_ceiling(pos: Vec2, vel: Vec2, radius: f32) -> bool {
    pos.y + vel.y < radius
}

/// Would the projected y cross the bottom edge this frame?
#[inline]
pub fn crosses_floor(pos: Vec2, vel: Vec2, radius: f32, field_h: f32) -> bool {
    pos.y + vel.y > field_h - radius
}

/// Does the paddle catch a ball at this x?
///
/// Uses the ball's current x, not the projected one, and strict containment
/// against the paddle span.
#[inline]
pub fn paddle_catches(ball_x: f32, paddle_x: f32, paddle_w: f32) -> bool {
    ball_x > paddle_x && ball_x < paddle_x + paddle_w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_in_brick_interior() {
        let rect = Rect::new(50.0, 50.0, 85.0, 20.0);
        assert!(ball_in_brick(Vec2::new(90.0, 60.0), &rect));
        assert!(!ball_in_brick(Vec2::new(40.0, 60.0), &rect));
        assert!(!ball_in_brick(Vec2::new(90.0, 80.0), &rect));
    }

    #[test]
    fn test_ball_in_brick_boundary_is_outside() {
        let rect = Rect::new(50.0, 50.0, 85.0, 20.0);
        // Exactly on an edge: strict inequality says no hit
        assert!(!ball_in_brick(Vec2::new(50.0, 60.0), &rect));
        assert!(!ball_in_brick(Vec2::new(135.0, 60.0), &rect));
        assert!(!ball_in_brick(Vec2::new(90.0, 50.0), &rect));
        assert!(!ball_in_brick(Vec2::new(90.0, 70.0), &rect));
        // Corner
        assert!(!ball_in_brick(Vec2::new(50.0, 50.0), &rect));
    }

    #[test]
    fn test_side_walls() {
        let r = 10.0;
        let w = 480.0;
        // Heading out the right edge
        assert!(hits_side_wall(Vec2::new(469.0, 100.0), Vec2::new(2.0, 0.0), r, w));
        // Heading out the left edge
        assert!(hits_side_wall(Vec2::new(11.0, 100.0), Vec2::new(-2.0, 0.0), r, w));
        // Safely inside
        assert!(!hits_side_wall(Vec2::new(240.0, 100.0), Vec2::new(2.0, 0.0), r, w));
        // Landing exactly on the limit is not a hit
        assert!(!hits_side_wall(Vec2::new(468.0, 100.0), Vec2::new(2.0, 0.0), r, w));
    }

    #[test]
    fn test_ceiling_and_floor() {
        let r = 10.0;
        let h = 400.0;
        assert!(hits_ceiling(Vec2::new(100.0, 11.0), Vec2::new(0.0, -2.0), r));
        assert!(!hits_ceiling(Vec2::new(100.0, 13.0), Vec2::new(0.0, -2.0), r));

        assert!(crosses_floor(Vec2::new(100.0, 389.0), Vec2::new(0.0, 2.0), r, h));
        assert!(!crosses_floor(Vec2::new(100.0, 387.0), Vec2::new(0.0, 2.0), r, h));
    }

    #[test]
    fn test_paddle_catch_strict_span() {
        // Paddle from x=50 to x=150
        assert!(paddle_catches(100.0, 50.0, 100.0));
        assert!(!paddle_catches(200.0, 50.0, 100.0));
        assert!(!paddle_catches(50.0, 50.0, 100.0));
        assert!(!paddle_catches(150.0, 50.0, 100.0));
    }
}
