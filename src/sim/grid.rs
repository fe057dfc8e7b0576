//! Brick grid model and rectangle geometry
//!
//! A brick's logical identity is its (column, row) index. Its rectangle is
//! derived from the layout constants on every query, never stored, so there is
//! no cached position to drift out of sync with the layout.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An axis-aligned rectangle in field coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Visibility state of a single brick
///
/// `Destroyed` is terminal until the whole grid is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickStatus {
    #[default]
    Visible,
    Destroyed,
}

/// A single brick cell
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Brick {
    pub status: BrickStatus,
}

impl Brick {
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.status == BrickStatus::Visible
    }
}

/// Fixed-size brick matrix
///
/// Stored column-major to match the sweep order of the collision pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    cols: usize,
    rows: usize,
    bricks: Vec<Brick>,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            bricks: vec![Brick::default(); cols * rows],
        }
    }

    /// The standard field layout (4 columns x 5 rows)
    pub fn standard() -> Self {
        Self::new(BRICK_COLS, BRICK_ROWS)
    }

    /// Recreate every brick as Visible
    pub fn reset(&mut self) {
        self.bricks.fill(Brick::default());
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total brick count (visible or not)
    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    fn index(&self, col: usize, row: usize) -> usize {
        assert!(
            col < self.cols && row < self.rows,
            "brick index ({col}, {row}) out of bounds for {}x{} grid",
            self.cols,
            self.rows
        );
        col * self.rows + row
    }

    /// Checked access
    pub fn get(&self, col: usize, row: usize) -> Option<&Brick> {
        if col < self.cols && row < self.rows {
            self.bricks.get(col * self.rows + row)
        } else {
            None
        }
    }

    /// Panics on out-of-range indices; use `get` for checked access.
    pub fn brick_at(&self, col: usize, row: usize) -> &Brick {
        let idx = self.index(col, row);
        &self.bricks[idx]
    }

    pub fn brick_at_mut(&mut self, col: usize, row: usize) -> &mut Brick {
        let idx = self.index(col, row);
        &mut self.bricks[idx]
    }

    /// Field rectangle of a brick, recomputed from the layout constants.
    pub fn layout_rect(&self, col: usize, row: usize) -> Rect {
        self.index(col, row);
        Rect::new(
            col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
            row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
            BRICK_WIDTH,
            BRICK_HEIGHT,
        )
    }

    /// Visible bricks with their resolved rectangles, column-major
    pub fn visible_bricks(&self) -> impl Iterator<Item = (usize, usize, Rect)> + '_ {
        (0..self.cols)
            .flat_map(move |col| (0..self.rows).map(move |row| (col, row)))
            .filter(|&(col, row)| self.brick_at(col, row).is_visible())
            .map(|(col, row)| (col, row, self.layout_rect(col, row)))
    }

    /// Number of bricks still standing
    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_visible()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
