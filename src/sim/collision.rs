//! Collision geometry
//!
//! The bird and both pipe segments are axis-aligned rectangles. Tests are
//! exact overlaps: no tolerance and no swept (continuous) detection, so a
//! fast enough body could tunnel through a thin pipe. The velocity cap in
//! the tuning keeps per-tick travel well below the pipe width.

use glam::Vec2;
use serde::Serialize;

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self::new(min.x, min.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap with the horizontal span `[x, x + width]`
    pub fn overlaps_x(&self, x: f32, width: f32) -> bool {
        self.x < x + width && self.right() > x
    }
}

/// Collision geometry of one pipe pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeBounds {
    pub x: f32,
    pub width: f32,
    /// Bottom edge of the top pipe
    pub top_height: f32,
    /// Top edge of the bottom pipe
    pub bottom_y: f32,
    pub bottom_height: f32,
}

/// Check whether a body hits a pipe pair
///
/// A hit needs horizontal overlap with the pipe AND some part of the body
/// above the gap's top edge or below its bottom edge.
pub fn rect_hits_pipe(body: &Rect, pipe: &PipeBounds) -> bool {
    if !body.overlaps_x(pipe.x, pipe.width) {
        return false;
    }
    body.y < pipe.top_height || body.bottom() > pipe.bottom_y
}
