//! A single pipe pair
//!
//! Shape is fixed at creation; only `x` and the `passed` flag change.

use rand::Rng;

use super::collision::PipeBounds;
use crate::tuning::Tuning;

/// Top and bottom pipe with a gap between them
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Bottom edge of the top pipe
    pub top_height: f32,
    /// Top edge of the bottom pipe
    pub bottom_y: f32,
    pub bottom_height: f32,
    /// Set once the bird has fully cleared this pipe
    pub passed: bool,
    speed: f32,
}

impl Pipe {
    /// Spawn a pipe with a random gap position
    ///
    /// The top pipe height is drawn uniformly from
    /// `[pipe_margin, playfield_height - pipe_gap - pipe_margin)`, so both
    /// segments are at least `pipe_margin` tall. The range is non-empty for
    /// any tuning that passed validation.
    pub fn new<R: Rng + ?Sized>(tuning: &Tuning, spawn_x: f32, rng: &mut R) -> Self {
        let top_height = rng.random_range(tuning.pipe_margin..tuning.max_top_height());
        Self::with_gap(tuning, spawn_x, top_height)
    }

    /// Spawn a pipe with a known gap position (scripted scenarios, tests)
    pub fn with_gap(tuning: &Tuning, spawn_x: f32, top_height: f32) -> Self {
        let bottom_y = top_height + tuning.pipe_gap;
        Self {
            x: spawn_x,
            width: tuning.pipe_width,
            top_height,
            bottom_y,
            bottom_height: tuning.playfield_height - bottom_y,
            passed: false,
            speed: tuning.pipe_speed,
        }
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
    }

    /// Trailing edge has left the playfield
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// Flag the pipe as passed once its trailing edge is left of `bird_x`
    ///
    /// Returns true exactly once per pipe: on the call that flips the flag.
    pub fn mark_passed(&mut self, bird_x: f32) -> bool {
        if !self.passed && self.x + self.width < bird_x {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn bounds(&self) -> PipeBounds {
        PipeBounds {
            x: self.x,
            width: self.width,
            top_height: self.top_height,
            bottom_y: self.bottom_y,
            bottom_height: self.bottom_height,
        }
    }
}
