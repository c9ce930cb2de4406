//! The player-controlled bird
//!
//! Physics are frame based: one `advance` is one tick of explicit Euler
//! integration with the tuning's per-tick constants.

use glam::Vec2;

use super::collision::{Rect, rect_hits_pipe};
use super::pipe::Pipe;
use crate::consts::*;
use crate::tuning::Tuning;

/// The bird entity
#[derive(Debug, Clone)]
pub struct Bird {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    /// Vertical velocity (negative is up)
    pub vel: f32,
    pub size: Vec2,
    /// Visual tilt in degrees, derived from velocity
    pub rotation: f32,
    /// Wing animation phase (1 right after a flap, decays to 0)
    pub wing_flap: f32,
    start: Vec2,
    gravity: f32,
    jump_velocity: f32,
    max_fall_speed: f32,
    playfield_height: f32,
}

impl Bird {
    pub fn new(tuning: &Tuning) -> Self {
        let start = Vec2::new(tuning.bird_start_x, tuning.bird_start_y());
        Self {
            pos: start,
            vel: 0.0,
            size: Vec2::new(tuning.bird_width, tuning.bird_height),
            rotation: 0.0,
            wing_flap: 0.0,
            start,
            gravity: tuning.gravity,
            jump_velocity: tuning.jump_velocity,
            max_fall_speed: tuning.max_fall_speed,
            playfield_height: tuning.playfield_height,
        }
    }

    /// Back to the start position, at rest
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.vel = 0.0;
        self.rotation = 0.0;
        self.wing_flap = 0.0;
    }

    /// Upward impulse; overrides whatever velocity the bird had
    pub fn flap(&mut self) {
        self.vel = self.jump_velocity;
        self.wing_flap = 1.0;
    }

    /// Advance one tick: gravity, velocity cap, position, cosmetics
    pub fn advance(&mut self) {
        self.vel = (self.vel + self.gravity).min(self.max_fall_speed);
        self.pos.y += self.vel;

        self.rotation = (self.vel * ROTATION_PER_VELOCITY).clamp(MIN_ROTATION, MAX_ROTATION);
        if self.wing_flap > 0.0 {
            self.wing_flap = (self.wing_flap - WING_FLAP_DECAY).max(0.0);
        }
    }

    /// Touching or past the top or bottom edge of the playfield
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.y <= 0.0 || self.pos.y + self.size.y >= self.playfield_height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(self.pos, self.size)
    }

    pub fn collides_with(&self, pipe: &Pipe) -> bool {
        rect_hits_pipe(&self.bounds(), &pipe.bounds())
    }
}
