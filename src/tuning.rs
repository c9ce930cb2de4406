//! Data-driven game balance
//!
//! Every physics and geometry constant of a run lives in [`Tuning`]. Values
//! default to the classic browser game and can be overridden from JSON.
//! A tuning is validated before a game is built from it: a gap that cannot
//! fit the playfield is a configuration bug, so it is rejected instead of
//! clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the game goes after the player activates on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RestartMode {
    /// Back to the title screen; the next activation starts the round
    #[default]
    Start,
    /// Straight into a fresh round, with the opening flap already applied
    Playing,
}

/// Invalid tuning values
#[derive(Error, Debug)]
pub enum TuningError {
    #[error("tuning JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("`{field}` must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error(
        "a {gap}px gap with {margin}px margins does not fit a {playfield_height}px playfield"
    )]
    GapTooLarge {
        gap: f32,
        margin: f32,
        playfield_height: f32,
    },
    #[error("bird height {bird_height} does not fit through a {gap}px gap")]
    BirdTooTall { bird_height: f32, gap: f32 },
    #[error(
        "a {bird_width}x{bird_height} bird at x={start_x} does not start inside a {playfield_width}x{playfield_height} playfield"
    )]
    BirdOutsidePlayfield {
        start_x: f32,
        bird_width: f32,
        bird_height: f32,
        playfield_width: f32,
        playfield_height: f32,
    },
    #[error("jump velocity must point upward (negative), got {0}")]
    JumpNotUpward(f32),
    #[error("spawn interval must be at least one tick")]
    ZeroSpawnInterval,
}

/// Simulation constants (all speeds are per tick, all sizes in playfield pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Bird ===
    /// Fixed horizontal position of the bird's left edge
    pub bird_start_x: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    /// Added to the vertical velocity every tick
    pub gravity: f32,
    /// Velocity set by a flap (negative is up)
    pub jump_velocity: f32,
    /// Downward velocity cap
    pub max_fall_speed: f32,

    // === Pipes ===
    pub pipe_width: f32,
    /// Vertical opening between the top and bottom pipe
    pub pipe_gap: f32,
    /// Leftward movement per tick
    pub pipe_speed: f32,
    /// Minimum height of each pipe segment
    pub pipe_margin: f32,
    /// Ticks between pipe spawns
    pub spawn_interval: u32,

    // === Presentation ===
    /// Background scroll per tick (clouds)
    pub scroll_speed: f32,
    pub restart_mode: RestartMode,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: 400.0,
            playfield_height: 600.0,

            bird_start_x: 50.0,
            bird_width: 20.0,
            bird_height: 20.0,
            gravity: 0.5,
            jump_velocity: -8.0,
            max_fall_speed: 10.0,

            pipe_width: 50.0,
            pipe_gap: 150.0,
            pipe_speed: 2.0,
            pipe_margin: 50.0,
            spawn_interval: 90,

            scroll_speed: 0.5,
            restart_mode: RestartMode::Start,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Vertical start position of the bird (centre of the playfield)
    pub fn bird_start_y(&self) -> f32 {
        self.playfield_height / 2.0
    }

    /// Highest allowed value (exclusive) for the top pipe's height
    pub fn max_top_height(&self) -> f32 {
        self.playfield_height - self.pipe_gap - self.pipe_margin
    }

    /// Check that pipe placement is always satisfiable and physics are sane
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("gravity", self.gravity),
            ("max_fall_speed", self.max_fall_speed),
            ("pipe_width", self.pipe_width),
            ("pipe_gap", self.pipe_gap),
            ("pipe_speed", self.pipe_speed),
            // Both barrier segments keep a minimum height
            ("pipe_margin", self.pipe_margin),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        let non_negative = [
            ("bird_start_x", self.bird_start_x),
            ("scroll_speed", self.scroll_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TuningError::Negative { field, value });
            }
        }

        if !(self.jump_velocity.is_finite() && self.jump_velocity < 0.0) {
            return Err(TuningError::JumpNotUpward(self.jump_velocity));
        }

        if self.spawn_interval == 0 {
            return Err(TuningError::ZeroSpawnInterval);
        }

        // The random range for the top pipe must be non-empty
        if self.pipe_margin >= self.max_top_height() {
            return Err(TuningError::GapTooLarge {
                gap: self.pipe_gap,
                margin: self.pipe_margin,
                playfield_height: self.playfield_height,
            });
        }

        if self.bird_height >= self.pipe_gap {
            return Err(TuningError::BirdTooTall {
                bird_height: self.bird_height,
                gap: self.pipe_gap,
            });
        }

        // The bird must start fully inside the playfield
        if self.bird_start_y() + self.bird_height >= self.playfield_height
            || self.bird_start_x + self.bird_width > self.playfield_width
        {
            return Err(TuningError::BirdOutsidePlayfield {
                start_x: self.bird_start_x,
                bird_width: self.bird_width,
                bird_height: self.bird_height,
                playfield_width: self.playfield_width,
                playfield_height: self.playfield_height,
            });
        }

        Ok(())
    }
}
