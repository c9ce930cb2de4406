//! Flappy Bird - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, scoring, game state)
//! - `session`: Frame-driven host for the simulation (input, persistence, events)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser/native platform abstraction
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::{QualityPreset, Settings};
pub use tuning::{RestartMode, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame delta the scheduler accepts (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Wing flap animation decay per tick
    pub const WING_FLAP_DECAY: f32 = 0.1;
    /// Bird tilt in degrees per unit of vertical velocity
    pub const ROTATION_PER_VELOCITY: f32 = 3.0;
    /// Nose-up tilt limit (degrees)
    pub const MIN_ROTATION: f32 = -30.0;
    /// Nose-down tilt limit (degrees)
    pub const MAX_ROTATION: f32 = 90.0;
}
