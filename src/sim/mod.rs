//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, per-tick constants only
//! - Seeded RNG only
//! - Stable iteration order (pipes in creation order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bird;
pub mod collision;
pub mod pipe;
pub mod pipes;
pub mod state;
pub mod tick;
pub mod view;

pub use bird::Bird;
pub use collision::{PipeBounds, Rect, rect_hits_pipe};
pub use pipe::Pipe;
pub use pipes::PipeManager;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use view::{BirdView, FrameView, HudView, PipeView};
