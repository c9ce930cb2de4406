//! Idle/demo mode - AI plays the game
//!
//! Decides once per tick whether to activate. It keeps the bird riding just
//! above the bottom edge of the next gap: flapping whenever gravity would
//! carry the bird's feet past that line on the next frame.

use super::state::{GamePhase, GameState};

/// Clearance kept between the bird's feet and the bottom pipe
const FLOOR_CLEARANCE: f32 = 10.0;

/// Should the autopilot activate this tick?
pub fn should_flap(state: &GameState) -> bool {
    match state.phase {
        // Start (or restart) straight away
        GamePhase::Start | GamePhase::GameOver => true,
        GamePhase::Playing => {
            let bird = &state.bird;
            let next_vel = (bird.vel + state.tuning.gravity).min(state.tuning.max_fall_speed);
            let next_bottom = bird.pos.y + bird.size.y + next_vel;
            next_bottom > target_line(state)
        }
    }
}

/// Lowest y the bird's feet should reach
fn target_line(state: &GameState) -> f32 {
    let bird_x = state.bird.pos.x;
    // First pipe the bird has not cleared yet
    let next_pipe = state
        .pipes
        .pipes()
        .iter()
        .filter(|p| p.x + p.width >= bird_x)
        .min_by(|a, b| a.x.total_cmp(&b.x));

    match next_pipe {
        Some(pipe) => pipe.bottom_y - FLOOR_CLEARANCE,
        None => (state.tuning.playfield_height + state.tuning.pipe_gap) / 2.0 - FLOOR_CLEARANCE,
    }
}
