//! Read-only snapshots for renderers and HUDs
//!
//! Nothing in here can mutate the simulation; collaborators get plain
//! copyable values.

use serde::Serialize;

use super::bird::Bird;
use super::pipe::Pipe;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Degrees, positive is nose-down
    pub rotation: f32,
    pub wing_flap: f32,
}

impl From<&Bird> for BirdView {
    fn from(bird: &Bird) -> Self {
        Self {
            x: bird.pos.x,
            y: bird.pos.y,
            width: bird.size.x,
            height: bird.size.y,
            rotation: bird.rotation,
            wing_flap: bird.wing_flap,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    pub bottom_height: f32,
}

impl From<&Pipe> for PipeView {
    fn from(pipe: &Pipe) -> Self {
        Self {
            x: pipe.x,
            width: pipe.width,
            top_height: pipe.top_height,
            bottom_y: pipe.bottom_y,
            bottom_height: pipe.bottom_height,
        }
    }
}

/// What the on-screen text and overlays need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudView {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    /// Only ever true while in GameOver
    pub new_high_score: bool,
}

impl HudView {
    /// Running score line
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Game-over summary markup
    pub fn final_score_html(&self) -> String {
        let banner = if self.new_high_score {
            "<strong>NEW HIGH SCORE!</strong><br>"
        } else {
            ""
        };
        format!(
            "Final Score: {}<br>{}High Score: {}",
            self.score, banner, self.high_score
        )
    }

    pub fn show_instructions(&self) -> bool {
        self.phase == GamePhase::Start
    }

    pub fn show_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub width: f32,
    pub height: f32,
    pub scroll: f32,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
    pub hud: HudView,
}

impl GameState {
    pub fn hud_view(&self) -> HudView {
        HudView {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score.best(),
            new_high_score: self.is_new_high_score(),
        }
    }

    pub fn frame_view(&self) -> FrameView {
        FrameView {
            width: self.tuning.playfield_width,
            height: self.tuning.playfield_height,
            scroll: self.scroll,
            bird: BirdView::from(&self.bird),
            pipes: self.pipes.pipes().iter().map(PipeView::from).collect(),
            hud: self.hud_view(),
        }
    }
}
