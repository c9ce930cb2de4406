//! Game state and the round state machine
//!
//! `GameState` is the single owner of everything the simulation mutates.
//! Collaborators read it through views (see `view.rs`) and react to the
//! `GameEvent`s it queues.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipes::PipeManager;
use crate::highscores::HighScore;
use crate::tuning::{RestartMode, Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen: everything at rest, waiting for the first activation
    Start,
    /// Active gameplay
    Playing,
    /// Round ended, simulation frozen until the next activation
    GameOver,
}

/// Something collaborators (audio, HUD, persistence) may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A round began
    RoundStarted,
    /// The bird flapped
    Flap,
    /// One or more pipes were cleared this tick
    Scored { points: u32, score: u32 },
    /// The round ended
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: HighScore,
    /// Set on entering GameOver when the round beat the previous best
    pub new_high_score: bool,
    pub bird: Bird,
    pub pipes: PipeManager,
    /// Background scroll offset (cosmetic)
    pub scroll: f32,
    /// Playing ticks simulated since the state was created
    pub time_ticks: u64,
    /// Pipe placement RNG (continues across rounds)
    pub(crate) rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game on the title screen
    ///
    /// Fails if the tuning could never produce a passable pipe.
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            seed,
            phase: GamePhase::Start,
            score: 0,
            high_score: HighScore::default(),
            new_high_score: false,
            bird: Bird::new(&tuning),
            pipes: PipeManager::new(&tuning),
            scroll: 0.0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        })
    }

    /// Seed the best score (usually loaded from storage)
    pub fn with_high_score(mut self, high_score: HighScore) -> Self {
        self.high_score = high_score;
        self
    }

    /// The single player action: start, flap or restart depending on phase
    pub fn activate(&mut self) {
        match self.phase {
            GamePhase::Start => self.start_round(),
            GamePhase::Playing => self.flap(),
            GamePhase::GameOver => {
                self.reset();
                if self.tuning.restart_mode == RestartMode::Playing {
                    self.start_round();
                }
            }
        }
    }

    /// Put every round-scoped value back to its initial state, on the title screen
    ///
    /// The high score and the RNG stream survive.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Start;
        self.score = 0;
        self.new_high_score = false;
        self.bird.reset();
        self.pipes.reset();
        self.scroll = 0.0;
    }

    /// Whether the last round set a new best; only meaningful in GameOver
    pub fn is_new_high_score(&self) -> bool {
        self.phase == GamePhase::GameOver && self.new_high_score
    }

    /// Drain the queued events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn start_round(&mut self) {
        self.phase = GamePhase::Playing;
        log::info!("Round started");
        self.push_event(GameEvent::RoundStarted);
        // The round opens with a jump already in effect
        self.flap();
    }

    fn flap(&mut self) {
        self.bird.flap();
        self.push_event(GameEvent::Flap);
    }

    /// Enter GameOver; the only place the high score changes
    pub(crate) fn end_round(&mut self) {
        self.phase = GamePhase::GameOver;
        self.new_high_score = self.high_score.submit(self.score);
        if self.new_high_score {
            log::info!("Game over - new high score {}", self.score);
        } else {
            log::info!(
                "Game over - score {} (best {})",
                self.score,
                self.high_score.best()
            );
        }
        self.push_event(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score.best(),
            new_high_score: self.new_high_score,
        });
    }
}
