//! A running game session
//!
//! Hosts one `GameState` for the lifetime of the page: latches input between
//! frames, turns frame deltas into fixed ticks, persists the high score when
//! a round ends and hands events to the caller. Storage failures are logged
//! and never reach the simulation.

use crate::highscores::HighScore;
use crate::platform::storage::KeyValueStore;
use crate::platform::time::FixedStep;
use crate::sim::{FrameView, GameEvent, GameState, HudView, TickInput, autopilot, tick};
use crate::tuning::{Tuning, TuningError};

pub struct Session<S: KeyValueStore> {
    state: GameState,
    store: S,
    input: TickInput,
    clock: FixedStep,
    demo: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Build a session, loading the stored high score
    pub fn new(tuning: Tuning, seed: u64, store: S) -> Result<Self, TuningError> {
        let high_score = HighScore::load(&store);
        let state = GameState::new(tuning, seed)?.with_high_score(high_score);
        log::info!("Session created with seed {}", seed);
        Ok(Self {
            state,
            store,
            input: TickInput::default(),
            clock: FixedStep::default(),
            demo: false,
        })
    }

    /// Queue an activation for the next tick
    pub fn activate(&mut self) {
        self.input.activate = true;
    }

    pub fn demo(&self) -> bool {
        self.demo
    }

    pub fn set_demo(&mut self, demo: bool) {
        if demo != self.demo {
            log::info!("Demo mode: {}", demo);
        }
        self.demo = demo;
    }

    /// Feed one display frame; runs as many ticks as the elapsed time allows
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let ticks = self.clock.advance(dt);
        let mut events = Vec::new();
        for _ in 0..ticks {
            events.extend(self.step());
        }
        events
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> Vec<GameEvent> {
        if self.demo && autopilot::should_flap(&self.state) {
            self.input.activate = true;
        }

        // One-shot inputs are consumed by this tick
        let input = std::mem::take(&mut self.input);
        tick(&mut self.state, &input);

        let events = self.state.take_events();
        for event in &events {
            if let GameEvent::GameOver {
                new_high_score: true,
                ..
            } = event
            {
                self.persist_high_score();
            }
        }
        events
    }

    fn persist_high_score(&mut self) {
        if let Err(e) = self.state.high_score.save(&mut self.store) {
            log::warn!("Failed to save high score: {}", e);
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hud(&self) -> HudView {
        self.state.hud_view()
    }

    pub fn frame_view(&self) -> FrameView {
        self.state.frame_view()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
