//! Per-frame simulation tick
//!
//! One call advances the game by exactly one frame. Order inside a Playing
//! tick: bird, bounds check, pipes, collision check, scoring, scroll.

use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Activate (flap / start / restart); applied before the frame is simulated
    pub activate: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.activate {
        state.activate();
    }

    // Start and GameOver are frozen
    if state.phase != GamePhase::Playing {
        return;
    }

    // A bird already outside the playfield ends the round without moving
    if state.bird.is_out_of_bounds() {
        state.end_round();
        return;
    }

    state.time_ticks += 1;

    state.bird.advance();
    if state.bird.is_out_of_bounds() {
        state.end_round();
        return;
    }

    state.pipes.advance(state.phase, &mut state.rng);
    if state.pipes.detect_collision(&state.bird) {
        state.end_round();
        return;
    }

    let points = state.pipes.collect_score_events(&state.bird);
    if points > 0 {
        state.score += points;
        let score = state.score;
        state.push_event(GameEvent::Scored { points, score });
    }

    state.scroll = (state.scroll + state.tuning.scroll_speed) % state.tuning.playfield_width;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::HighScore;
    use crate::sim::pipe::Pipe;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    fn activate() -> TickInput {
        TickInput { activate: true }
    }

    fn playing_state(tuning: Tuning) -> GameState {
        let mut state = GameState::new(tuning, 12345).expect("valid tuning");
        state.activate();
        state.take_events();
        state
    }

    #[test]
    fn test_start_is_frozen() {
        let mut state = GameState::new(Tuning::default(), 12345).expect("valid tuning");
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.bird.pos.y, 300.0);
        assert_eq!(state.time_ticks, 0);
        assert!(state.pipes.is_empty());
    }

    #[test]
    fn test_tick_start_to_playing() {
        let mut state = GameState::new(Tuning::default(), 12345).expect("valid tuning");
        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Playing);
        // Opening flap then one frame of gravity
        assert_eq!(state.bird.vel, -7.5);
        assert_eq!(state.bird.pos.y, 292.5);
    }

    #[test]
    fn test_out_of_bounds_ends_round_without_moving() {
        let mut state = playing_state(Tuning::default());
        state.pipes.push(Pipe::with_gap(&state.tuning, 300.0, 100.0));
        state.bird.pos.y = -1.0;
        state.bird.vel = 10.0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.bird.pos.y, -1.0);
        assert_eq!(state.pipes.pipes()[0].x, 300.0);
    }

    #[test]
    fn test_hitting_floor_ends_round_before_pipes_move() {
        let mut state = playing_state(Tuning::default());
        state.pipes.push(Pipe::with_gap(&state.tuning, 300.0, 100.0));
        state.bird.pos.y = 575.0;
        state.bird.vel = 10.0;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.pipes.pipes()[0].x, 300.0);
        assert_eq!(state.pipes.frame_count(), 0);
    }

    #[test]
    fn test_collision_ends_round() {
        let mut state = playing_state(Tuning::default());
        // Gap far above the bird, pipe about to overlap it
        state.pipes.push(Pipe::with_gap(&state.tuning, 71.0, 50.0));
        state.bird.vel = -0.5;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(matches!(
            state.take_events().last(),
            Some(GameEvent::GameOver { score: 0, .. })
        ));
    }

    #[test]
    fn test_scoring() {
        let mut state = playing_state(Tuning::default());
        // Trailing edge at 51: one step puts it left of the bird
        state.pipes.push(Pipe::with_gap(&state.tuning, 1.0, 50.0));
        state.bird.vel = -0.5;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 1);
        assert_eq!(
            state.take_events(),
            vec![GameEvent::Scored {
                points: 1,
                score: 1
            }]
        );

        // No double counting on later frames
        state.bird.vel = -0.5;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_two_pipes_same_frame() {
        let mut state = playing_state(Tuning::default());
        state.pipes.push(Pipe::with_gap(&state.tuning, 0.5, 50.0));
        state.pipes.push(Pipe::with_gap(&state.tuning, 1.5, 50.0));
        state.bird.vel = -0.5;

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_game_over_is_frozen() {
        let mut state = playing_state(Tuning::default());
        state.bird.pos.y = -1.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);

        let ticks = state.time_ticks;
        for _ in 0..50 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.bird.pos.y, -1.0);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing_state(Tuning::default());
        state.score = 7;
        state.bird.pos.y = -1.0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.high_score, HighScore::new(7));

        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.score, 0);
        assert_eq!(state.pipes.frame_count(), 0);

        tick(&mut state, &activate());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_scroll_wraps() {
        let mut state = playing_state(Tuning::default());
        state.scroll = 399.75;
        state.bird.vel = -0.5;
        tick(&mut state, &TickInput::default());
        assert!((state.scroll - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed produce identical pipes
        let mut state1 = playing_state(Tuning::default());
        let mut state2 = playing_state(Tuning::default());

        for i in 0..400 {
            let input = TickInput {
                activate: i % 18 == 0,
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.pipes.pipes(), state2.pipes.pipes());
        assert_eq!(state1.bird.pos, state2.bird.pos);
    }

    proptest! {
        #[test]
        fn prop_high_score_tracks_round_scores(
            seed in any::<u64>(),
            rounds in proptest::collection::vec(0u32..50, 1..20),
        ) {
            let mut state = GameState::new(Tuning::default(), seed).expect("valid tuning");
            for score in rounds {
                // Leave Start (or GameOver) and begin a round
                while state.phase != GamePhase::Playing {
                    tick(&mut state, &activate());
                }

                let before = state.high_score.best();
                state.score = score;
                state.bird.pos.y = -1.0;
                tick(&mut state, &TickInput::default());

                prop_assert_eq!(state.phase, GamePhase::GameOver);
                prop_assert_eq!(state.high_score.best(), before.max(score));
                prop_assert_eq!(state.is_new_high_score(), score > before);
                prop_assert!(state.high_score.best() >= before);

                // Frozen while the game-over screen is up
                tick(&mut state, &TickInput::default());
                prop_assert_eq!(state.high_score.best(), before.max(score));
            }
        }
    }
}
