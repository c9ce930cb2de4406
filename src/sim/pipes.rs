//! Pipe lifecycle: spawning, movement, eviction and aggregate queries

use rand::Rng;

use super::bird::Bird;
use super::pipe::Pipe;
use super::state::GamePhase;
use crate::tuning::Tuning;

/// Owns the live pipes in creation order
#[derive(Debug, Clone)]
pub struct PipeManager {
    pipes: Vec<Pipe>,
    /// Playing ticks since the last reset (drives spawn cadence)
    frame_count: u64,
    tuning: Tuning,
}

impl PipeManager {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pipes: Vec::new(),
            frame_count: 0,
            tuning: *tuning,
        }
    }

    pub fn reset(&mut self) {
        self.pipes.clear();
        self.frame_count = 0;
    }

    /// Advance one tick; does nothing outside of `Playing`
    ///
    /// Spawns a pipe at the right edge every `spawn_interval` ticks, then
    /// moves every pipe and drops the ones that left the playfield.
    pub fn advance<R: Rng + ?Sized>(&mut self, phase: GamePhase, rng: &mut R) {
        if phase != GamePhase::Playing {
            return;
        }

        self.frame_count += 1;
        if self.frame_count % u64::from(self.tuning.spawn_interval) == 0 {
            let pipe = Pipe::new(&self.tuning, self.tuning.playfield_width, rng);
            log::debug!(
                "Spawned pipe at tick {} (gap {:.1}..{:.1})",
                self.frame_count,
                pipe.top_height,
                pipe.bottom_y
            );
            self.pipes.push(pipe);
        }

        for pipe in &mut self.pipes {
            pipe.advance();
        }

        let before = self.pipes.len();
        self.pipes.retain(|p| !p.is_off_screen());
        let evicted = before - self.pipes.len();
        if evicted > 0 {
            log::debug!("Evicted {} pipe(s), {} live", evicted, self.pipes.len());
        }
    }

    /// True if the bird hits any live pipe
    pub fn detect_collision(&self, bird: &Bird) -> bool {
        self.pipes.iter().any(|p| bird.collides_with(p))
    }

    /// Mark every pipe the bird has cleared; returns how many were newly passed
    pub fn collect_score_events(&mut self, bird: &Bird) -> u32 {
        let bird_x = bird.pos.x;
        self.pipes
            .iter_mut()
            .map(|p| p.mark_passed(bird_x))
            .filter(|&scored| scored)
            .count() as u32
    }

    /// Insert a pipe directly (scripted scenarios)
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup() -> (PipeManager, Pcg32, Tuning) {
        let tuning = Tuning {
            playfield_height: 500.0,
            ..Default::default()
        };
        (PipeManager::new(&tuning), Pcg32::seed_from_u64(7), tuning)
    }

    #[test]
    fn test_not_playing_is_noop() {
        let (mut pipes, mut rng, _) = setup();
        for _ in 0..200 {
            pipes.advance(GamePhase::Start, &mut rng);
            pipes.advance(GamePhase::GameOver, &mut rng);
        }
        assert_eq!(pipes.frame_count(), 0);
        assert!(pipes.is_empty());
    }

    #[test]
    fn test_spawn_cadence() {
        let (mut pipes, mut rng, _) = setup();
        for _ in 0..89 {
            pipes.advance(GamePhase::Playing, &mut rng);
        }
        assert_eq!(pipes.len(), 0);
        pipes.advance(GamePhase::Playing, &mut rng);
        assert_eq!(pipes.len(), 1);
        // Spawned at the right edge, then moved once
        assert_eq!(pipes.pipes()[0].x, 398.0);

        for _ in 0..90 {
            pipes.advance(GamePhase::Playing, &mut rng);
        }
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes.frame_count(), 180);
    }

    #[test]
    fn test_reset() {
        let (mut pipes, mut rng, _) = setup();
        for _ in 0..100 {
            pipes.advance(GamePhase::Playing, &mut rng);
        }
        pipes.reset();
        assert!(pipes.is_empty());
        assert_eq!(pipes.frame_count(), 0);
    }

    #[test]
    fn test_eviction_exactly_past_zero() {
        let (mut pipes, mut rng, tuning) = setup();
        // Right edge lands exactly on 0 after one step: still live
        pipes.push(Pipe::with_gap(&tuning, -48.0, 100.0));
        pipes.advance(GamePhase::Playing, &mut rng);
        assert_eq!(pipes.len(), 1);
        assert_eq!(pipes.pipes()[0].x, -50.0);

        pipes.advance(GamePhase::Playing, &mut rng);
        assert!(pipes.is_empty());
    }

    #[test]
    fn test_eviction_keeps_neighbours() {
        let (mut pipes, mut rng, tuning) = setup();
        pipes.push(Pipe::with_gap(&tuning, -51.0, 100.0));
        pipes.push(Pipe::with_gap(&tuning, -51.5, 100.0));
        pipes.push(Pipe::with_gap(&tuning, 100.0, 100.0));
        pipes.advance(GamePhase::Playing, &mut rng);
        assert_eq!(pipes.len(), 1);
        assert_eq!(pipes.pipes()[0].x, 98.0);
    }

    #[test]
    fn test_detect_collision() {
        let (mut pipes, _, tuning) = setup();
        let mut bird = Bird::new(&tuning);
        assert!(!pipes.detect_collision(&bird));

        pipes.push(Pipe::with_gap(&tuning, 300.0, 10.0));
        pipes.push(Pipe::with_gap(&tuning, 40.0, 200.0));
        bird.pos.y = 250.0;
        assert!(!pipes.detect_collision(&bird));
        bird.pos.y = 100.0;
        assert!(pipes.detect_collision(&bird));
    }

    #[test]
    fn test_collect_counts_each_pipe_once() {
        let (mut pipes, _, tuning) = setup();
        let bird = Bird::new(&tuning);
        pipes.push(Pipe::with_gap(&tuning, -5.0, 100.0));
        pipes.push(Pipe::with_gap(&tuning, -2.0, 100.0));
        pipes.push(Pipe::with_gap(&tuning, 200.0, 100.0));

        // Two pipes cleared in the same call both count
        assert_eq!(pipes.collect_score_events(&bird), 2);
        assert_eq!(pipes.collect_score_events(&bird), 0);
    }

    proptest! {
        #[test]
        fn prop_one_spawn_per_interval(intervals in 1u64..5, interval in 1u32..200) {
            let tuning = Tuning {
                spawn_interval: interval,
                // Slow pipes so nothing is evicted during the run
                pipe_speed: 0.001,
                ..Default::default()
            };
            let mut pipes = PipeManager::new(&tuning);
            let mut rng = Pcg32::seed_from_u64(1);
            for _ in 0..intervals * u64::from(interval) {
                pipes.advance(GamePhase::Playing, &mut rng);
            }
            prop_assert_eq!(pipes.len() as u64, intervals);
        }

        #[test]
        fn prop_score_total_matches_passed(seed in any::<u64>(), ticks in 1usize..1500) {
            let tuning = Tuning::default();
            let bird = Bird::new(&tuning);
            let mut pipes = PipeManager::new(&tuning);
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut total = 0u32;
            let mut spawned = 0u32;
            for _ in 0..ticks {
                let before = pipes.frame_count();
                pipes.advance(GamePhase::Playing, &mut rng);
                if pipes.frame_count() % 90 == 0 && pipes.frame_count() != before {
                    spawned += 1;
                }
                total += pipes.collect_score_events(&bird);
                let passed_live = pipes.pipes().iter().filter(|p| p.passed).count() as u32;
                prop_assert!(passed_live <= total);
            }
            prop_assert!(total <= spawned);
        }
    }
}
