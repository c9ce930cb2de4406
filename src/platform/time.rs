//! Frame timing
//!
//! Display frames arrive at whatever rate the browser likes; the simulation
//! wants exactly one tick per 1/60 s. `FixedStep` turns wall-clock deltas
//! into whole ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Fixed-timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    accumulator: f32,
    step: f32,
    max_substeps: u32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            accumulator: 0.0,
            step,
            max_substeps,
        }
    }

    /// Feed one frame's delta (seconds); returns how many ticks to run
    pub fn advance(&mut self, dt: f32) -> u32 {
        // Long stalls (tab in background, debugger) are not caught up
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_substeps {
            self.accumulator -= self.step;
            ticks += 1;
        }
        // Drop backlog beyond the substep cap
        if ticks == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}

/// Rolling frames-per-second over the last 60 frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame timestamp (milliseconds) and return the current FPS
    pub fn record(&mut self, time_ms: f64) -> u32 {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Slot we are about to overwrite holds the oldest timestamp
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = ((self.frame_times.len() - 1) as f64 * 1000.0 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_tick_per_frame() {
        let mut clock = FixedStep::default();
        for _ in 0..10 {
            assert_eq!(clock.advance(SIM_DT), 1);
        }
    }

    #[test]
    fn test_half_frames_accumulate() {
        let mut clock = FixedStep::new(0.5, 4);
        assert_eq!(clock.advance(0.25), 0);
        assert_eq!(clock.advance(0.25), 1);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_long_stall_is_capped() {
        let mut clock = FixedStep::default();
        // 1 s is clamped to 0.1 s (6 ticks) and then capped at 4
        assert_eq!(clock.advance(1.0), MAX_SUBSTEPS);
        // Backlog was dropped to at most one step
        assert!(clock.advance(0.0) <= 1);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-5.0), 0);
        assert_eq!(clock.advance(SIM_DT), 1);
    }

    #[test]
    fn test_fps_counter() {
        let mut fps = FpsCounter::default();
        let mut last = 0;
        // Start at 1000 ms so the first timestamp is non-zero
        for i in 0..120 {
            last = fps.record(1000.0 + i as f64 * 1000.0 / 60.0);
        }
        assert_eq!(last, 60);
        assert_eq!(fps.fps(), 60);
    }
}
