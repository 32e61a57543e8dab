//! Fixed timestep accumulator
//!
//! Turns wall-clock frame timestamps into a whole number of constant-size
//! simulation steps. Sub-step leftovers carry over to the next frame.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedClock {
    /// Step size in seconds
    step: f64,
    /// Time not yet consumed by a step
    accumulator: f64,
    /// Timestamp of the previous frame (seconds)
    last: Option<f64>,
}

impl FixedClock {
    pub fn new(step: f32) -> Self {
        Self {
            step: step as f64,
            accumulator: 0.0,
            last: None,
        }
    }

    pub fn step(&self) -> f32 {
        self.step as f32
    }

    /// Time carried over to the next frame
    pub fn leftover(&self) -> f64 {
        self.accumulator
    }

    /// Forget the previous timestamp so no elapsed time is charged up to `now`
    pub fn rebaseline(&mut self, now: f64) {
        self.last = Some(now);
    }

    /// Feed a frame timestamp, returning how many steps to run
    ///
    /// The first call after construction only establishes the baseline.
    pub fn advance(&mut self, now: f64) -> u32 {
        let elapsed = match self.last {
            Some(last) => now - last,
            None => 0.0,
        };
        self.last = Some(now);
        self.accumulate(elapsed)
    }

    /// Add elapsed seconds and drain whole steps from the buffer
    pub fn accumulate(&mut self, elapsed: f64) -> u32 {
        // A clock running backwards contributes nothing
        self.accumulator += elapsed.max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_advance_sets_baseline() {
        let mut clock = FixedClock::new(1.0 / 64.0);
        assert_eq!(clock.advance(100.0), 0);
        assert_eq!(clock.advance(100.0 + 2.5 / 64.0), 2);
        assert_eq!(clock.leftover(), 0.5 / 64.0);
    }

    #[test]
    fn test_leftover_carries_between_frames() {
        let mut clock = FixedClock::new(0.25);
        assert_eq!(clock.accumulate(0.1875), 0);
        assert_eq!(clock.accumulate(0.1875), 1);
        assert_eq!(clock.leftover(), 0.125);
        assert_eq!(clock.accumulate(0.125), 1);
        assert_eq!(clock.leftover(), 0.0);
    }

    #[test]
    fn test_rebaseline_skips_gap() {
        let mut clock = FixedClock::new(0.25);
        clock.rebaseline(0.0);
        assert_eq!(clock.advance(0.5), 2);
        // A long pause: rebaseline at resume, nothing is charged
        clock.rebaseline(60.0);
        assert_eq!(clock.advance(60.25), 1);
    }

    #[test]
    fn test_backwards_time_is_ignored() {
        let mut clock = FixedClock::new(0.25);
        clock.rebaseline(10.0);
        assert_eq!(clock.advance(9.0), 0);
        assert_eq!(clock.leftover(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_accumulator_conserves_time(deltas in prop::collection::vec(0.0f64..0.1, 1..200)) {
            // Binary-exact step keeps the comparison tight
            let step = 1.0 / 64.0;
            let mut clock = FixedClock::new(step as f32);
            let mut steps = 0u64;
            for dt in &deltas {
                steps += clock.accumulate(*dt) as u64;
            }
            let total: f64 = deltas.iter().sum();
            let expected = (total / step).floor();
            prop_assert!((steps as f64 - expected).abs() <= 1.0);
            let simulated = steps as f64 * step + clock.leftover();
            prop_assert!((simulated - total).abs() < 1e-9);
            prop_assert!(clock.leftover() < step);
        }
    }
}
