//! Cosmetic upload progress.
//!
//! The upload form posts natively, so the browser never tells us how many
//! bytes have been sent. This is a placeholder animation that creeps
//! towards 100% by random steps; it must not be read as real progress.

use rand::Rng;

use crate::config::PROGRESS_MAX_STEP;

pub const PROGRESS_COMPLETE: f64 = 100.0;

/// Result of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressTick {
    /// Still below 100; keep ticking.
    Advanced(f64),
    /// Reached 100; the task should stop.
    Finished,
}

/// Percentage shown by the fake progress bar. Never decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CosmeticProgress {
    value: f64,
}

impl CosmeticProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_finished(&self) -> bool {
        self.value >= PROGRESS_COMPLETE
    }

    /// Add `step` percentage points, clamped to 100.
    ///
    /// Negative or NaN steps are treated as zero.
    pub fn advance(&mut self, step: f64) -> ProgressTick {
        if self.is_finished() {
            return ProgressTick::Finished;
        }

        let step = if step.is_nan() { 0.0 } else { step.max(0.0) };
        self.value = (self.value + step).min(PROGRESS_COMPLETE);

        if self.is_finished() {
            ProgressTick::Finished
        } else {
            ProgressTick::Advanced(self.value)
        }
    }

    /// Advance by a random step in `[0, PROGRESS_MAX_STEP)`.
    pub fn advance_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ProgressTick {
        let step = rng.gen_range(0.0..PROGRESS_MAX_STEP);
        self.advance(step)
    }

    /// Jump straight to 100.
    pub fn complete(&mut self) {
        self.value = PROGRESS_COMPLETE;
    }

    /// CSS width for the bar element.
    pub fn css_width(&self) -> String {
        format!("{}%", self.value)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let progress = CosmeticProgress::new();
        assert_eq!(progress.value(), 0.0);
        assert_eq!(progress.css_width(), "0%");
        assert!(!progress.is_finished());
    }

    #[test]
    fn test_clamps_at_hundred() {
        let mut progress = CosmeticProgress::new();
        assert_eq!(progress.advance(60.0), ProgressTick::Advanced(60.0));
        assert_eq!(progress.advance(60.0), ProgressTick::Finished);
        assert_eq!(progress.value(), 100.0);
        assert_eq!(progress.css_width(), "100%");
    }

    #[test]
    fn test_stops_advancing_once_finished() {
        let mut progress = CosmeticProgress::new();
        progress.complete();

        assert_eq!(progress.advance(10.0), ProgressTick::Finished);
        assert_eq!(progress.value(), 100.0);
    }

    #[test]
    fn test_ignores_negative_and_nan_steps() {
        let mut progress = CosmeticProgress::new();
        progress.advance(20.0);
        progress.advance(-5.0);
        progress.advance(f64::NAN);
        assert_eq!(progress.value(), 20.0);
    }

    #[test]
    fn test_random_walk_is_monotonic_and_terminates() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut progress = CosmeticProgress::new();
        let mut previous = progress.value();
        let mut ticks = 0;

        loop {
            ticks += 1;
            let tick = progress.advance_random(&mut rng);
            assert!(progress.value() >= previous);
            assert!(progress.value() - previous < PROGRESS_MAX_STEP);
            previous = progress.value();
            if tick == ProgressTick::Finished {
                break;
            }
            assert!(ticks < 10_000, "progress never finished");
        }

        assert_eq!(progress.value(), PROGRESS_COMPLETE);
    }
}
