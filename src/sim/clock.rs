//! Frame timestamps to integration timestep

use serde::{Deserialize, Serialize};

use crate::consts::MIN_FRAME_DT;

/// Derives `dt` from the frame scheduler's monotonically increasing timestamps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Lower bound on the effective step (seconds)
    pub min_dt: f32,
    /// Optional upper bound, for recovering from long stalls
    pub max_dt: Option<f32>,
    last_time: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MIN_FRAME_DT, None)
    }
}

impl FrameClock {
    pub fn new(min_dt: f32, max_dt: Option<f32>) -> Self {
        Self {
            min_dt,
            max_dt,
            last_time: None,
        }
    }

    /// Timestamp of the previous frame, if any
    pub fn last_time(&self) -> Option<f64> {
        self.last_time
    }

    /// Record a frame timestamp (seconds) and return the step to integrate
    ///
    /// The first frame has nothing to measure against and advances by `min_dt`.
    pub fn advance(&mut self, now: f64) -> f32 {
        let elapsed = match self.last_time {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_time = Some(now);

        // NaN elapsed falls through to min_dt
        let dt = elapsed.max(self.min_dt);
        match self.max_dt {
            Some(max) => dt.min(max.max(self.min_dt)),
            None => dt,
        }
    }

    /// Forget the previous timestamp (after a pause or scene change)
    pub fn reset(&mut self) {
        self.last_time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_uses_floor() {
        let mut clock = FrameClock::default();
        let dt = clock.advance(1234.5);
        assert!((dt - 1.0 / 30.0).abs() < 1e-6);
        assert_eq!(clock.last_time(), Some(1234.5));
    }

    #[test]
    fn test_fast_frames_are_floored() {
        let mut clock = FrameClock::default();
        clock.advance(10.0);
        // 60 Hz frame still advances by 1/30
        let dt = clock.advance(10.0 + 1.0 / 60.0);
        assert!((dt - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_slow_frames_pass_through() {
        let mut clock = FrameClock::default();
        clock.advance(0.0);
        let dt = clock.advance(0.5);
        assert!((dt - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ceiling() {
        let mut clock = FrameClock::new(1.0 / 30.0, Some(0.1));
        clock.advance(0.0);
        let dt = clock.advance(3.0);
        assert!((dt - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_time_uses_floor() {
        let mut clock = FrameClock::default();
        clock.advance(5.0);
        let dt = clock.advance(4.0);
        assert!((dt - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::default();
        clock.advance(5.0);
        clock.reset();
        assert_eq!(clock.last_time(), None);
        let dt = clock.advance(100.0);
        assert!((dt - 1.0 / 30.0).abs() < 1e-6);
    }
}
