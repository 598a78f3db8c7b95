//! Low-pass filter for raw accelerometer samples
//!
//! Accelerometer readings are jittery frame to frame. An exponential moving
//! average, applied independently per axis, smooths them before they drive
//! the body.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::FILTER_FACTOR;

/// Exponential moving average over 2D samples
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LowPassFilter {
    /// Weight of the newest sample, in (0, 1]
    pub factor: f32,
    /// Current smoothed value, starts at zero
    pub smoothed: Vec2,
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::new(FILTER_FACTOR)
    }
}

impl LowPassFilter {
    pub fn new(factor: f32) -> Self {
        Self {
            factor,
            smoothed: Vec2::ZERO,
        }
    }

    /// Blend a raw sample into the smoothed value and return it
    pub fn apply(&mut self, raw: Vec2) -> Vec2 {
        self.smoothed = raw * self.factor + self.smoothed * (1.0 - self.factor);
        self.smoothed
    }

    pub fn reset(&mut self) {
        self.smoothed = Vec2::ZERO;
    }
}
