//! Tilt Motion - accelerometer-steered 2D body
//!
//! Core modules:
//! - `sim`: Pure per-frame integration (filter, Euler step, boundary response)
//! - `scene`: Frame-loop owner of the motion state
//! - `sensor`: Accelerometer sources and scoped sensor sessions
//! - `settings`: Data-driven tuning and presets

pub mod scene;
pub mod sensor;
pub mod settings;
pub mod sim;

pub use scene::MotionScene;
pub use settings::{BoundaryMode, CornerResponse, MotionSettings, ScenePreset, SettingsError};

/// Motion tuning constants
pub mod consts {
    /// Acceleration at full tilt (units/s²)
    pub const MAX_ACCELERATION: f32 = 400.0;
    /// Per-axis speed cap (units/s)
    pub const MAX_SPEED: f32 = 200.0;

    /// Weight of the newest raw sample in the low-pass filter
    pub const FILTER_FACTOR: f32 = 0.75;

    /// Smallest timestep a frame may advance by (30 Hz)
    pub const MIN_FRAME_DT: f32 = 1.0 / 30.0;

    /// Velocity/acceleration retained after hitting an edge
    pub const BOUNCE_DAMPING: f32 = 0.4;
    /// Speed above which the heading snaps to the direction of travel
    pub const ROTATION_THRESHOLD: f32 = 40.0;
    /// Sprite art points up, so travel direction is offset by -90°
    pub const HEADING_OFFSET: f32 = -std::f32::consts::FRAC_PI_2;

    /// Spawn offset from the right edge
    pub const SPAWN_INSET_X: f32 = 50.0;
    /// Spawn height above the bottom edge
    pub const SPAWN_Y: f32 = 60.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(0.5) - 0.5).abs() < 1e-6);
        assert!((normalize_angle(PI) + PI).abs() < 1e-6);
        assert!((normalize_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-5);
    }
}
