//! Per-frame motion integration
//!
//! One call advances the body by `dt`: filter the sensor sample, turn it into
//! acceleration, Euler-integrate velocity and position, resolve the scene
//! edges, then update the heading.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collision, apply_bounce, clamp_to_bounds};
use super::filter::LowPassFilter;
use super::state::{Bounds, MotionState};
use crate::consts::HEADING_OFFSET;
use crate::normalize_angle;
use crate::settings::{BoundaryMode, MotionSettings};

/// Sensor input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Raw accelerometer reading, each axis in [-1, 1]; None when the
    /// sensor has nothing this frame
    pub sample: Option<Vec2>,
}

impl TickInput {
    pub fn sample(x: f32, y: f32) -> Self {
        Self {
            sample: Some(Vec2::new(x, y)),
        }
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Step that was integrated (seconds)
    pub dt: f32,
    /// A sample arrived and acceleration was recomputed
    pub sample_applied: bool,
    pub collision: Collision,
    pub heading_changed: bool,
}

/// Map a smoothed device reading to scene acceleration
///
/// The device is held in landscape, so the device y axis drives scene x
/// (inverted) and device x drives scene y.
#[inline]
pub fn landscape_acceleration(smoothed: Vec2, max_acceleration: f32) -> Vec2 {
    Vec2::new(-smoothed.y, smoothed.x) * max_acceleration
}

/// Facing angle for a velocity, with the sprite's art offset applied
#[inline]
pub fn heading_for(velocity: Vec2) -> f32 {
    normalize_angle(velocity.y.atan2(velocity.x) + HEADING_OFFSET)
}

/// Advance the motion state by `dt` seconds
pub fn tick(
    state: &mut MotionState,
    filter: &mut LowPassFilter,
    input: &TickInput,
    bounds: Bounds,
    settings: &MotionSettings,
    dt: f32,
) -> TickReport {
    let dt = dt.max(0.0);
    let mut report = TickReport {
        dt,
        ..Default::default()
    };

    // Missing sample: keep the previous acceleration
    if let Some(raw) = input.sample {
        let smoothed = filter.apply(raw);
        state.acceleration = landscape_acceleration(smoothed, settings.max_acceleration);
        report.sample_applied = true;
    }

    integrate(state, dt, settings.max_speed);

    let (position, collision) = clamp_to_bounds(state.position, bounds);
    state.position = position;
    report.collision = collision;

    if collision.any() {
        log::debug!(
            "edge hit x={} y={} at ({:.1}, {:.1})",
            collision.x,
            collision.y,
            position.x,
            position.y
        );
        if settings.boundary == BoundaryMode::Bounce {
            apply_bounce(
                state,
                collision,
                settings.bounce_damping,
                settings.corner_response,
            );
            // Damping above 1 would otherwise lift velocity past the cap
            state.velocity = cap_speed(state.velocity, settings.max_speed);
        }
    }

    if let Some(threshold) = settings.rotation_threshold {
        if state.speed() > threshold {
            state.heading = heading_for(state.velocity);
            report.heading_changed = true;
        }
    }

    report
}

/// Euler step with a per-axis speed cap
fn integrate(state: &mut MotionState, dt: f32, max_speed: f32) {
    state.velocity = cap_speed(state.velocity + state.acceleration * dt, max_speed);
    state.position += state.velocity * dt;
}

#[inline]
fn cap_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let cap = Vec2::splat(max_speed);
    velocity.max(-cap).min(cap)
}
