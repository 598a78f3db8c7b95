//! Boundary collision detection and response
//!
//! The body is a point inside an axis-aligned rectangle. Each axis is checked
//! on its own: a hit on the left/right edge is an `x` collision, a hit on the
//! bottom/top edge is a `y` collision.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bounds, MotionState};
use crate::settings::CornerResponse;

/// Which edges were hit this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collision {
    /// Left or right edge (vertical border)
    pub x: bool,
    /// Bottom or top edge (horizontal border)
    pub y: bool,
}

impl Collision {
    pub fn none() -> Self {
        Self::default()
    }

    #[inline]
    pub fn any(&self) -> bool {
        self.x || self.y
    }

    #[inline]
    pub fn corner(&self) -> bool {
        self.x && self.y
    }
}

/// Clamp a position into bounds, reporting which axes were out of range
pub fn clamp_to_bounds(position: Vec2, bounds: Bounds) -> (Vec2, Collision) {
    let clamped = bounds.clamp(position);
    let collision = Collision {
        x: clamped.x != position.x,
        y: clamped.y != position.y,
    };
    (clamped, collision)
}

/// Per-axis multipliers for a collision: negate the hit axis, damp both
fn response_factors(collision: Collision, damping: f32, corner: CornerResponse) -> Vec2 {
    let x_hit = Vec2::new(-damping, damping);
    let y_hit = Vec2::new(damping, -damping);

    match (collision.x, collision.y) {
        (false, false) => Vec2::ONE,
        (true, false) => x_hit,
        (false, true) => y_hit,
        (true, true) => match corner {
            // Vertical edge response, then horizontal on top of it
            CornerResponse::Sequential => x_hit * y_hit,
            // One event: both axes reflect, energy lost once
            CornerResponse::Combined => Vec2::splat(-damping),
        },
    }
}

/// Damped bounce off the edges flagged in `collision`
///
/// Velocity and acceleration get the same treatment so the body does not
/// immediately accelerate back into the wall it just left.
pub fn apply_bounce(
    state: &mut MotionState,
    collision: Collision,
    damping: f32,
    corner: CornerResponse,
) {
    if !collision.any() {
        return;
    }
    let factors = response_factors(collision, damping, corner);
    state.velocity *= factors;
    state.acceleration *= factors;
}
