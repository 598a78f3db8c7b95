//! Motion state and scene bounds
//!
//! Everything the render side needs to draw the body lives in `MotionState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Kinematic state of the steered body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub position: Vec2,
    /// Units per second
    pub velocity: Vec2,
    /// Units per second squared
    pub acceleration: Vec2,
    /// Facing angle in radians, normalized to [-π, π)
    #[serde(default)]
    pub heading: f32,
}

impl Default for MotionState {
    fn default() -> Self {
        Self::at(Vec2::ZERO)
    }
}

impl MotionState {
    /// Body at rest at the given position
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            heading: 0.0,
        }
    }

    /// Spawn point: near the bottom-right corner of the scene
    pub fn spawn(bounds: Bounds) -> Self {
        let pos = Vec2::new(bounds.width - SPAWN_INSET_X, SPAWN_Y);
        Self::at(bounds.clamp(pos))
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Scene rectangle [0, width] × [0, height]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Negative extents collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }

    /// Closest point inside the rectangle
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }
}
