//! Motion simulation module
//!
//! Pure per-frame integration. This module must stay free of I/O:
//! - State is passed in explicitly and mutated in place
//! - Sensor readings arrive already sampled, one per tick
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod filter;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Collision, apply_bounce, clamp_to_bounds};
pub use filter::LowPassFilter;
pub use state::{Bounds, MotionState};
pub use tick::{TickInput, TickReport, heading_for, landscape_acceleration, tick};
