//! Accelerometer sources and scoped sensor sessions
//!
//! The integrator never talks to hardware. A `SensorSession` owns a source
//! for as long as readings are wanted and turns updates off when dropped.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// A device that reports tilt as a 2D vector, each axis in [-1, 1]
pub trait Accelerometer {
    /// Hardware present on this device
    fn is_available(&self) -> bool;
    /// Updates currently running
    fn is_active(&self) -> bool;
    fn start_updates(&mut self);
    fn stop_updates(&mut self);
    /// Most recent reading, None if the device has nothing yet
    fn latest(&mut self) -> Option<Vec2>;
}

/// Keeps accelerometer updates running for its own lifetime
pub struct SensorSession<A: Accelerometer> {
    device: A,
}

impl<A: Accelerometer> SensorSession<A> {
    /// Start updates if the hardware exists; otherwise readings stay empty
    pub fn start(mut device: A) -> Self {
        if device.is_available() {
            device.start_updates();
            log::info!("accelerometer updates on");
        } else {
            log::info!("accelerometer unavailable, running without tilt input");
        }
        Self { device }
    }

    /// Reading for this frame
    pub fn reading(&mut self) -> Option<Vec2> {
        if self.device.is_active() {
            self.device.latest()
        } else {
            None
        }
    }

    pub fn is_active(&self) -> bool {
        self.device.is_active()
    }

    pub fn device(&self) -> &A {
        &self.device
    }
}

impl<A: Accelerometer> Drop for SensorSession<A> {
    fn drop(&mut self) {
        if self.device.is_available() && self.device.is_active() {
            self.device.stop_updates();
            log::info!("accelerometer updates off");
        }
    }
}

/// Replays a fixed list of readings, then reports nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedSensor {
    samples: VecDeque<Option<Vec2>>,
    available: bool,
    active: bool,
}

impl ScriptedSensor {
    pub fn new(samples: impl IntoIterator<Item = Option<Vec2>>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            available: true,
            active: false,
        }
    }

    /// A device without an accelerometer
    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl Accelerometer for ScriptedSensor {
    fn is_available(&self) -> bool {
        self.available
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn start_updates(&mut self) {
        self.active = true;
    }

    fn stop_updates(&mut self) {
        self.active = false;
    }

    fn latest(&mut self) -> Option<Vec2> {
        self.samples.pop_front().flatten()
    }
}

/// Common period of the sin(phase) and cos(0.7 * phase) sweep axes
const SWEEP_PERIOD: f32 = 10.0 * std::f32::consts::TAU;

/// Simulated device being slowly tilted around, with sensor jitter
///
/// Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct SimulatedTilt {
    rng: Pcg32,
    /// Peak tilt on each axis
    pub amplitude: f32,
    /// Jitter added to each reading
    pub noise: f32,
    /// Radians of sweep per reading
    pub sweep_rate: f32,
    phase: f32,
    active: bool,
}

impl SimulatedTilt {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            amplitude: 0.6,
            noise: 0.05,
            sweep_rate: 0.02,
            phase: 0.0,
            active: false,
        }
    }
}

impl Accelerometer for SimulatedTilt {
    fn is_available(&self) -> bool {
        true
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn start_updates(&mut self) {
        self.active = true;
    }

    fn stop_updates(&mut self) {
        self.active = false;
    }

    fn latest(&mut self) -> Option<Vec2> {
        // Both sweep axes repeat every 20π; wrap so f32 precision holds up
        self.phase = (self.phase + self.sweep_rate) % SWEEP_PERIOD;
        // Lissajous sweep so both axes get exercised
        let base = Vec2::new(self.phase.sin(), (self.phase * 0.7).cos()) * self.amplitude;
        let n = self.noise.abs();
        let jitter = Vec2::new(self.rng.random_range(-n..=n), self.rng.random_range(-n..=n));
        Some((base + jitter).clamp(Vec2::NEG_ONE, Vec2::ONE))
    }
}
