//! Frame-loop owner of the motion state
//!
//! The scene holds everything that persists between frames and runs one
//! integration step per frame callback.

use glam::Vec2;

use crate::settings::MotionSettings;
use crate::sim::{Bounds, FrameClock, LowPassFilter, MotionState, TickInput, TickReport, tick};

/// Single steered body inside a resizable viewport
#[derive(Debug, Clone)]
pub struct MotionScene {
    state: MotionState,
    filter: LowPassFilter,
    clock: FrameClock,
    bounds: Bounds,
    settings: MotionSettings,
    frames: u64,
}

impl MotionScene {
    /// Body spawns near the bottom-right corner, at rest
    pub fn new(bounds: Bounds, settings: MotionSettings) -> Self {
        Self {
            state: MotionState::spawn(bounds),
            filter: LowPassFilter::new(settings.filter_factor),
            clock: FrameClock::new(settings.min_frame_dt, settings.max_frame_dt),
            bounds,
            settings,
            frames: 0,
        }
    }

    /// Run one frame at scheduler time `now` (seconds)
    pub fn update(&mut self, now: f64, sample: Option<Vec2>) -> TickReport {
        let dt = self.clock.advance(now);
        self.frames += 1;
        tick(
            &mut self.state,
            &mut self.filter,
            &TickInput { sample },
            self.bounds,
            &self.settings,
            dt,
        )
    }

    /// Viewport changed; the body is pulled back inside immediately
    pub fn resize(&mut self, bounds: Bounds) {
        log::info!(
            "Scene resized {}x{} -> {}x{}",
            self.bounds.width,
            self.bounds.height,
            bounds.width,
            bounds.height
        );
        self.bounds = bounds;
        self.state.position = bounds.clamp(self.state.position);
    }

    /// Drop the frame timing so the next update does not see the gap
    pub fn pause(&mut self) {
        self.clock.reset();
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    pub fn filter(&self) -> &LowPassFilter {
        &self.filter
    }

    /// Frames processed since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ScenePreset;

    #[test]
    fn test_new_scene_spawns_at_rest() {
        let scene = MotionScene::new(Bounds::new(480.0, 320.0), MotionSettings::default());
        assert_eq!(scene.state().position, Vec2::new(430.0, 60.0));
        assert_eq!(scene.state().velocity, Vec2::ZERO);
        assert_eq!(scene.frames(), 0);
    }

    #[test]
    fn test_update_without_sensor_is_still() {
        let mut scene = MotionScene::new(Bounds::new(480.0, 320.0), MotionSettings::default());
        for i in 0..10 {
            scene.update(i as f64 / 60.0, None);
        }
        assert_eq!(scene.state().position, Vec2::new(430.0, 60.0));
        assert_eq!(scene.frames(), 10);
    }

    #[test]
    fn test_tilt_moves_body_left() {
        // Device y tilt drives scene -x
        let mut scene = MotionScene::new(Bounds::new(480.0, 320.0), MotionSettings::default());
        let start = scene.state().position;
        for i in 0..30 {
            scene.update(i as f64 / 30.0, Some(Vec2::new(0.0, 1.0)));
        }
        assert!(scene.state().position.x < start.x);
        assert!(scene.state().velocity.x < 0.0);
        assert!((scene.state().position.y - start.y).abs() < 1e-3);
    }

    #[test]
    fn test_first_frame_uses_min_dt() {
        let mut scene = MotionScene::new(Bounds::new(480.0, 320.0), MotionSettings::default());
        let report = scene.update(5000.0, None);
        assert!((report.dt - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_resize_clamps_position() {
        let mut scene = MotionScene::new(
            Bounds::new(480.0, 320.0),
            MotionSettings::from_preset(ScenePreset::Clamp),
        );
        scene.resize(Bounds::new(200.0, 40.0));
        assert_eq!(scene.state().position, Vec2::new(200.0, 40.0));
        assert_eq!(scene.bounds(), Bounds::new(200.0, 40.0));
    }

    #[test]
    fn test_pause_resets_clock() {
        let mut scene = MotionScene::new(Bounds::new(480.0, 320.0), MotionSettings::default());
        scene.update(0.0, None);
        scene.pause();
        let report = scene.update(60.0, None);
        assert!((report.dt - 1.0 / 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_filter_uses_configured_factor() {
        let settings = MotionSettings {
            filter_factor: 0.5,
            ..Default::default()
        };
        let mut scene = MotionScene::new(Bounds::new(480.0, 320.0), settings);
        scene.update(0.0, Some(Vec2::new(1.0, 0.0)));
        assert!((scene.filter().smoothed.x - 0.5).abs() < 1e-6);
    }
}
