//! Tilt Motion entry point
//!
//! Headless run of the motion scene driven by a simulated accelerometer.
//! Logs progress once per simulated second and prints the final state as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use tilt_motion::sensor::{SensorSession, SimulatedTilt};
use tilt_motion::sim::Bounds;
use tilt_motion::{MotionScene, MotionSettings, ScenePreset};

#[derive(Parser, Debug)]
#[command(name = "tilt-motion", about = "Accelerometer-steered motion demo")]
struct Cli {
    /// Settings JSON (missing file falls back to defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Preset applied on top of the settings: clamp | bounce
    #[arg(long)]
    preset: Option<String>,
    /// Viewport width
    #[arg(long, default_value_t = 480.0)]
    width: f32,
    /// Viewport height
    #[arg(long, default_value_t = 320.0)]
    height: f32,
    /// Frames to simulate
    #[arg(long, default_value_t = 600)]
    frames: u32,
    /// Display refresh rate driving the frame timestamps
    #[arg(long, default_value_t = 60.0)]
    hz: f64,
    /// Seed for the simulated sensor
    #[arg(long, default_value_t = 1)]
    seed: u64,
}

/// Frame timestamps are `frame / hz`, so hz must be usable as a divisor
fn check_refresh_rate(hz: f64) -> Result<()> {
    if !(hz.is_finite() && hz > 0.0) {
        bail!("--hz must be a positive finite number, got {hz}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Tilt Motion (native) starting...");

    let mut settings = match &cli.settings {
        Some(path) => MotionSettings::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => MotionSettings::default(),
    };
    if let Some(name) = &cli.preset {
        let Some(preset) = ScenePreset::from_str(name) else {
            bail!("unknown preset '{name}' (expected clamp or bounce)");
        };
        settings.apply_preset(preset);
        log::info!("Preset: {}", preset.as_str());
    }
    settings.validate()?;
    check_refresh_rate(cli.hz)?;

    let bounds = Bounds::new(cli.width, cli.height);
    let mut scene = MotionScene::new(bounds, settings);
    let mut sensor = SensorSession::start(SimulatedTilt::new(cli.seed));
    let per_second = cli.hz.round().max(1.0) as u32;
    let mut bounces = 0u32;

    for frame in 0..cli.frames {
        let now = frame as f64 / cli.hz;
        let report = scene.update(now, sensor.reading());
        if report.collision.any() {
            bounces += 1;
        }
        if frame % per_second == 0 {
            let state = scene.state();
            log::info!(
                "t={:.2}s pos=({:.1}, {:.1}) vel=({:.1}, {:.1}) heading={:.1}°",
                now,
                state.position.x,
                state.position.y,
                state.velocity.x,
                state.velocity.y,
                state.heading.to_degrees()
            );
        }
    }

    log::info!("{} frames, {} edge hits", scene.frames(), bounces);
    println!("{}", serde_json::to_string_pretty(scene.state())?);
    Ok(())
}
