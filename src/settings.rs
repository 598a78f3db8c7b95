//! Motion tuning and presets
//!
//! Loaded from a JSON file when one is given, otherwise the Bounce preset.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How the body reacts to reaching a scene edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryMode {
    /// Stop at the edge, keep velocity
    Clamp,
    /// Reflect off the edge with damping
    #[default]
    Bounce,
}

/// Response when both edges are hit in the same tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CornerResponse {
    /// Vertical edge response then horizontal edge response (damped twice)
    Sequential,
    /// Single reflection on both axes, damped once
    #[default]
    Combined,
}

/// Named presets for the two scene flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScenePreset {
    /// Hard clamp, no facing rotation
    Clamp,
    /// Damped bounce with facing rotation
    #[default]
    Bounce,
}

impl ScenePreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenePreset::Clamp => "Clamp",
            ScenePreset::Bounce => "Bounce",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clamp" => Some(ScenePreset::Clamp),
            "bounce" | "bouncy" => Some(ScenePreset::Bounce),
            _ => None,
        }
    }
}

/// Errors from loading or validating settings
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings: {e}"),
            SettingsError::Parse(e) => write!(f, "malformed settings: {e}"),
            SettingsError::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}

/// Motion tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    // === Integration ===
    /// Acceleration at full tilt (units/s²)
    pub max_acceleration: f32,
    /// Per-axis speed cap (units/s)
    pub max_speed: f32,
    /// Low-pass weight of the newest sample (0, 1]
    pub filter_factor: f32,

    // === Timing ===
    /// Smallest step a frame advances by (seconds)
    pub min_frame_dt: f32,
    /// Largest step a frame advances by, if any
    pub max_frame_dt: Option<f32>,

    // === Edges ===
    pub boundary: BoundaryMode,
    /// Fraction of velocity/acceleration kept after a bounce [0, 1]
    pub bounce_damping: f32,
    pub corner_response: CornerResponse,

    // === Facing ===
    /// Speed above which heading follows travel; None disables rotation
    pub rotation_threshold: Option<f32>,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            max_acceleration: MAX_ACCELERATION,
            max_speed: MAX_SPEED,
            filter_factor: FILTER_FACTOR,

            min_frame_dt: MIN_FRAME_DT,
            max_frame_dt: None,

            boundary: BoundaryMode::Bounce,
            bounce_damping: BOUNCE_DAMPING,
            corner_response: CornerResponse::Combined,

            rotation_threshold: Some(ROTATION_THRESHOLD),
        }
    }
}

impl MotionSettings {
    /// Create settings from a preset
    pub fn from_preset(preset: ScenePreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Switch edge behavior and rotation to match a preset
    pub fn apply_preset(&mut self, preset: ScenePreset) {
        match preset {
            ScenePreset::Clamp => {
                self.boundary = BoundaryMode::Clamp;
                self.rotation_threshold = None;
            }
            ScenePreset::Bounce => {
                self.boundary = BoundaryMode::Bounce;
                if self.rotation_threshold.is_none() {
                    self.rotation_threshold = Some(ROTATION_THRESHOLD);
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: String| -> Result<(), SettingsError> { Err(SettingsError::Invalid(msg)) };

        if !(self.filter_factor > 0.0 && self.filter_factor <= 1.0) {
            return invalid(format!("filter_factor {} not in (0, 1]", self.filter_factor));
        }
        if !(0.0..=1.0).contains(&self.bounce_damping) {
            return invalid(format!("bounce_damping {} not in [0, 1]", self.bounce_damping));
        }
        if !(self.max_speed.is_finite() && self.max_speed >= 0.0) {
            return invalid(format!("max_speed {} must be finite and >= 0", self.max_speed));
        }
        if !(self.max_acceleration.is_finite() && self.max_acceleration >= 0.0) {
            return invalid(format!(
                "max_acceleration {} must be finite and >= 0",
                self.max_acceleration
            ));
        }
        if !(self.min_frame_dt.is_finite() && self.min_frame_dt >= 0.0) {
            return invalid(format!("min_frame_dt {} must be finite and >= 0", self.min_frame_dt));
        }
        if let Some(max) = self.max_frame_dt {
            if !(max >= self.min_frame_dt) {
                return invalid(format!(
                    "max_frame_dt {} below min_frame_dt {}",
                    max, self.min_frame_dt
                ));
            }
        }
        if let Some(threshold) = self.rotation_threshold {
            if !(threshold >= 0.0) {
                return invalid(format!("rotation_threshold {threshold} must be >= 0"));
            }
        }
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from disk; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_bounce_variant() {
        let settings = MotionSettings::default();
        assert_eq!(settings.boundary, BoundaryMode::Bounce);
        assert_eq!(settings.max_speed, 200.0);
        assert_eq!(settings.max_acceleration, 400.0);
        assert_eq!(settings.bounce_damping, 0.4);
        assert_eq!(settings.rotation_threshold, Some(40.0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_clamp_preset() {
        let settings = MotionSettings::from_preset(ScenePreset::Clamp);
        assert_eq!(settings.boundary, BoundaryMode::Clamp);
        assert_eq!(settings.rotation_threshold, None);
    }

    #[test]
    fn test_preset_names() {
        assert_eq!(ScenePreset::from_str("CLAMP"), Some(ScenePreset::Clamp));
        assert_eq!(ScenePreset::from_str("bouncy"), Some(ScenePreset::Bounce));
        assert_eq!(ScenePreset::from_str("wobble"), None);
        assert_eq!(ScenePreset::Bounce.as_str(), "Bounce");
    }

    #[test]
    fn test_json_preserves_preset() {
        let settings = MotionSettings::from_preset(ScenePreset::Clamp);
        let json = settings.to_json().unwrap();
        let parsed = MotionSettings::from_json(&json).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed = MotionSettings::from_json(r#"{ "max_speed": 120.0 }"#).unwrap();
        assert_eq!(parsed.max_speed, 120.0);
        assert_eq!(parsed.filter_factor, 0.75);
    }

    #[test]
    fn test_invalid_damping_rejected() {
        let err = MotionSettings::from_json(r#"{ "bounce_damping": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_invalid_frame_range_rejected() {
        let settings = MotionSettings {
            max_frame_dt: Some(0.01),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = MotionSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = MotionSettings::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(settings, MotionSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("motion.json");
        let mut settings = MotionSettings::default();
        settings.corner_response = CornerResponse::Sequential;
        settings.save(&path).unwrap();
        assert_eq!(MotionSettings::load(&path).unwrap(), settings);
    }
}
