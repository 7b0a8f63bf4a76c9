use anyhow::{Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::{self, Camera, MotionMode};
use crate::field::FieldSampler;

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fly Camera".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Camera start pose and tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub fov: f32,
    /// Velocity multiplier while Shift is held
    pub sprint_multiplier: f32,
    pub smoothing: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: camera::YAW,
            pitch: camera::PITCH,
            movement_speed: camera::SPEED,
            mouse_sensitivity: camera::SENSITIVITY,
            fov: camera::FOV,
            sprint_multiplier: 2.5,
            smoothing: false,
        }
    }
}

impl CameraConfig {
    pub fn build(&self) -> Camera {
        let pitch = self.pitch.clamp(-camera::PITCH_LIMIT, camera::PITCH_LIMIT);
        let position = Vec3::from_array(self.position);
        let mut camera = Camera::with_orientation(position, Vec3::Y, self.yaw, pitch);
        camera.movement_speed = self.movement_speed;
        camera.mouse_sensitivity = self.mouse_sensitivity;
        camera.set_fov(self.fov);
        if self.smoothing {
            camera.set_mode(MotionMode::Smoothed);
        }
        camera
    }
}

/// Top-level settings, loadable from a JSON file. Missing fields keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub sampler: FieldSampler,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid config JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_json(&json).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::CameraController;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = AppConfig::from_json(
            r#"{ "camera": { "fov": 30.0, "smoothing": true }, "sampler": "ripple" }"#,
        )
        .unwrap();

        assert_eq!(config.camera.fov, 30.0);
        assert!(config.camera.smoothing);
        assert_eq!(config.camera.movement_speed, camera::SPEED);
        assert_eq!(config.sampler, FieldSampler::Ripple);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(AppConfig::from_json(r#"{ "sampler": "spiral" }"#).is_err());
        assert!(AppConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = AppConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_build_camera_clamps() {
        let config = CameraConfig {
            pitch: 120.0,
            fov: 90.0,
            smoothing: true,
            ..CameraConfig::default()
        };
        let camera = config.build();

        assert_eq!(camera.pitch(), camera::PITCH_LIMIT);
        assert_eq!(camera.fov_degrees(), camera::MAX_FOV);
        assert_eq!(camera.mode(), MotionMode::Smoothed);
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 3.0));
    }
}
