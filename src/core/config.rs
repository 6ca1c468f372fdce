// Copyright @yucwang 2026

use crate::math::constants::{Float, Vector3f};

use std::fmt;

// Defaults reproduce the classic Cornell box framing.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    // Vertical field of view in degrees.
    pub fov: Float,
    pub samples_per_pixel: u32,
    pub eye_position: Vector3f,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 784,
            height: 784,
            fov: 40.0,
            samples_per_pixel: 16,
            eye_position: Vector3f::new(278.0, 273.0, -800.0),
        }
    }
}

impl RenderConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width,
            height: height,
            ..Default::default()
        }
    }

    pub fn with_fov(mut self, fov: Float) -> Self {
        self.fov = fov;
        self
    }

    pub fn with_samples_per_pixel(mut self, samples_per_pixel: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self
    }

    pub fn with_eye_position(mut self, eye_position: Vector3f) -> Self {
        self.eye_position = eye_position;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions(self.width, self.height));
        }
        if self.samples_per_pixel == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidDimensions(usize, usize),
    InvalidSampleCount,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions(width, height) => {
                write!(f, "image dimensions must be at least 1x1, got {}x{}",
                       width, height)
            }
            ConfigError::InvalidSampleCount => {
                write!(f, "samples per pixel must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 784);
        assert_eq!(config.height, 784);
        assert_eq!(config.samples_per_pixel, 16);
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = RenderConfig::new(0, 128);
        match config.validate() {
            Err(ConfigError::InvalidDimensions(0, 128)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_zero_samples() {
        let config = RenderConfig::new(64, 64).with_samples_per_pixel(0);
        match config.validate() {
            Err(ConfigError::InvalidSampleCount) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = RenderConfig::new(640, 360)
            .with_fov(60.0)
            .with_samples_per_pixel(4)
            .with_eye_position(Vector3f::new(0.0, 0.0, -1.0));
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 360);
        assert_eq!(config.fov, 60.0);
        assert_eq!(config.samples_per_pixel, 4);
        assert_eq!(config.eye_position[2], -1.0);
    }
}
