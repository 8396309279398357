//! Configuration type definitions
//!
//! Configuration is read from an optional `sandial.toml`; every field
//! has a default taken from the original machine constants, so an
//! absent or empty file yields a working setup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default face width/height in drawing units
pub const DEFAULT_FACE_SIZE: f64 = 600.0;

/// Default tick mark length in drawing units
pub const DEFAULT_TICK_LEN: f64 = 20.0;

/// Default head velocity in drawing units per second
pub const DEFAULT_VELOCITY: f64 = 3.0;

/// Default barrier rendezvous timeout in milliseconds
pub const DEFAULT_BARRIER_TIMEOUT_MS: u64 = 5_000;

/// Errors raised while validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Face dimensions must be positive and finite
    #[error("face size {0} is not a positive finite number")]
    BadFaceSize(f64),
    /// Velocity must be positive and finite
    #[error("velocity {0} is not a positive finite number")]
    BadVelocity(f64),
    /// Tick marks must fit inside the face
    #[error("tick length {0} does not fit inside the face")]
    BadTickLen(f64),
}

/// Clock face dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Face width in drawing units
    pub width: f64,
    /// Face height in drawing units
    pub height: f64,
    /// Length of the four tick marks
    pub tick_len: f64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FACE_SIZE,
            height: DEFAULT_FACE_SIZE,
            tick_len: DEFAULT_TICK_LEN,
        }
    }
}

impl FaceConfig {
    /// Face center coordinates
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Outer radius: distance from center to an edge midpoint
    pub fn radius(&self) -> f64 {
        self.width / 2.0
    }

    /// Inner radius used for the hour hand (half the outer radius)
    pub fn inner_radius(&self) -> f64 {
        self.radius() / 2.0
    }

    /// Validate the dimensions
    pub fn validate(&self) -> Result<(), ConfigError> {
        for v in [self.width, self.height] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::BadFaceSize(v));
            }
        }
        if !self.tick_len.is_finite() || self.tick_len < 0.0 || self.tick_len >= self.radius() {
            return Err(ConfigError::BadTickLen(self.tick_len));
        }
        Ok(())
    }
}

/// Motion parameters for the drawing head
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Head velocity in drawing units per second
    pub units_per_s: f64,
    /// Barrier rendezvous timeout in milliseconds
    pub barrier_timeout_ms: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            units_per_s: DEFAULT_VELOCITY,
            barrier_timeout_ms: DEFAULT_BARRIER_TIMEOUT_MS,
        }
    }
}

impl MotionConfig {
    /// Barrier timeout as a duration
    pub fn barrier_timeout(&self) -> core::time::Duration {
        core::time::Duration::from_millis(self.barrier_timeout_ms)
    }

    /// Travel time for a relative move of the given length
    pub fn travel_time(&self, delta: f64) -> core::time::Duration {
        core::time::Duration::from_secs_f64(delta.abs() / self.units_per_s)
    }

    /// Validate the parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.units_per_s.is_finite() || self.units_per_s <= 0.0 {
            return Err(ConfigError::BadVelocity(self.units_per_s));
        }
        Ok(())
    }
}

/// Top-level machine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SandialConfig {
    /// Clock face dimensions
    pub face: FaceConfig,
    /// Drawing head motion parameters
    pub motion: MotionConfig,
}

impl SandialConfig {
    /// Validate all sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.face.validate()?;
        self.motion.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SandialConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.face.width, 600.0);
        assert_eq!(config.face.center(), (300.0, 300.0));
        assert_eq!(config.face.inner_radius(), 150.0);
        assert_eq!(config.motion.units_per_s, 3.0);
    }

    #[test]
    fn test_travel_time() {
        let motion = MotionConfig {
            units_per_s: 3.0,
            ..Default::default()
        };
        assert_eq!(motion.travel_time(6.0).as_secs_f64(), 2.0);
        assert_eq!(motion.travel_time(-6.0).as_secs_f64(), 2.0);
        assert_eq!(motion.travel_time(0.0).as_secs_f64(), 0.0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_velocity = MotionConfig {
            units_per_s: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad_velocity.validate(),
            Err(ConfigError::BadVelocity(0.0))
        );

        let bad_face = FaceConfig {
            width: -600.0,
            ..Default::default()
        };
        assert!(matches!(
            bad_face.validate(),
            Err(ConfigError::BadFaceSize(_))
        ));

        let bad_tick = FaceConfig {
            tick_len: 400.0,
            ..Default::default()
        };
        assert_eq!(bad_tick.validate(), Err(ConfigError::BadTickLen(400.0)));
    }
}
