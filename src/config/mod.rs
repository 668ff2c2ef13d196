//! Guide controller configuration.
//!
//! Limits are written in degrees, the way an operator thinks about them, and
//! converted to radians for the controller.
//!
//! # Example
//!
//! ```rust
//! use mount_guide::config::GuideConfig;
//!
//! let config = GuideConfig::from_json(
//!     r#"{
//!         "axis1": { "min_deg": -180.0, "max_deg": 180.0 },
//!         "axis2": { "min_deg": -90.0, "max_deg": 90.0 },
//!         "past_meridian_east_deg": 15.0,
//!         "past_meridian_west_deg": 15.0,
//!         "altitude": { "min_deg": -10.0, "max_deg": 85.0 },
//!         "tangent_arm": false
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!((config.limits().past_meridian_east - 15.0f64.to_radians()).abs() < 1e-12);
//! ```

pub mod builder;
pub mod error;
pub mod validation;

pub use builder::GuideConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use crate::core::{AxisRange, MountLimits};
use serde::{Deserialize, Serialize};

/// Inclusive range in degrees.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct RangeDeg {
    pub min_deg: f64,
    pub max_deg: f64,
}

impl RangeDeg {
    pub fn new(min_deg: f64, max_deg: f64) -> Self {
        Self { min_deg, max_deg }
    }

    fn to_radians(self) -> AxisRange {
        AxisRange {
            min: self.min_deg.to_radians(),
            max: self.max_deg.to_radians(),
        }
    }
}

/// Static configuration of the guide controller.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GuideConfig {
    pub axis1: RangeDeg,
    pub axis2: RangeDeg,
    pub past_meridian_east_deg: f64,
    pub past_meridian_west_deg: f64,
    pub altitude: RangeDeg,
    /// Axis2 is a tangent arm; limits apply to the raw instrument coordinate
    #[serde(default)]
    pub tangent_arm: bool,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            axis1: RangeDeg::new(-180.0, 180.0),
            axis2: RangeDeg::new(-90.0, 90.0),
            past_meridian_east_deg: 15.0,
            past_meridian_west_deg: 15.0,
            altitude: RangeDeg::new(-10.0, 85.0),
            tangent_arm: false,
        }
    }
}

impl GuideConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GuideConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validated()
    }

    /// Return `self` if every rule passes, otherwise all violations.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let violations = validation::violations(&self);
        if violations.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(violations))
        }
    }

    /// Limits in radians.
    pub fn limits(&self) -> MountLimits {
        MountLimits {
            axis1: self.axis1.to_radians(),
            axis2: self.axis2.to_radians(),
            past_meridian_east: self.past_meridian_east_deg.to_radians(),
            past_meridian_west: self.past_meridian_west_deg.to_radians(),
            altitude: self.altitude.to_radians(),
        }
    }
}
