//! Builder API for guide configurations.

use super::error::ConfigError;
use super::{GuideConfig, RangeDeg};

/// Builder for [`GuideConfig`], starting from the defaults.
///
/// # Example
///
/// ```rust
/// use mount_guide::config::GuideConfigBuilder;
///
/// let config = GuideConfigBuilder::new()
///     .axis1_limits(-170.0, 170.0)
///     .past_meridian(10.0, 12.0)
///     .tangent_arm(true)
///     .build()
///     .unwrap();
///
/// assert!(config.tangent_arm);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GuideConfigBuilder {
    config: GuideConfig,
}

impl GuideConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set axis1 (hour angle) limits in degrees
    pub fn axis1_limits(mut self, min_deg: f64, max_deg: f64) -> Self {
        self.config.axis1 = RangeDeg::new(min_deg, max_deg);
        self
    }

    /// Set axis2 (declination/altitude) limits in degrees
    pub fn axis2_limits(mut self, min_deg: f64, max_deg: f64) -> Self {
        self.config.axis2 = RangeDeg::new(min_deg, max_deg);
        self
    }

    /// Set how far past the meridian each pier side may track, in degrees
    pub fn past_meridian(mut self, east_deg: f64, west_deg: f64) -> Self {
        self.config.past_meridian_east_deg = east_deg;
        self.config.past_meridian_west_deg = west_deg;
        self
    }

    pub fn altitude_limits(mut self, min_deg: f64, max_deg: f64) -> Self {
        self.config.altitude = RangeDeg::new(min_deg, max_deg);
        self
    }

    pub fn tangent_arm(mut self, tangent_arm: bool) -> Self {
        self.config.tangent_arm = tangent_arm;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<GuideConfig, ConfigError> {
        self.config.validated()
    }
}
