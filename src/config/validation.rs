//! Validation of guide configurations.
//!
//! Every rule runs and all violations are reported together, so an operator
//! can fix a configuration file in one pass.

use super::error::ConfigViolation;
use super::{GuideConfig, RangeDeg};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

fn ordered(name: &'static str, range: &RangeDeg) -> Check {
    if range.min_deg < range.max_deg {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::EmptyRange {
            name,
            min: range.min_deg,
            max: range.max_deg,
        })
    }
}

fn within(name: &'static str, value: f64, low: f64, high: f64) -> Check {
    if (low..=high).contains(&value) {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::OutOfRange {
            name,
            value,
            low,
            high,
        })
    }
}

/// Check every rule, accumulating ALL violations.
pub fn validate(config: &GuideConfig) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    let checks = vec![
        ordered("axis1", &config.axis1),
        within("axis1.min", config.axis1.min_deg, -360.0, 360.0),
        within("axis1.max", config.axis1.max_deg, -360.0, 360.0),
        ordered("axis2", &config.axis2),
        within("axis2.min", config.axis2.min_deg, -360.0, 360.0),
        within("axis2.max", config.axis2.max_deg, -360.0, 360.0),
        within(
            "past_meridian_east",
            config.past_meridian_east_deg,
            0.0,
            180.0,
        ),
        within(
            "past_meridian_west",
            config.past_meridian_west_deg,
            0.0,
            180.0,
        ),
        ordered("altitude", &config.altitude),
        within("altitude.min", config.altitude.min_deg, -90.0, 90.0),
        within("altitude.max", config.altitude.max_deg, -90.0, 90.0),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of a failed validation, empty on success.
pub fn violations(config: &GuideConfig) -> Vec<ConfigViolation> {
    match validate(config) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
