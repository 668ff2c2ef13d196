//! Guide rate selection.
//!
//! Maps the symbolic rate selectors used by the command protocol to a
//! multiplier of the sidereal rate.

use super::action::Axis;
use serde::{Deserialize, Serialize};

/// Sidereal multiplier used by the custom selector until it becomes configurable.
pub const CUSTOM_RATE: f64 = 48.0;

/// Rates at or below this multiplier are applied as a tracking offset,
/// faster rates as an independent slew.
pub const OFFSET_RATE_LIMIT: f64 = 2.0;

/// Symbolic guide rate. Discriminants match the command protocol's indices.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum GuideRateSelect {
    Quarter = 0,
    Half = 1,
    OneX = 2,
    TwoX = 3,
    FourX = 4,
    EightX = 5,
    TwentyX = 6,
    FortyEightX = 7,
    HalfMax = 8,
    Max = 9,
    Custom = 10,
}

impl GuideRateSelect {
    /// Decode a protocol index, `None` when out of range.
    pub fn from_index(index: u8) -> Option<Self> {
        let select = match index {
            0 => Self::Quarter,
            1 => Self::Half,
            2 => Self::OneX,
            3 => Self::TwoX,
            4 => Self::FourX,
            5 => Self::EightX,
            6 => Self::TwentyX,
            7 => Self::FortyEightX,
            8 => Self::HalfMax,
            9 => Self::Max,
            10 => Self::Custom,
            _ => return None,
        };
        Some(select)
    }

    pub fn index(self) -> u8 {
        self as u8
    }

    /// The three slowest tiers (quarter, half, 1x) are refused while the
    /// mount or axis reports an error; faster tiers are not.
    pub fn is_slow_tier(self) -> bool {
        self.index() < 3
    }
}

/// Axis timing parameters that the maximum-rate selectors derive from.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct StepTiming {
    /// Current step period in microseconds
    pub us_per_step_current: f64,
    /// Axis1 steps per measure, as reported by the axis1 actuator
    pub axis1_steps_per_measure: f64,
}

impl Default for StepTiming {
    fn default() -> Self {
        Self {
            us_per_step_current: 64.0,
            axis1_steps_per_measure: 12_960_000.0 / 360.0,
        }
    }
}

/// Resolve a selector to a sidereal multiplier for the given axis.
///
/// `HalfMax` and `Max` use axis1's step scale for both axes. `HalfMax`
/// divides a doubled numerator, so it resolves to twice `Max` despite its
/// name; existing clients depend on that value.
pub fn resolve_rate(select: GuideRateSelect, axis: Axis, timing: &StepTiming) -> f64 {
    match select {
        GuideRateSelect::Quarter => 0.25,
        GuideRateSelect::Half => 0.5,
        GuideRateSelect::OneX => 1.0,
        GuideRateSelect::TwoX => 2.0,
        GuideRateSelect::FourX => 4.0,
        GuideRateSelect::EightX => 8.0,
        GuideRateSelect::TwentyX => 20.0,
        GuideRateSelect::FortyEightX => 48.0,
        GuideRateSelect::HalfMax => {
            (2_000_000.0 / timing.us_per_step_current)
                / timing.axis1_steps_per_measure.to_radians()
        }
        GuideRateSelect::Max => {
            (1_000_000.0 / timing.us_per_step_current)
                / timing.axis1_steps_per_measure.to_radians()
        }
        GuideRateSelect::Custom => match axis {
            Axis::Axis1 | Axis::Axis2 => CUSTOM_RATE,
        },
    }
}

/// Maximum slew frequency (radians per second) for a sidereal multiplier.
pub fn slew_frequency(rate: f64) -> f64 {
    (rate / 240.0).to_radians()
}
