//! Collaborator interfaces the guide controller drives.
//!
//! Step generation, coordinate transforms and tracking-rate composition live
//! outside this crate. The controller reaches them only through these traits,
//! which keeps it testable on the host with the mocks in [`crate::testing`].

use crate::core::{Coordinate, Direction, MountType};
use serde::{Deserialize, Serialize};

/// Per-axis motion layer.
pub trait AxisActuator {
    /// Driver or motor fault reported by the axis hardware.
    fn has_fault(&self) -> bool;

    /// Axis-level motion error (stall, following error, limit sense).
    fn has_motion_error(&self) -> bool;

    /// Cap the frequency of subsequent automatic slews, in radians per second.
    fn set_max_slew_frequency(&mut self, radians_per_second: f64);

    fn start_auto_slew(&mut self, direction: Direction);

    /// Ask an automatic slew to decelerate to a stop. Does not block.
    fn request_auto_slew_stop(&mut self);

    fn is_auto_slew_active(&self) -> bool;

    /// Raw actuator position, used as the axis2 coordinate on tangent-arm mounts.
    fn instrument_coordinate(&self) -> f64;
}

/// Coordinate transform and position model.
pub trait MountPosition {
    /// Recompute the current position from the axis counts.
    fn refresh_position(&mut self);

    /// Fill in horizon coordinates for the current position.
    fn convert_equatorial_to_horizon(&mut self);

    fn current(&self) -> Coordinate;

    fn mount_type(&self) -> MountType;
}

/// Offsets (sidereal multipliers) currently requested by both guide sessions.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GuideOffsets {
    pub axis1: f64,
    pub axis2: f64,
}

/// Tracking-rate compositor.
pub trait TrackingRates {
    /// Recompute drive frequencies with the given guide offsets applied.
    fn recompute_tracking_rates(&mut self, offsets: GuideOffsets);
}
