//! In-memory collaborators for host testing.
//!
//! These stand in for the actuator, transform and tracking layers so the
//! controller can be exercised without hardware. Always available so that
//! integration tests and demos can use them too.

use crate::config::GuideConfig;
use crate::core::{Coordinate, Direction, MountType, Tick, TickSource};
use crate::guide::GuideController;
use crate::hal::{AxisActuator, GuideOffsets, MountPosition, TrackingRates};
use std::cell::Cell;

/// Controllable millisecond clock.
#[derive(Clone, Debug, Default)]
pub struct MockTicks {
    now: Cell<u32>,
}

impl MockTicks {
    pub fn new(start_ms: u32) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    /// Advance the clock, wrapping like the hardware counter.
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl TickSource for MockTicks {
    fn now(&self) -> Tick {
        Tick(self.now.get())
    }
}

/// Actuator that records commands and lets tests decide when a slew ends.
#[derive(Clone, Debug, Default)]
pub struct MockActuator {
    fault: bool,
    motion_error: bool,
    max_slew_frequency: Option<f64>,
    slew_requests: Vec<Direction>,
    slewing: bool,
    stop_requests: usize,
    instrument: f64,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fault(&mut self, fault: bool) {
        self.fault = fault;
    }

    pub fn set_motion_error(&mut self, motion_error: bool) {
        self.motion_error = motion_error;
    }

    pub fn set_instrument_coordinate(&mut self, radians: f64) {
        self.instrument = radians;
    }

    /// The slew has decelerated to a stop.
    pub fn finish_slew(&mut self) {
        self.slewing = false;
    }

    pub fn max_slew_frequency(&self) -> Option<f64> {
        self.max_slew_frequency
    }

    pub fn slew_requests(&self) -> &[Direction] {
        &self.slew_requests
    }

    pub fn stop_requests(&self) -> usize {
        self.stop_requests
    }
}

impl AxisActuator for MockActuator {
    fn has_fault(&self) -> bool {
        self.fault
    }

    fn has_motion_error(&self) -> bool {
        self.motion_error
    }

    fn set_max_slew_frequency(&mut self, radians_per_second: f64) {
        self.max_slew_frequency = Some(radians_per_second);
    }

    fn start_auto_slew(&mut self, direction: Direction) {
        self.slew_requests.push(direction);
        self.slewing = true;
    }

    fn request_auto_slew_stop(&mut self) {
        self.stop_requests += 1;
    }

    fn is_auto_slew_active(&self) -> bool {
        self.slewing
    }

    fn instrument_coordinate(&self) -> f64 {
        self.instrument
    }
}

/// Position model returning a fixed coordinate and counting refreshes.
#[derive(Clone, Debug, Default)]
pub struct MockMount {
    coordinate: Coordinate,
    mount_type: MountType,
    refreshes: usize,
    horizon_conversions: usize,
}

impl MockMount {
    pub fn at(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Self::default()
        }
    }

    pub fn with_mount_type(mut self, mount_type: MountType) -> Self {
        self.mount_type = mount_type;
        self
    }

    pub fn set(&mut self, coordinate: Coordinate) {
        self.coordinate = coordinate;
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    pub fn horizon_count(&self) -> usize {
        self.horizon_conversions
    }
}

impl MountPosition for MockMount {
    fn refresh_position(&mut self) {
        self.refreshes += 1;
    }

    fn convert_equatorial_to_horizon(&mut self) {
        self.horizon_conversions += 1;
    }

    fn current(&self) -> Coordinate {
        self.coordinate
    }

    fn mount_type(&self) -> MountType {
        self.mount_type
    }
}

/// Tracking compositor that remembers every recompute.
#[derive(Clone, Debug, Default)]
pub struct RecordingTracking {
    recomputes: Vec<GuideOffsets>,
}

impl RecordingTracking {
    pub fn recompute_count(&self) -> usize {
        self.recomputes.len()
    }

    /// Offsets passed to the most recent recompute.
    pub fn last(&self) -> Option<GuideOffsets> {
        self.recomputes.last().copied()
    }
}

impl TrackingRates for RecordingTracking {
    fn recompute_tracking_rates(&mut self, offsets: GuideOffsets) {
        self.recomputes.push(offsets);
    }
}

/// Controller wired to the mock collaborators.
pub type TestController = GuideController<MockActuator, MockMount, RecordingTracking, MockTicks>;

/// Controller with default limits, a mount at the meridian, and the clock at zero.
pub fn test_controller() -> TestController {
    test_controller_at(0)
}

pub fn test_controller_at(start_ms: u32) -> TestController {
    GuideController::new(
        GuideConfig::default(),
        MockActuator::new(),
        MockActuator::new(),
        MockMount::default(),
        RecordingTracking::default(),
        MockTicks::new(start_ms),
    )
}
