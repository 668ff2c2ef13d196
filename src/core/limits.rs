//! Directional limit checks for guide moves.
//!
//! Limits are pier-side relative: after a meridian flip the limit that stops a
//! "forward" move on one side stops a "reverse" move on the other. All angles
//! are in radians.

use super::action::{Axis, Direction};
use super::mount::{MeridianFlip, MountState};
use crate::hal::MountPosition;
use serde::{Deserialize, Serialize};

/// Side of the pier the optical tube is on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum PierSide {
    #[default]
    None,
    East,
    West,
}

/// Mount geometry as reported by the coordinate transform.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum MountType {
    #[default]
    Equatorial,
    Altazimuth,
}

/// Current instrument position.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coordinate {
    /// Hour angle
    pub h: f64,
    /// Declination
    pub d: f64,
    /// Altitude, valid after a horizon conversion
    pub a: f64,
    pub pier_side: PierSide,
}

/// Inclusive `min..=max` range of an axis.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

/// Configured mount limits.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct MountLimits {
    pub axis1: AxisRange,
    pub axis2: AxisRange,
    /// How far past the meridian an east-side mount may track (positive angle)
    pub past_meridian_east: f64,
    /// How far past the meridian a west-side mount may track (positive angle)
    pub past_meridian_west: f64,
    pub altitude: AxisRange,
}

/// Pure axis1 check against an already refreshed position.
pub fn axis1_move_allowed(
    direction: Direction,
    position: &Coordinate,
    meridian_flip: MeridianFlip,
    limits: &MountLimits,
) -> bool {
    let flips = meridian_flip != MeridianFlip::Never;
    match direction {
        Direction::Forward => {
            let past_meridian = flips
                && position.pier_side == PierSide::East
                && position.h < -limits.past_meridian_east;
            !(past_meridian || position.h < limits.axis1.min)
        }
        Direction::Reverse => {
            let past_meridian = flips
                && position.pier_side == PierSide::West
                && position.h > limits.past_meridian_west;
            !(past_meridian || position.h > limits.axis1.max)
        }
    }
}

/// Pure axis2 check.
///
/// `a2` is the axis2 coordinate in use: the instrument coordinate on a
/// tangent arm, otherwise altitude (alt-az) or declination.
pub fn axis2_move_allowed(
    direction: Direction,
    a2: f64,
    position: &Coordinate,
    mount_type: MountType,
    limits: &MountLimits,
) -> bool {
    let below = a2 < limits.axis2.min;
    let above = a2 > limits.axis2.max;
    let altazm = mount_type == MountType::Altazimuth;
    let (below_side, above_side) = match direction {
        Direction::Forward => (PierSide::West, PierSide::East),
        Direction::Reverse => (PierSide::East, PierSide::West),
    };

    if below && position.pier_side == below_side {
        return false;
    }
    if above && position.pier_side == above_side {
        return false;
    }
    match direction {
        Direction::Forward => !(altazm && position.a > limits.altitude.max),
        Direction::Reverse => !(altazm && position.a < limits.altitude.min),
    }
}

/// Answers whether a directional guide move is currently allowed.
pub struct LimitValidator<'a> {
    limits: &'a MountLimits,
    mount: &'a MountState,
    tangent_arm: bool,
}

impl<'a> LimitValidator<'a> {
    pub fn new(limits: &'a MountLimits, mount: &'a MountState, tangent_arm: bool) -> Self {
        Self {
            limits,
            mount,
            tangent_arm,
        }
    }

    /// Refresh the mount position and check `direction` on `axis`.
    ///
    /// Axis2 additionally converts the refreshed position to horizon
    /// coordinates. `axis2_instrument` is only read on tangent-arm mounts.
    pub fn is_move_allowed<P: MountPosition>(
        &self,
        axis: Axis,
        direction: Direction,
        position: &mut P,
        axis2_instrument: f64,
    ) -> bool {
        if !self.mount.limits_enabled {
            return true;
        }
        position.refresh_position();

        match axis {
            Axis::Axis1 => axis1_move_allowed(
                direction,
                &position.current(),
                self.mount.meridian_flip,
                self.limits,
            ),
            Axis::Axis2 => {
                position.convert_equatorial_to_horizon();
                let current = position.current();
                let mount_type = position.mount_type();
                let a2 = if self.tangent_arm {
                    axis2_instrument
                } else if mount_type == MountType::Altazimuth {
                    current.a
                } else {
                    current.d
                };
                axis2_move_allowed(direction, a2, &current, mount_type, self.limits)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockMount;

    fn limits() -> MountLimits {
        MountLimits {
            axis1: AxisRange {
                min: (-180.0f64).to_radians(),
                max: 180.0f64.to_radians(),
            },
            axis2: AxisRange {
                min: (-90.0f64).to_radians(),
                max: 90.0f64.to_radians(),
            },
            past_meridian_east: 15.0f64.to_radians(),
            past_meridian_west: 15.0f64.to_radians(),
            altitude: AxisRange {
                min: (-10.0f64).to_radians(),
                max: 85.0f64.to_radians(),
            },
        }
    }

    fn at(h_deg: f64, pier_side: PierSide) -> Coordinate {
        Coordinate {
            h: h_deg.to_radians(),
            pier_side,
            ..Coordinate::default()
        }
    }

    #[test]
    fn east_pier_past_meridian_blocks_forward() {
        let position = at(-20.0, PierSide::East);
        assert!(!axis1_move_allowed(
            Direction::Forward,
            &position,
            MeridianFlip::Auto,
            &limits()
        ));
        assert!(axis1_move_allowed(
            Direction::Reverse,
            &position,
            MeridianFlip::Auto,
            &limits()
        ));
    }

    #[test]
    fn west_pier_past_meridian_blocks_reverse() {
        let position = at(20.0, PierSide::West);
        assert!(!axis1_move_allowed(
            Direction::Reverse,
            &position,
            MeridianFlip::Always,
            &limits()
        ));
        assert!(axis1_move_allowed(
            Direction::Forward,
            &position,
            MeridianFlip::Always,
            &limits()
        ));
    }

    #[test]
    fn meridian_threshold_ignored_when_flip_disabled() {
        let position = at(-20.0, PierSide::East);
        assert!(axis1_move_allowed(
            Direction::Forward,
            &position,
            MeridianFlip::Never,
            &limits()
        ));
    }

    #[test]
    fn axis1_range_applies_regardless_of_pier_side() {
        let mut tight = limits();
        tight.axis1.min = (-30.0f64).to_radians();
        tight.axis1.max = 30.0f64.to_radians();

        let low = at(-40.0, PierSide::None);
        assert!(!axis1_move_allowed(
            Direction::Forward,
            &low,
            MeridianFlip::Never,
            &tight
        ));
        let high = at(40.0, PierSide::None);
        assert!(!axis1_move_allowed(
            Direction::Reverse,
            &high,
            MeridianFlip::Never,
            &tight
        ));
    }

    #[test]
    fn axis2_limits_follow_pier_side() {
        let l = limits();
        let below = l.axis2.min - 0.01;
        let west = at(0.0, PierSide::West);
        let east = at(0.0, PierSide::East);

        assert!(!axis2_move_allowed(
            Direction::Forward,
            below,
            &west,
            MountType::Equatorial,
            &l
        ));
        assert!(axis2_move_allowed(
            Direction::Forward,
            below,
            &east,
            MountType::Equatorial,
            &l
        ));
        assert!(!axis2_move_allowed(
            Direction::Reverse,
            below,
            &east,
            MountType::Equatorial,
            &l
        ));

        let above = l.axis2.max + 0.01;
        assert!(!axis2_move_allowed(
            Direction::Forward,
            above,
            &east,
            MountType::Equatorial,
            &l
        ));
        assert!(!axis2_move_allowed(
            Direction::Reverse,
            above,
            &west,
            MountType::Equatorial,
            &l
        ));
    }

    #[test]
    fn altazimuth_altitude_limits() {
        let l = limits();
        let mut high = at(0.0, PierSide::None);
        high.a = 88.0f64.to_radians();
        assert!(!axis2_move_allowed(
            Direction::Forward,
            high.a,
            &high,
            MountType::Altazimuth,
            &l
        ));
        assert!(axis2_move_allowed(
            Direction::Reverse,
            high.a,
            &high,
            MountType::Altazimuth,
            &l
        ));

        let mut low = at(0.0, PierSide::None);
        low.a = (-12.0f64).to_radians();
        assert!(!axis2_move_allowed(
            Direction::Reverse,
            low.a,
            &low,
            MountType::Altazimuth,
            &l
        ));
        // equatorial mounts ignore the altitude range
        assert!(axis2_move_allowed(
            Direction::Reverse,
            0.0,
            &low,
            MountType::Equatorial,
            &l
        ));
    }

    #[test]
    fn disabled_limits_skip_refresh() {
        let l = limits();
        let mount = MountState {
            limits_enabled: false,
            ..MountState::default()
        };
        let mut position = MockMount::at(at(-170.0, PierSide::East));
        let validator = LimitValidator::new(&l, &mount, false);

        assert!(validator.is_move_allowed(Axis::Axis1, Direction::Forward, &mut position, 0.0));
        assert_eq!(position.refresh_count(), 0);
    }

    #[test]
    fn validator_refreshes_before_deciding() {
        let l = limits();
        let mount = MountState::default();
        let mut position = MockMount::at(at(-20.0, PierSide::East));
        let validator = LimitValidator::new(&l, &mount, false);

        assert!(!validator.is_move_allowed(Axis::Axis1, Direction::Forward, &mut position, 0.0));
        assert_eq!(position.refresh_count(), 1);
        assert_eq!(position.horizon_count(), 0);

        validator.is_move_allowed(Axis::Axis2, Direction::Forward, &mut position, 0.0);
        assert_eq!(position.refresh_count(), 2);
        assert_eq!(position.horizon_count(), 1);
    }

    #[test]
    fn tangent_arm_uses_instrument_coordinate() {
        let l = limits();
        let mount = MountState::default();
        let mut position = MockMount::at(at(0.0, PierSide::West));
        let validator = LimitValidator::new(&l, &mount, true);
        let beyond_min = l.axis2.min - 0.1;

        assert!(!validator.is_move_allowed(
            Axis::Axis2,
            Direction::Forward,
            &mut position,
            beyond_min
        ));
        assert!(validator.is_move_allowed(Axis::Axis2, Direction::Forward, &mut position, 0.0));
    }
}
