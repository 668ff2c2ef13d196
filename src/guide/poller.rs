//! Periodic supervision of guide sessions.
//!
//! Polling is the only path that finishes a brake and the only path that
//! enforces deadlines. Axes are advanced independently.

use super::controller::GuideController;
use crate::core::{Axis, GuideAction, TickSource, TransitionCause};
use crate::hal::{AxisActuator, MountPosition, TrackingRates};
use tracing::debug;

impl<A, P, R, C> GuideController<A, P, R, C>
where
    A: AxisActuator,
    P: MountPosition,
    R: TrackingRates,
    C: TickSource,
{
    /// Advance both axes. Call once per control tick.
    pub fn poll(&mut self) {
        for axis in Axis::ALL {
            self.poll_axis(axis);
        }
    }

    /// Advance one axis: confirm a finished brake, or stop an expired guide.
    pub fn poll_axis(&mut self, axis: Axis) {
        let now = self.now();
        let guided = self.guided_mut(axis);

        if guided.session.action().is_stopping() && !guided.actuator.is_auto_slew_active() {
            if guided.session.confirm_stopped() {
                debug!(%axis, "guide brake complete");
                self.record(
                    axis,
                    GuideAction::Break,
                    GuideAction::None,
                    now,
                    TransitionCause::BrakeComplete,
                );
                self.recompute_tracking();
            }
        } else if guided.session.is_expired(now) {
            debug!(%axis, deadline = guided.session.deadline().as_millis(), "guide timed out");
            self.stop_with(axis, TransitionCause::Timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Axis, GuideAction, GuideRateSelect, MountState, TransitionCause};
    use crate::testing::test_controller;

    #[test]
    fn brake_waits_for_actuator() {
        let mut controller = test_controller();
        controller
            .start(
                Axis::Axis1,
                GuideAction::Forward,
                GuideRateSelect::EightX,
                0,
                &MountState::default(),
            )
            .unwrap();
        controller.stop(Axis::Axis1);

        controller.poll();
        assert_eq!(controller.session(Axis::Axis1).action(), GuideAction::Break);

        controller.actuator_mut(Axis::Axis1).finish_slew();
        controller.poll();
        assert!(controller.session(Axis::Axis1).is_idle());
        assert_eq!(controller.tracking().recompute_count(), 1);
        assert_eq!(
            controller.history().last().map(|t| t.cause),
            Some(TransitionCause::BrakeComplete)
        );
    }

    #[test]
    fn offset_guide_times_out_directly_to_idle() {
        let mut controller = test_controller();
        controller
            .start(
                Axis::Axis2,
                GuideAction::Forward,
                GuideRateSelect::OneX,
                250,
                &MountState::default(),
            )
            .unwrap();

        controller.clock().advance(249);
        controller.poll();
        assert!(controller.session(Axis::Axis2).is_guiding());

        controller.clock().advance(1);
        controller.poll();
        assert!(controller.session(Axis::Axis2).is_idle());
        assert_eq!(controller.session(Axis::Axis2).offset_rate(), 0.0);
        assert_eq!(
            controller.history().last().map(|t| t.cause),
            Some(TransitionCause::Timeout)
        );
    }

    #[test]
    fn idle_axes_are_left_alone() {
        let mut controller = test_controller();
        controller.clock().advance(10_000);
        controller.poll();

        assert!(controller.is_idle());
        assert!(controller.history().is_empty());
        assert_eq!(controller.tracking().recompute_count(), 0);
    }
}
