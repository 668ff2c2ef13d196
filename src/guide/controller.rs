//! Dual-axis guide controller.
//!
//! Owns both axis sessions and drives the collaborators on their behalf.
//! `start`, `stop` and [`GuideController::poll`] must all be called from the
//! same control tick; none of them block.

use super::session::{GuideMode, GuideSession, StopOutcome};
use crate::config::GuideConfig;
use crate::core::{
    resolve_rate, slew_frequency, Axis, Direction, Guard, GuideAction, GuideHistory,
    GuideRateSelect, GuideTransition, LimitValidator, MountLimits, MountState, Tick,
    TickSource, TransitionCause,
};
use crate::error::{GuideError, GuideResult};
use crate::hal::{AxisActuator, GuideOffsets, MountPosition, TrackingRates};
use crate::status::GuideStatus;
use tracing::{debug, info};

/// A guide session paired with the actuator of its axis.
#[derive(Debug)]
pub(crate) struct GuidedAxis<A> {
    pub(crate) session: GuideSession,
    pub(crate) actuator: A,
}

/// Guide controller for a two-axis mount.
pub struct GuideController<A, P, R, C> {
    config: GuideConfig,
    limits: MountLimits,
    axis1: GuidedAxis<A>,
    axis2: GuidedAxis<A>,
    position: P,
    tracking: R,
    clock: C,
    spiral_guide: Guard<MountState>,
    history: GuideHistory,
}

impl<A, P, R, C> GuideController<A, P, R, C>
where
    A: AxisActuator,
    P: MountPosition,
    R: TrackingRates,
    C: TickSource,
{
    /// Create a controller with both sessions idle.
    pub fn new(config: GuideConfig, axis1: A, axis2: A, position: P, tracking: R, clock: C) -> Self {
        Self {
            limits: config.limits(),
            config,
            axis1: GuidedAxis {
                session: GuideSession::new(Axis::Axis1),
                actuator: axis1,
            },
            axis2: GuidedAxis {
                session: GuideSession::new(Axis::Axis2),
                actuator: axis2,
            },
            position,
            tracking,
            clock,
            spiral_guide: Guard::never(),
            history: GuideHistory::default(),
        }
    }

    /// Install the predicate that reports an active spiral search.
    pub fn with_spiral_guide(mut self, guard: Guard<MountState>) -> Self {
        self.spiral_guide = guard;
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history = GuideHistory::with_capacity(capacity);
        self
    }

    /// Start guiding `axis` in the direction of `action`.
    ///
    /// Requesting `None`, `Break`, or the action already in progress succeeds
    /// without touching anything. Rejections leave the session unchanged.
    pub fn start(
        &mut self,
        axis: Axis,
        action: GuideAction,
        select: GuideRateSelect,
        time_limit_ms: u32,
        mount: &MountState,
    ) -> GuideResult {
        if self.session(axis).is_noop(action) {
            return Ok(());
        }
        let Some(direction) = action.direction() else {
            return Ok(());
        };

        if let Err(error) = self.admit(axis, direction, select, mount) {
            debug!(%axis, direction = direction.name(), %error, "guide start rejected");
            return Err(error);
        }

        let rate = resolve_rate(select, axis, &mount.step_timing);
        let now = self.clock.now();
        let deadline = now.deadline_after(time_limit_ms);

        let guided = self.guided_mut(axis);
        let from = guided.session.action();
        let had_offset = guided.session.offset_rate() != 0.0;
        let was_slewing = from.is_guiding() && !had_offset;
        let mode = guided.session.engage(direction, rate, deadline);
        match mode {
            GuideMode::Slew => {
                guided.actuator.set_max_slew_frequency(slew_frequency(rate));
                guided.actuator.start_auto_slew(direction);
            }
            // offset guides are never braked; stop the slew being replaced
            GuideMode::Offset if was_slewing => guided.actuator.request_auto_slew_stop(),
            GuideMode::Offset => {}
        }

        info!(
            %axis,
            direction = direction.name(),
            rate,
            ?mode,
            time_limit_ms,
            "guide started"
        );
        self.record(axis, from, action, now, TransitionCause::Start);
        if mode == GuideMode::Offset || had_offset {
            self.recompute_tracking();
        }
        Ok(())
    }

    /// Admission checks, first failure wins.
    fn admit(
        &mut self,
        axis: Axis,
        direction: Direction,
        select: GuideRateSelect,
        mount: &MountState,
    ) -> GuideResult {
        let guided = match axis {
            Axis::Axis1 => &self.axis1,
            Axis::Axis2 => &self.axis2,
        };

        if guided.actuator.has_fault() {
            return Err(GuideError::HardwareFault);
        }
        if mount.parked {
            return Err(GuideError::InPark);
        }
        if mount.goto_active || self.spiral_guide.check(mount) {
            return Err(GuideError::InMotion);
        }

        let validator = LimitValidator::new(&self.limits, mount, self.config.tangent_arm);
        let instrument = guided.actuator.instrument_coordinate();
        if !validator.is_move_allowed(axis, direction, &mut self.position, instrument) {
            return Err(GuideError::OutsideLimits);
        }

        if select.is_slow_tier() && (mount.any_error || guided.actuator.has_motion_error()) {
            return Err(GuideError::OutsideLimits);
        }
        Ok(())
    }

    /// Stop guiding `axis`.
    ///
    /// Offset-mode guides end at once. Slew-mode guides move to `Break` and
    /// become idle on a later poll, once the actuator has stopped.
    pub fn stop(&mut self, axis: Axis) {
        self.stop_with(axis, TransitionCause::Stop);
    }

    /// Stop both axes.
    pub fn stop_all(&mut self) {
        for axis in Axis::ALL {
            self.stop(axis);
        }
    }

    pub(crate) fn stop_with(&mut self, axis: Axis, cause: TransitionCause) {
        let now = self.clock.now();
        let guided = self.guided_mut(axis);
        let from = guided.session.action();

        match guided.session.request_stop() {
            StopOutcome::Ignored => {}
            StopOutcome::Stopped => {
                debug!(%axis, ?cause, "guide stopped");
                self.record(axis, from, GuideAction::None, now, cause);
                self.recompute_tracking();
            }
            StopOutcome::Braking => {
                guided.actuator.request_auto_slew_stop();
                debug!(%axis, ?cause, "requesting guide stop");
                self.record(axis, from, GuideAction::Break, now, cause);
            }
        }
    }

    /// True when the spiral-guide capability reports an active search.
    pub fn is_spiral_guiding(&self, mount: &MountState) -> bool {
        self.spiral_guide.check(mount)
    }

    /// Either axis is actively guiding.
    pub fn is_guiding(&self) -> bool {
        self.axis1.session.is_guiding() || self.axis2.session.is_guiding()
    }

    /// Both axes are idle with no stop pending.
    pub fn is_idle(&self) -> bool {
        self.axis1.session.is_idle() && self.axis2.session.is_idle()
    }

    pub fn session(&self, axis: Axis) -> &GuideSession {
        match axis {
            Axis::Axis1 => &self.axis1.session,
            Axis::Axis2 => &self.axis2.session,
        }
    }

    pub fn actuator(&self, axis: Axis) -> &A {
        match axis {
            Axis::Axis1 => &self.axis1.actuator,
            Axis::Axis2 => &self.axis2.actuator,
        }
    }

    pub fn actuator_mut(&mut self, axis: Axis) -> &mut A {
        &mut self.guided_mut(axis).actuator
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut P {
        &mut self.position
    }

    pub fn tracking(&self) -> &R {
        &self.tracking
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn config(&self) -> &GuideConfig {
        &self.config
    }

    pub fn history(&self) -> &GuideHistory {
        &self.history
    }

    /// Current guide offsets of both axes.
    pub fn offsets(&self) -> GuideOffsets {
        GuideOffsets {
            axis1: self.axis1.session.offset_rate(),
            axis2: self.axis2.session.offset_rate(),
        }
    }

    /// Snapshot of both sessions for status reporting.
    pub fn status(&self) -> GuideStatus {
        let now = self.clock.now();
        GuideStatus::capture(&self.axis1.session, &self.axis2.session, now)
    }

    pub(crate) fn guided_mut(&mut self, axis: Axis) -> &mut GuidedAxis<A> {
        match axis {
            Axis::Axis1 => &mut self.axis1,
            Axis::Axis2 => &mut self.axis2,
        }
    }

    pub(crate) fn now(&self) -> Tick {
        self.clock.now()
    }

    pub(crate) fn record(
        &mut self,
        axis: Axis,
        from: GuideAction,
        to: GuideAction,
        at: Tick,
        cause: TransitionCause,
    ) {
        self.history.record(GuideTransition {
            axis,
            from,
            to,
            at,
            cause,
        });
    }

    pub(crate) fn recompute_tracking(&mut self) {
        let offsets = self.offsets();
        self.tracking.recompute_tracking_rates(offsets);
    }
}
