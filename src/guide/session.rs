//! Per-axis guide session state.
//!
//! A session is in exactly one of three modes: idle, offset-mode (a signed
//! rate added to tracking) or slew-mode (an independent actuator slew, offset
//! zero). The transitions here are pure; the controller performs the
//! collaborator calls each outcome asks for.

use crate::core::{Axis, Direction, GuideAction, Tick, OFFSET_RATE_LIMIT};
use serde::{Deserialize, Serialize};

/// How an active guide is being applied.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GuideMode {
    /// Signed offset added to the tracking rate
    Offset,
    /// Independent timed slew of the actuator
    Slew,
}

impl GuideMode {
    /// Mode used for a resolved sidereal multiplier.
    pub fn for_rate(rate: f64) -> Self {
        if rate <= OFFSET_RATE_LIMIT {
            Self::Offset
        } else {
            Self::Slew
        }
    }
}

/// Outcome of a stop request.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StopOutcome {
    /// Already idle or already braking
    Ignored,
    /// Offset-mode guide ended immediately; tracking must be recomputed
    Stopped,
    /// Slew-mode guide is braking; the actuator must be asked to stop
    Braking,
}

/// State of one axis' guide session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuideSession {
    axis: Axis,
    action: GuideAction,
    offset_rate: f64,
    deadline: Tick,
}

impl GuideSession {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            action: GuideAction::None,
            offset_rate: 0.0,
            deadline: Tick::default(),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn action(&self) -> GuideAction {
        self.action
    }

    /// Signed sidereal multiplier added to tracking, zero outside offset-mode.
    pub fn offset_rate(&self) -> f64 {
        self.offset_rate
    }

    /// Deadline of the current guide. Meaningless while idle.
    pub fn deadline(&self) -> Tick {
        self.deadline
    }

    pub fn is_guiding(&self) -> bool {
        self.action.is_guiding()
    }

    pub fn is_idle(&self) -> bool {
        self.action.is_idle()
    }

    /// Mode of an active or braking guide, `None` while idle.
    pub fn mode(&self) -> Option<GuideMode> {
        match self.action {
            GuideAction::None => None,
            _ if self.offset_rate != 0.0 => Some(GuideMode::Offset),
            _ => Some(GuideMode::Slew),
        }
    }

    /// True when `action` needs no work: nothing requested, or already doing it.
    pub fn is_noop(&self, action: GuideAction) -> bool {
        action.direction().is_none() || self.action == action
    }

    /// Record a started guide and return the mode it runs in.
    ///
    /// Slew-mode clears any offset left from an earlier offset-mode guide.
    pub(crate) fn engage(&mut self, direction: Direction, rate: f64, deadline: Tick) -> GuideMode {
        let mode = GuideMode::for_rate(rate);
        self.action = direction.into();
        self.offset_rate = match mode {
            GuideMode::Offset => direction.sign() * rate,
            GuideMode::Slew => 0.0,
        };
        self.deadline = deadline;
        mode
    }

    pub(crate) fn request_stop(&mut self) -> StopOutcome {
        if !self.action.is_guiding() {
            return StopOutcome::Ignored;
        }
        if self.offset_rate == 0.0 {
            self.action = GuideAction::Break;
            StopOutcome::Braking
        } else {
            self.action = GuideAction::None;
            self.offset_rate = 0.0;
            StopOutcome::Stopped
        }
    }

    /// Finish a brake once the actuator reports the slew inactive.
    ///
    /// Returns `false` when the session was not braking.
    pub(crate) fn confirm_stopped(&mut self) -> bool {
        if self.action == GuideAction::Break && self.offset_rate == 0.0 {
            self.action = GuideAction::None;
            true
        } else {
            false
        }
    }

    /// An active guide whose deadline has passed.
    pub fn is_expired(&self, now: Tick) -> bool {
        self.action.is_guiding() && now.has_reached(self.deadline)
    }

    /// Milliseconds left before the deadline, `None` when not guiding.
    pub fn remaining_ms(&self, now: Tick) -> Option<u32> {
        if !self.action.is_guiding() {
            return None;
        }
        Some(self.deadline.since(now).max(0) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = GuideSession::new(Axis::Axis1);
        assert!(session.is_idle());
        assert_eq!(session.offset_rate(), 0.0);
        assert_eq!(session.mode(), None);
    }

    #[test]
    fn slow_rate_engages_offset_mode_with_sign() {
        let mut session = GuideSession::new(Axis::Axis2);
        let mode = session.engage(Direction::Reverse, 0.5, Tick(100));

        assert_eq!(mode, GuideMode::Offset);
        assert_eq!(session.action(), GuideAction::Reverse);
        assert_eq!(session.offset_rate(), -0.5);
        assert_eq!(session.deadline(), Tick(100));
    }

    #[test]
    fn two_x_is_still_offset_mode() {
        assert_eq!(GuideMode::for_rate(2.0), GuideMode::Offset);
        assert_eq!(GuideMode::for_rate(4.0), GuideMode::Slew);
    }

    #[test]
    fn fast_rate_engages_slew_mode_and_clears_offset() {
        let mut session = GuideSession::new(Axis::Axis1);
        session.engage(Direction::Forward, 1.0, Tick(0));
        let mode = session.engage(Direction::Reverse, 8.0, Tick(0));

        assert_eq!(mode, GuideMode::Slew);
        assert_eq!(session.offset_rate(), 0.0);
        assert_eq!(session.mode(), Some(GuideMode::Slew));
    }

    #[test]
    fn stop_in_offset_mode_is_immediate() {
        let mut session = GuideSession::new(Axis::Axis1);
        session.engage(Direction::Forward, 1.0, Tick(0));

        assert_eq!(session.request_stop(), StopOutcome::Stopped);
        assert!(session.is_idle());
        assert_eq!(session.offset_rate(), 0.0);
    }

    #[test]
    fn stop_in_slew_mode_brakes() {
        let mut session = GuideSession::new(Axis::Axis1);
        session.engage(Direction::Forward, 20.0, Tick(0));

        assert_eq!(session.request_stop(), StopOutcome::Braking);
        assert_eq!(session.action(), GuideAction::Break);
        assert_eq!(session.request_stop(), StopOutcome::Ignored);

        assert!(session.confirm_stopped());
        assert!(session.is_idle());
        assert!(!session.confirm_stopped());
    }

    #[test]
    fn stop_on_idle_is_ignored() {
        let mut session = GuideSession::new(Axis::Axis2);
        assert_eq!(session.request_stop(), StopOutcome::Ignored);
        assert!(session.is_idle());
    }

    #[test]
    fn noop_for_none_break_and_repeat() {
        let mut session = GuideSession::new(Axis::Axis1);
        assert!(session.is_noop(GuideAction::None));
        assert!(session.is_noop(GuideAction::Break));
        assert!(!session.is_noop(GuideAction::Forward));

        session.engage(Direction::Forward, 1.0, Tick(0));
        assert!(session.is_noop(GuideAction::Forward));
        assert!(!session.is_noop(GuideAction::Reverse));
    }

    #[test]
    fn expiry_only_applies_while_guiding() {
        let mut session = GuideSession::new(Axis::Axis1);
        assert!(!session.is_expired(Tick(1_000)));

        session.engage(Direction::Forward, 4.0, Tick(500));
        assert!(!session.is_expired(Tick(499)));
        assert!(session.is_expired(Tick(500)));
        assert_eq!(session.remaining_ms(Tick(200)), Some(300));
        assert_eq!(session.remaining_ms(Tick(600)), Some(0));

        session.request_stop();
        assert!(!session.is_expired(Tick(600)));
        assert_eq!(session.remaining_ms(Tick(600)), None);
    }
}
