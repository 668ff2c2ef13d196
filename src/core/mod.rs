//! Pure core of the guide controller.
//!
//! This module contains the side-effect free pieces:
//! - Guide actions, directions and axis identifiers
//! - Rate selection
//! - Directional limit checks
//! - Wraparound-safe tick arithmetic
//! - Guard predicates and the bounded transition history
//!
//! The only collaborator call made from here is the position refresh that
//! `LimitValidator::is_move_allowed` needs before it can answer.

mod action;
mod guard;
mod history;
mod limits;
mod mount;
mod rate;
mod tick;

pub use action::{Axis, Direction, GuideAction};
pub use guard::Guard;
pub use history::{GuideHistory, GuideTransition, TransitionCause, DEFAULT_HISTORY_CAPACITY};
pub use limits::{
    axis1_move_allowed, axis2_move_allowed, AxisRange, Coordinate, LimitValidator, MountLimits,
    MountType, PierSide,
};
pub use mount::{MeridianFlip, MountState};
pub use rate::{
    resolve_rate, slew_frequency, GuideRateSelect, StepTiming, CUSTOM_RATE, OFFSET_RATE_LIMIT,
};
pub use tick::{Tick, TickSource, MAX_TICK_DELTA};
