//! Guide actions, directions and axis identifiers.
//!
//! `GuideAction` is the state of a single axis' guide session. Its variants are
//! ordered so that anything above `Break` counts as actively guiding and `Break`
//! itself means "stop requested, waiting for the actuator to confirm".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mount axis driven by a guide session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Axis {
    /// Hour-angle (or azimuth) axis
    Axis1,
    /// Declination (or altitude) axis
    Axis2,
}

impl Axis {
    /// Both axes in controller order.
    pub const ALL: [Axis; 2] = [Axis::Axis1, Axis::Axis2];

    /// One-based axis number as used by the command protocol.
    pub fn number(self) -> u8 {
        match self {
            Self::Axis1 => 1,
            Self::Axis2 => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis{}", self.number())
    }
}

/// Direction of a commanded move.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    /// Sign applied to an offset rate moving in this direction.
    pub fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }
}

/// Current action of a guide session.
///
/// The derived ordering is significant: `None < Break < Forward < Reverse`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub enum GuideAction {
    /// No guide activity and no pending stop
    #[default]
    None,
    /// Stop requested, actuator still decelerating
    Break,
    Forward,
    Reverse,
}

impl GuideAction {
    /// Get the action's name for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::None => "None",
            Self::Break => "Break",
            Self::Forward => "Forward",
            Self::Reverse => "Reverse",
        }
    }

    /// True for `Forward` and `Reverse`.
    pub fn is_guiding(&self) -> bool {
        *self > Self::Break
    }

    /// True while a slew-mode stop awaits confirmation.
    pub fn is_stopping(&self) -> bool {
        matches!(self, Self::Break)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Direction of an active guide, `None` for idle or braking sessions.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Forward => Some(Direction::Forward),
            Self::Reverse => Some(Direction::Reverse),
            Self::None | Self::Break => None,
        }
    }
}

impl From<Direction> for GuideAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self::Forward,
            Direction::Reverse => Self::Reverse,
        }
    }
}
