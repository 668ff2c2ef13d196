//! Serializable guide status for the command layer.

use crate::core::{GuideAction, Tick};
use crate::guide::{GuideMode, GuideSession};
use serde::{Deserialize, Serialize};

/// Status of one axis' guide session.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct AxisGuideStatus {
    pub action: GuideAction,
    pub mode: Option<GuideMode>,
    pub offset_rate: f64,
    /// Milliseconds until timeout, `None` when not actively guiding
    pub remaining_ms: Option<u32>,
}

impl AxisGuideStatus {
    fn capture(session: &GuideSession, now: Tick) -> Self {
        Self {
            action: session.action(),
            mode: session.mode(),
            offset_rate: session.offset_rate(),
            remaining_ms: session.remaining_ms(now),
        }
    }
}

/// Snapshot of both guide sessions.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GuideStatus {
    pub axis1: AxisGuideStatus,
    pub axis2: AxisGuideStatus,
    pub at: Tick,
}

impl GuideStatus {
    pub(crate) fn capture(axis1: &GuideSession, axis2: &GuideSession, now: Tick) -> Self {
        Self {
            axis1: AxisGuideStatus::capture(axis1, now),
            axis2: AxisGuideStatus::capture(axis2, now),
            at: now,
        }
    }

    pub fn is_guiding(&self) -> bool {
        self.axis1.action.is_guiding() || self.axis2.action.is_guiding()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
