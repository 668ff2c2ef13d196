//! Read-only snapshot of mount-level state consulted when a guide starts.

use super::rate::StepTiming;
use serde::{Deserialize, Serialize};

/// Meridian-flip policy.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum MeridianFlip {
    /// Never flip; past-meridian thresholds do not apply
    Never,
    /// Always flip when the meridian limit is reached
    Always,
    /// Flip only when needed to continue tracking
    #[default]
    Auto,
}

/// Mount state owned by the surrounding mount model.
///
/// The controller never mutates it; the owner builds a fresh snapshot for
/// each `start` call.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct MountState {
    pub parked: bool,
    pub goto_active: bool,
    /// Any general mount error flag is set
    pub any_error: bool,
    pub limits_enabled: bool,
    pub meridian_flip: MeridianFlip,
    pub step_timing: StepTiming,
}

impl Default for MountState {
    fn default() -> Self {
        Self {
            parked: false,
            goto_active: false,
            any_error: false,
            limits_enabled: true,
            meridian_flip: MeridianFlip::default(),
            step_timing: StepTiming::default(),
        }
    }
}
