//! Error types returned by guide operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a guide start is rejected.
///
/// A rejected start leaves the session untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuideError {
    #[error("Axis driver or motor reports a fault")]
    HardwareFault,

    #[error("Mount is parked")]
    InPark,

    #[error("Goto or spiral guide already in motion")]
    InMotion,

    #[error("Move is outside limits or the mount reports an error")]
    OutsideLimits,
}

/// Result of a guide start.
pub type GuideResult = Result<(), GuideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_reason() {
        assert_eq!(GuideError::InPark.to_string(), "Mount is parked");
        assert_eq!(
            GuideError::InMotion.to_string(),
            "Goto or spiral guide already in motion"
        );
    }
}
