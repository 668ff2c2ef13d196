//! Guide sessions and the controller that drives them.
//!
//! This is the imperative shell around the pure core: sessions decide what
//! should happen, the controller carries it out on the actuators, the position
//! model and the tracking-rate compositor.
//!
//! # Example
//!
//! ```rust
//! use mount_guide::core::{Axis, GuideAction, GuideRateSelect, MountState};
//! use mount_guide::testing::test_controller;
//!
//! let mut controller = test_controller();
//! let mount = MountState::default();
//!
//! controller
//!     .start(Axis::Axis1, GuideAction::Forward, GuideRateSelect::OneX, 500, &mount)
//!     .unwrap();
//! assert_eq!(controller.session(Axis::Axis1).offset_rate(), 1.0);
//!
//! controller.clock().advance(500);
//! controller.poll();
//! assert!(controller.session(Axis::Axis1).is_idle());
//! ```

mod controller;
mod poller;
mod session;

pub use controller::GuideController;
pub use session::{GuideMode, GuideSession, StopOutcome};
