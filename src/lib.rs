//! Mount Guide: dual-axis guide-session controller for telescope mounts
//!
//! Autoguiders and hand controllers nudge a mount axis at a chosen rate for a
//! bounded time. This crate validates each request against the mount's limits
//! and state, applies it either as an offset to the tracking rate or as an
//! independent timed slew, and supervises it until it stops or times out.
//!
//! # Core Concepts
//!
//! - **Sessions**: one per axis, idle, offset-mode, slew-mode or braking
//! - **Admission**: fault, park, motion, limit and error checks, first failure wins
//! - **Polling**: the control tick confirms brakes and enforces deadlines
//! - **Collaborators**: actuators, position model and tracking compositor
//!   are traits in [`hal`]
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
//!     .start(Axis::Axis2, GuideAction::Reverse, GuideRateSelect::EightX, 5_000, &mount)
//!     .unwrap();
//! controller.stop(Axis::Axis2);
//! assert_eq!(controller.session(Axis::Axis2).action(), GuideAction::Break);
//!
//! controller.actuator_mut(Axis::Axis2).finish_slew();
//! controller.poll();
//! assert!(controller.is_idle());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod guide;
pub mod hal;
pub mod status;
pub mod testing;

// Re-export commonly used types
pub use config::GuideConfig;
pub use crate::core::{Axis, Direction, GuideAction, GuideRateSelect, MountState, Tick};
pub use error::{GuideError, GuideResult};
pub use guide::{GuideController, GuideSession};
