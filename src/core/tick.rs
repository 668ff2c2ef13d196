//! Millisecond tick counter with wraparound-safe comparisons.
//!
//! The control loop reads a free-running 32-bit counter that wraps roughly
//! every 49.7 days. Deadlines are compared by signed difference, so a deadline
//! set just before the wrap still expires just after it.

use serde::{Deserialize, Serialize};

/// Longest delta that a signed-difference comparison can represent.
pub const MAX_TICK_DELTA: u32 = i32::MAX as u32;

/// Instant on the free-running millisecond counter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Tick(pub u32);

impl Tick {
    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Deadline `delta_ms` after this tick.
    ///
    /// A zero delta means unbounded and, like any delta beyond
    /// [`MAX_TICK_DELTA`], is clamped to that maximum.
    pub fn deadline_after(self, delta_ms: u32) -> Tick {
        let delta = if delta_ms == 0 {
            MAX_TICK_DELTA
        } else {
            delta_ms.min(MAX_TICK_DELTA)
        };
        Tick(self.0.wrapping_add(delta))
    }

    /// Signed distance from `earlier` to `self`.
    pub fn since(self, earlier: Tick) -> i32 {
        self.0.wrapping_sub(earlier.0) as i32
    }

    /// True once `self` is at or past `deadline`.
    pub fn has_reached(self, deadline: Tick) -> bool {
        self.since(deadline) >= 0
    }
}

/// Source of the control loop's current tick.
pub trait TickSource {
    fn now(&self) -> Tick;
}
