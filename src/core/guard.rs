//! Pluggable predicates over controller context.
//!
//! Guards let optional capabilities veto a guide start without the start logic
//! knowing about them. The spiral-guide hook is one: until a spiral search is
//! implemented its guard always answers `false`.

use std::fmt;
use std::marker::PhantomData;

/// Pure predicate evaluated against a context value.
///
/// # Example
///
/// ```rust
/// use mount_guide::core::Guard;
///
/// let busy = Guard::new(|load: &u32| *load > 80);
///
/// assert!(busy.check(&95));
/// assert!(!busy.check(&10));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C) -> bool + Send + Sync>,
    _phantom: PhantomData<fn(&C)>,
}

impl<C: 'static> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects; it is
    /// evaluated from the control tick.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that never fires.
    pub fn never() -> Self {
        Self::new(|_| false)
    }

    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C: 'static> Default for Guard<C> {
    fn default() -> Self {
        Self::never()
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
