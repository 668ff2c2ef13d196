//! Guide session transition history.
//!
//! Keeps the most recent transitions of both axes for diagnostics. The log is
//! bounded so it can live for the lifetime of the controller.

use super::action::{Axis, GuideAction};
use super::tick::Tick;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of transitions retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 32;

/// What caused a session transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransitionCause {
    Start,
    Stop,
    Timeout,
    /// Actuator confirmed the slew has stopped
    BrakeComplete,
}

/// Record of a single session transition.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct GuideTransition {
    pub axis: Axis,
    pub from: GuideAction,
    pub to: GuideAction,
    pub at: Tick,
    pub cause: TransitionCause,
}

/// Ordered, bounded history of session transitions.
///
/// # Example
///
/// ```rust
/// use mount_guide::core::{Axis, GuideAction, GuideHistory, GuideTransition, Tick, TransitionCause};
///
/// let mut history = GuideHistory::with_capacity(2);
/// history.record(GuideTransition {
///     axis: Axis::Axis1,
///     from: GuideAction::None,
///     to: GuideAction::Forward,
///     at: Tick(10),
///     cause: TransitionCause::Start,
/// });
///
/// assert_eq!(history.path(Axis::Axis1), vec![GuideAction::None, GuideAction::Forward]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GuideHistory {
    capacity: usize,
    transitions: VecDeque<GuideTransition>,
}

impl Default for GuideHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl GuideHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            transitions: VecDeque::with_capacity(capacity.max(1)),
        }
    }

    /// Append a transition, dropping the oldest once full.
    pub fn record(&mut self, transition: GuideTransition) {
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Actions an axis passed through, oldest first.
    ///
    /// Starts with the `from` action of the axis' first retained transition.
    pub fn path(&self, axis: Axis) -> Vec<GuideAction> {
        let mut path = Vec::new();
        let mut entries = self.for_axis(axis);
        if let Some(first) = entries.next() {
            path.push(first.from);
            path.push(first.to);
        }
        path.extend(entries.map(|t| t.to));
        path
    }

    pub fn for_axis(&self, axis: Axis) -> impl Iterator<Item = &GuideTransition> {
        self.transitions.iter().filter(move |t| t.axis == axis)
    }

    pub fn last(&self) -> Option<&GuideTransition> {
        self.transitions.back()
    }

    pub fn transitions(&self) -> impl Iterator<Item = &GuideTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(axis: Axis, from: GuideAction, to: GuideAction, at: u32) -> GuideTransition {
        GuideTransition {
            axis,
            from,
            to,
            at: Tick(at),
            cause: TransitionCause::Start,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = GuideHistory::default();
        assert!(history.is_empty());
        assert!(history.path(Axis::Axis1).is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn path_is_tracked_per_axis() {
        let mut history = GuideHistory::default();
        history.record(transition(Axis::Axis1, GuideAction::None, GuideAction::Forward, 1));
        history.record(transition(Axis::Axis2, GuideAction::None, GuideAction::Reverse, 2));
        history.record(transition(Axis::Axis1, GuideAction::Forward, GuideAction::Break, 3));
        history.record(transition(Axis::Axis1, GuideAction::Break, GuideAction::None, 4));

        assert_eq!(
            history.path(Axis::Axis1),
            vec![
                GuideAction::None,
                GuideAction::Forward,
                GuideAction::Break,
                GuideAction::None
            ]
        );
        assert_eq!(
            history.path(Axis::Axis2),
            vec![GuideAction::None, GuideAction::Reverse]
        );
    }

    #[test]
    fn oldest_entries_are_dropped_at_capacity() {
        let mut history = GuideHistory::with_capacity(2);
        for at in 0..5 {
            history.record(transition(Axis::Axis1, GuideAction::None, GuideAction::Forward, at));
        }

        assert_eq!(history.len(), 2);
        let ticks: Vec<u32> = history.transitions().map(|t| t.at.as_millis()).collect();
        assert_eq!(ticks, vec![3, 4]);
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = GuideHistory::default();
        history.record(transition(Axis::Axis2, GuideAction::None, GuideAction::Forward, 7));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: GuideHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.last(), history.last());
    }
}
