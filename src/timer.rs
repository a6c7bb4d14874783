// SPDX-License-Identifier: MPL-2.0
//! Cancellable dismissal deadlines, keyed by alert identity.
//!
//! Each rendered toast owns exactly one pending deadline in this schedule.
//! When a toast unmounts for any reason (deadline expiry, dismiss button,
//! external remove, clear-all) its entry MUST be cancelled so no stale
//! deadline survives the toast it belonged to.

use crate::alert::AlertId;
use std::collections::HashMap;
use std::time::Instant;

/// Pending dismissal deadlines for rendered toasts.
#[derive(Debug, Default)]
pub struct DismissSchedule {
    deadlines: HashMap<AlertId, Instant>,
}

impl DismissSchedule {
    /// Creates an empty schedule.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules a dismissal deadline for `id`, replacing any previous one.
    pub fn schedule(&mut self, id: AlertId, deadline: Instant) {
        self.deadlines.insert(id, deadline);
    }

    /// Cancels the pending deadline for `id`.
    ///
    /// Returns `true` if a deadline was pending. Cancelling an unknown
    /// identity is a no-op.
    pub fn cancel(&mut self, id: AlertId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    /// Removes and returns every identity whose deadline is at or before `now`.
    ///
    /// Expired entries leave the schedule: firing consumes the deadline.
    pub fn expired(&mut self, now: Instant) -> Vec<AlertId> {
        let due: Vec<AlertId> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        for id in &due {
            self.deadlines.remove(id);
        }
        due
    }

    /// Returns `true` if a deadline is pending for `id`.
    #[must_use]
    pub fn contains(&self, id: AlertId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Returns the pending deadline for `id`, if any.
    #[must_use]
    pub fn deadline(&self, id: AlertId) -> Option<Instant> {
        self.deadlines.get(&id).copied()
    }

    /// Returns the number of pending deadlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// Returns `true` when no deadlines are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    /// Cancels every pending deadline.
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn expired_fires_at_but_not_before_the_deadline() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let id = AlertId::new();
        schedule.schedule(id, start + Duration::from_millis(3000));

        assert!(schedule
            .expired(start + Duration::from_millis(2999))
            .is_empty());
        assert_eq!(schedule.expired(start + Duration::from_millis(3000)), [id]);
        // Firing consumed the entry.
        assert!(schedule.is_empty());
    }

    #[test]
    fn cancel_removes_the_pending_deadline() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let id = AlertId::new();
        schedule.schedule(id, start);

        assert!(schedule.cancel(id));
        assert!(!schedule.contains(id));
        assert!(schedule.expired(start + Duration::from_secs(60)).is_empty());
    }

    #[test]
    fn cancel_unknown_identity_is_a_noop() {
        let mut schedule = DismissSchedule::new();
        assert!(!schedule.cancel(AlertId::new()));
    }

    #[test]
    fn expired_returns_only_due_entries() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let early = AlertId::new();
        let late = AlertId::new();
        schedule.schedule(early, start + Duration::from_millis(100));
        schedule.schedule(late, start + Duration::from_millis(500));

        let due = schedule.expired(start + Duration::from_millis(200));
        assert_eq!(due, [early]);
        assert!(schedule.contains(late));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn rescheduling_replaces_the_deadline() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        let id = AlertId::new();
        schedule.schedule(id, start + Duration::from_millis(100));
        schedule.schedule(id, start + Duration::from_millis(900));

        assert!(schedule
            .expired(start + Duration::from_millis(500))
            .is_empty());
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn clear_cancels_everything() {
        let mut schedule = DismissSchedule::new();
        let start = Instant::now();
        schedule.schedule(AlertId::new(), start);
        schedule.schedule(AlertId::new(), start);

        schedule.clear();
        assert!(schedule.is_empty());
    }
}
