// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active alerts.
//!
//! The `AlertStore` owns the session's alert records and exposes the three
//! mutations of the system: append, remove-by-identity, and clear-all.
//! Every effective mutation bumps a generation counter so renderers can
//! detect change without diffing the whole collection.

use crate::alert::{Alert, AlertId, Category};
use crate::diagnostics::{AlertEvent, DiagnosticsHandle};

/// Ordered, append-only-until-removal collection of alerts.
///
/// The store never reorders records: alerts added in order A, B, C render
/// as `[A, B, C]` until one of them is removed.
#[derive(Debug, Default)]
pub struct AlertStore {
    /// Active alerts in insertion order.
    alerts: Vec<Alert>,
    /// Bumped on every effective mutation.
    generation: u64,
    /// Optional diagnostics handle for reporting warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl AlertStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle used to report warning and error alerts.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Creates a new alert from its parts, appends it, and returns its identity.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
    ) -> AlertId {
        self.push(Alert::new(title, message, category))
    }

    /// Appends a pre-built alert and returns its identity.
    ///
    /// Warning and error alerts are reported to the diagnostics handle,
    /// when one is attached. Success and info alerts are not reported.
    pub fn push(&mut self, alert: Alert) -> AlertId {
        if let Some(handle) = &self.diagnostics {
            match alert.category() {
                Category::Warning | Category::Error => {
                    handle.report(AlertEvent::raised(&alert));
                }
                Category::Success | Category::Info => {}
            }
        }

        let id = alert.id();
        self.alerts.push(alert);
        self.generation += 1;
        id
    }

    /// Removes the alert with the given identity.
    ///
    /// Returns `true` if the alert was found and removed. Removing an
    /// absent identity is a no-op, not an error.
    pub fn remove(&mut self, id: AlertId) -> bool {
        if let Some(pos) = self.alerts.iter().position(|a| a.id() == id) {
            self.alerts.remove(pos);
            self.generation += 1;
            true
        } else {
            false
        }
    }

    /// Empties the collection.
    ///
    /// Clearing an already-empty store leaves the generation untouched.
    pub fn clear(&mut self) {
        if self.alerts.is_empty() {
            return;
        }
        if let Some(handle) = &self.diagnostics {
            handle.report(AlertEvent::cleared(self.alerts.len()));
        }
        self.alerts.clear();
        self.generation += 1;
    }

    /// Returns the active alerts in insertion order.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Returns an iterator over the active alerts.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    /// Returns the alert with the given identity, if it is still active.
    #[must_use]
    pub fn get(&self, id: AlertId) -> Option<&Alert> {
        self.alerts.iter().find(|a| a.id() == id)
    }

    /// Returns the number of active alerts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    /// Returns `true` when no alerts are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Returns the mutation counter.
    ///
    /// Two equal generations observed at different times guarantee the
    /// collection did not change in between.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;

    #[test]
    fn new_store_is_empty() {
        let store = AlertStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.generation(), 0);
    }

    #[test]
    fn add_appends_one_record_with_matching_fields() {
        let mut store = AlertStore::new();
        let id = store.add("Saved", "File written", Category::Success);

        assert_eq!(store.len(), 1);
        let alert = store.get(id).expect("alert should be present");
        assert_eq!(alert.title(), "Saved");
        assert_eq!(alert.message(), "File written");
        assert_eq!(alert.category(), Category::Success);
    }

    #[test]
    fn two_adds_preserve_order_and_categories() {
        let mut store = AlertStore::new();
        let first = store.add("T1", "M1", Category::Success);
        let second = store.add("T2", "M2", Category::Error);

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(store.alerts()[0].id(), first);
        assert_eq!(store.alerts()[0].category(), Category::Success);
        assert_eq!(store.alerts()[1].id(), second);
        assert_eq!(store.alerts()[1].category(), Category::Error);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let mut store = AlertStore::new();
        let a = store.add("A", "", Category::Info);
        let b = store.add("B", "", Category::Info);
        let c = store.add("C", "", Category::Info);

        let order: Vec<AlertId> = store.iter().map(Alert::id).collect();
        assert_eq!(order, vec![a, b, c]);
    }

    #[test]
    fn remove_present_decreases_length_by_one() {
        let mut store = AlertStore::new();
        let id = store.add("gone", "", Category::Info);
        store.add("stays", "", Category::Info);

        assert!(store.remove(id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.alerts()[0].title(), "stays");
    }

    #[test]
    fn remove_absent_is_a_noop() {
        let mut store = AlertStore::new();
        store.add("only", "", Category::Info);
        let stale = Alert::info("temp", "").id();
        let generation = store.generation();

        assert!(!store.remove(stale));
        assert_eq!(store.len(), 1);
        assert_eq!(store.generation(), generation);
    }

    #[test]
    fn clear_empties_regardless_of_contents() {
        let mut store = AlertStore::new();
        for i in 0..5 {
            store.add(format!("alert-{i}"), "", Category::Warning);
        }

        store.clear();
        assert!(store.is_empty());

        // Clearing again stays a no-op.
        let generation = store.generation();
        store.clear();
        assert_eq!(store.generation(), generation);
    }

    #[test]
    fn effective_mutations_bump_the_generation() {
        let mut store = AlertStore::new();
        let g0 = store.generation();

        let id = store.add("a", "", Category::Info);
        let g1 = store.generation();
        assert!(g1 > g0);

        store.remove(id);
        assert!(store.generation() > g1);
    }

    #[test]
    fn warnings_and_errors_are_reported_to_diagnostics() {
        let collector = DiagnosticsCollector::default();
        let mut store = AlertStore::new();
        store.set_diagnostics(collector.handle());

        store.add("fine", "", Category::Success);
        store.add("hm", "", Category::Info);
        store.add("careful", "", Category::Warning);
        store.add("broken", "", Category::Error);

        let events = collector.drain();
        assert_eq!(events.len(), 2);
    }
}
