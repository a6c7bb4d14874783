// SPDX-License-Identifier: MPL-2.0
//! Session scope for the alert store.
//!
//! The [`AlertProvider`] owns one [`AlertStore`] for the lifetime of a UI
//! session and hands out [`AlertContext`] accessors to pass down the
//! component tree. Contexts hold weak references: once the provider is
//! dropped, every operation on a leftover context fails with
//! [`Error::DetachedContext`] instead of silently mutating a dead session.
//!
//! Each provider is an independent scope. Two providers never share state,
//! so parallel sessions (including tests) cannot interfere with each other.

use crate::alert::{Alert, AlertId, Category};
use crate::error::{Error, Result};
use crate::store::AlertStore;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

fn lock(store: &Mutex<AlertStore>) -> MutexGuard<'_, AlertStore> {
    match store.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Owns the alert store for one UI session.
#[derive(Debug, Default)]
pub struct AlertProvider {
    store: Arc<Mutex<AlertStore>>,
}

impl AlertProvider {
    /// Creates a provider with an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider around a pre-configured store (e.g. one with a
    /// diagnostics handle attached).
    #[must_use]
    pub fn with_store(store: AlertStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns an accessor handle bound to this provider's scope.
    #[must_use]
    pub fn context(&self) -> AlertContext {
        AlertContext {
            store: Arc::downgrade(&self.store),
        }
    }

    /// Creates a new alert and returns its identity.
    pub fn add_alert(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
    ) -> AlertId {
        lock(&self.store).add(title, message, category)
    }

    /// Removes the alert with the given identity; absent is a no-op.
    pub fn remove_alert(&self, id: AlertId) -> bool {
        lock(&self.store).remove(id)
    }

    /// Empties the collection.
    pub fn clear_alerts(&self) {
        lock(&self.store).clear();
    }

    /// Returns a snapshot of the active alerts in insertion order.
    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        lock(&self.store).alerts().to_vec()
    }

    /// Runs `f` with exclusive access to the store.
    pub fn with_locked_store<R>(&self, f: impl FnOnce(&mut AlertStore) -> R) -> R {
        f(&mut lock(&self.store))
    }
}

/// Accessor handle retrieved from an [`AlertProvider`].
///
/// Cheap to clone; every clone addresses the same store. All operations
/// fail with [`Error::DetachedContext`] once the provider is gone.
#[derive(Debug, Clone)]
pub struct AlertContext {
    store: Weak<Mutex<AlertStore>>,
}

impl AlertContext {
    fn store(&self) -> Result<Arc<Mutex<AlertStore>>> {
        self.store.upgrade().ok_or(Error::DetachedContext)
    }

    /// Returns `true` while the owning provider is alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Creates a new alert and returns its identity.
    pub fn add_alert(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
    ) -> Result<AlertId> {
        Ok(lock(&*self.store()?).add(title, message, category))
    }

    /// Removes the alert with the given identity.
    ///
    /// Returns `Ok(false)` when the identity is absent; that is a no-op,
    /// not an error.
    pub fn remove_alert(&self, id: AlertId) -> Result<bool> {
        Ok(lock(&*self.store()?).remove(id))
    }

    /// Empties the collection.
    pub fn clear_alerts(&self) -> Result<()> {
        lock(&*self.store()?).clear();
        Ok(())
    }

    /// Returns a snapshot of the active alerts in insertion order.
    pub fn alerts(&self) -> Result<Vec<Alert>> {
        Ok(lock(&*self.store()?).alerts().to_vec())
    }

    /// Returns the store's mutation counter.
    pub fn generation(&self) -> Result<u64> {
        Ok(lock(&*self.store()?).generation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_mutations_reach_the_store() {
        let provider = AlertProvider::new();
        let context = provider.context();

        let id = context
            .add_alert("T1", "M1", Category::Success)
            .expect("provider is alive");
        assert_eq!(provider.alerts().len(), 1);

        assert!(context.remove_alert(id).expect("provider is alive"));
        assert!(provider.alerts().is_empty());
    }

    #[test]
    fn clear_through_context_empties_the_store() {
        let provider = AlertProvider::new();
        let context = provider.context();

        provider.add_alert("a", "", Category::Info);
        provider.add_alert("b", "", Category::Info);
        context.clear_alerts().expect("provider is alive");

        assert!(provider.alerts().is_empty());
    }

    #[test]
    fn detached_context_fails_loudly() {
        let provider = AlertProvider::new();
        let context = provider.context();
        drop(provider);

        assert!(!context.is_attached());
        assert_eq!(
            context.add_alert("x", "", Category::Info),
            Err(Error::DetachedContext)
        );
        assert!(matches!(context.alerts(), Err(Error::DetachedContext)));
        assert_eq!(context.clear_alerts(), Err(Error::DetachedContext));
    }

    #[test]
    fn providers_are_independent_sessions() {
        let first = AlertProvider::new();
        let second = AlertProvider::new();

        first.add_alert("only in first", "", Category::Info);

        assert_eq!(first.alerts().len(), 1);
        assert!(second.alerts().is_empty());
    }

    #[test]
    fn cloned_contexts_address_the_same_store() {
        let provider = AlertProvider::new();
        let context = provider.context();
        let clone = context.clone();

        let id = clone
            .add_alert("shared", "", Category::Info)
            .expect("provider is alive");
        let seen: Vec<AlertId> = context
            .alerts()
            .expect("provider is alive")
            .iter()
            .map(Alert::id)
            .collect();
        assert_eq!(seen, vec![id]);
    }
}
