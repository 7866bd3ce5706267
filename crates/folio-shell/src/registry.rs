//! Callback registry with drop-to-unregister handles.
//!
//! Shared by [`crate::state::AppState`] subscriptions and
//! [`crate::events::EventHub`] listeners.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Entries<E> {
    next_id: u64,
    callbacks: Vec<(u64, Callback<E>)>,
}

/// A list of callbacks invoked in registration order.
pub(crate) struct Registry<E> {
    entries: Arc<Mutex<Entries<E>>>,
}

impl<E: 'static> Registry<E> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Entries {
                next_id: 0,
                callbacks: Vec::new(),
            })),
        }
    }

    /// Register `callback`; it stays registered until the handle drops.
    pub(crate) fn add<F>(&self, callback: F) -> Registration
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut entries = lock(&self.entries);
        let id = entries.next_id;
        entries.next_id += 1;
        entries.callbacks.push((id, Arc::new(callback)));

        let weak: Weak<Mutex<Entries<E>>> = Arc::downgrade(&self.entries);
        Registration {
            remove: Some(Box::new(move || {
                if let Some(entries) = weak.upgrade() {
                    lock(&entries).callbacks.retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Invoke every callback with `event`.
    ///
    /// The lock is released before the callbacks run, so a callback may
    /// register or drop handles without deadlocking.
    pub(crate) fn emit(&self, event: &E) {
        let callbacks: Vec<Callback<E>> = lock(&self.entries)
            .callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in callbacks {
            callback(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.entries).callbacks.len()
    }
}

/// Handle of a registered callback. Dropping it unregisters the callback.
#[must_use = "dropping the handle unregisters the callback immediately"]
pub struct Registration {
    remove: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Registration {
    /// Unregister now. Equivalent to dropping the handle.
    pub fn cancel(self) {}
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Some(remove) = self.remove.take() {
            remove();
        }
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("active", &self.remove.is_some())
            .finish()
    }
}

/// Lock a mutex, recovering the data if a callback panicked while holding it.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
