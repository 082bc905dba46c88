//! SharedRosterStore - one store, many threads, one writer at a time.

use std::sync::{Arc, Mutex};

use crate::confirm::ConfirmPrompt;
use crate::error::RosterError;
use crate::storage::KeyValueStore;
use crate::store::{RosterSnapshot, RosterStore};

/// Clone-friendly handle that serializes every operation on the wrapped
/// [`RosterStore`] through a mutex.
pub struct SharedRosterStore<S, P> {
    inner: Arc<Mutex<RosterStore<S, P>>>,
}

impl<S, P> Clone for SharedRosterStore<S, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore, P: ConfirmPrompt> SharedRosterStore<S, P> {
    pub fn new(store: RosterStore<S, P>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&mut RosterStore<S, P>) -> R) -> Result<R, RosterError> {
        let mut store = self
            .inner
            .lock()
            .map_err(|_| RosterError::LockPoisoned("with"))?;
        Ok(f(&mut store))
    }

    pub fn snapshot(&self) -> Result<RosterSnapshot, RosterError> {
        self.with(|store| store.snapshot())
    }

    pub fn revision(&self) -> Result<u64, RosterError> {
        self.with(|store| store.revision())
    }
}

impl<S: KeyValueStore, P: ConfirmPrompt> From<RosterStore<S, P>> for SharedRosterStore<S, P> {
    fn from(store: RosterStore<S, P>) -> Self {
        Self::new(store)
    }
}
