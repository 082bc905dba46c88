use event_emitter_rs::EventEmitter;

use crate::change::RosterChange;
use crate::confirm::ConfirmPrompt;
use crate::storage::KeyValueStore;
use crate::store::RosterStore;

/// Forwards roster changes to listeners registered by event type.
///
/// Listeners receive the change serialized as JSON. Every change is emitted
/// twice: once under its own type (e.g. `"EmployeeAdded"`) and once under
/// [`RosterChange::ANY`].
///
/// # Example
///
/// ```ignore
/// use roster_store::{ChangeEmitter, RosterChange};
///
/// let mut emitter = ChangeEmitter::new();
/// emitter.on(RosterChange::ANY, |change| println!("redraw after {}", change));
///
/// store.toggle_availability(1)?;
/// emitter.publish(&mut store);
/// ```
pub struct ChangeEmitter {
    event_emitter: EventEmitter,
}

impl Default for ChangeEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeEmitter {
    pub fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
        }
    }

    /// Register a listener for an event type.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(event, listener);
    }

    pub fn emit(&mut self, change: &RosterChange) {
        let payload = match serde_json::to_string(change) {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(event = change.event_type(), error = %err, "unserializable change");
                return;
            }
        };
        self.event_emitter.emit(change.event_type(), payload.clone());
        self.event_emitter.emit(RosterChange::ANY, payload);
    }

    /// Drain the store's pending changes and emit them in order. Call this
    /// after each operation. Returns how many changes were emitted.
    pub fn publish<S, P>(&mut self, store: &mut RosterStore<S, P>) -> usize
    where
        S: KeyValueStore,
        P: ConfirmPrompt,
    {
        let changes = store.take_changes();
        for change in &changes {
            self.emit(change);
        }
        changes.len()
    }
}
