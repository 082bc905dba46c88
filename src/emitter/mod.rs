//! Push-style change notification on top of [`RosterStore::take_changes`].
//!
//! [`RosterStore::take_changes`]: crate::RosterStore::take_changes

mod change_emitter;

pub use change_emitter::ChangeEmitter;
