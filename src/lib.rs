mod change;
mod config;
mod confirm;
mod draft;
mod employee;
mod error;
mod roster;
mod shared;
mod storage;
mod store;

#[cfg(feature = "emitter")]
pub mod emitter;

pub use change::{RosterChange, MAX_PENDING_CHANGES};
pub use config::{IdStrategy, RosterConfig, DEFAULT_DELETE_PROMPT, DEFAULT_STORAGE_KEY};
pub use confirm::{AutoConfirm, ConfirmPrompt};
pub use draft::{parse_age, Draft, DraftField, ModalState};
pub use employee::{Employee, EmployeeId};
pub use error::{RosterError, ValidationError};
pub use roster::{decode_roster, encode_roster, Roster, RosterAggregates};
pub use shared::SharedRosterStore;
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore, StorageError};
pub use store::{DeleteOutcome, RosterSnapshot, RosterStore};

#[cfg(feature = "emitter")]
pub use emitter::ChangeEmitter;
