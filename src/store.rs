//! RosterStore - the single owner of roster state.
//!
//! The presentation layer holds no state of its own. It calls the mutation
//! methods below, then reads back whatever it renders (`visible_employees`,
//! `aggregates`, `draft`, `modal`, `validation_error`, or one `snapshot`).
//! Every roster mutation writes the full roster to the key-value store
//! before returning.
//!
//! ## Example
//!
//! ```ignore
//! use roster_store::{AutoConfirm, DraftField, InMemoryKeyValueStore, RosterStore};
//!
//! let mut store = RosterStore::initialize(InMemoryKeyValueStore::new(), AutoConfirm(true));
//! store.open_add_form()?;
//! store.update_draft_field(DraftField::Name, "Ann")?;
//! store.update_draft_field(DraftField::Age, "30")?;
//! let id = store.save_draft()?;
//! store.toggle_availability(id)?;
//! assert_eq!(store.aggregates().available_employees, 0);
//! ```

use serde::Serialize;

use crate::change::{ChangeLog, RosterChange};
use crate::config::{IdStrategy, RosterConfig};
use crate::confirm::ConfirmPrompt;
use crate::draft::{Draft, DraftField, ModalState};
use crate::employee::{Employee, EmployeeId};
use crate::error::{RosterError, ValidationError};
use crate::roster::{decode_roster, encode_roster, Roster, RosterAggregates};
use crate::storage::KeyValueStore;

/// Result of [`RosterStore::delete_employee`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The prompt was declined; nothing changed.
    Declined,
    /// Every employee that carried the id, in roster order.
    Deleted(Vec<Employee>),
    /// Confirmed, but no employee had that id.
    NotFound,
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterSnapshot {
    pub revision: u64,
    pub aggregates: RosterAggregates,
    pub search_text: String,
    pub visible_employees: Vec<Employee>,
    pub modal: ModalState,
    pub modal_title: Option<&'static str>,
    pub draft: Option<Draft>,
    pub validation_message: Option<&'static str>,
}

pub struct RosterStore<S, P> {
    storage: S,
    prompt: P,
    config: RosterConfig,
    roster: Roster,
    draft: Draft,
    modal: ModalState,
    search_text: String,
    validation_error: Option<ValidationError>,
    changes: ChangeLog,
    /// Highest id issued so far. Only ever grows.
    high_water: EmployeeId,
}

impl<S: KeyValueStore, P: ConfirmPrompt> RosterStore<S, P> {
    /// Load the roster from `storage` with the default configuration.
    pub fn initialize(storage: S, prompt: P) -> Self {
        Self::with_config(storage, prompt, RosterConfig::default())
    }

    /// Load the roster from `storage`. Missing or unreadable data gives an
    /// empty roster; nothing is written back.
    pub fn with_config(storage: S, prompt: P, config: RosterConfig) -> Self {
        let roster = load_roster(&storage, &config.storage_key);
        let high_water = load_high_water(&storage, &config, &roster);
        tracing::debug!(
            key = %config.storage_key,
            employees = roster.len(),
            high_water,
            "roster loaded"
        );

        Self {
            storage,
            prompt,
            config,
            roster,
            draft: Draft::default(),
            modal: ModalState::Closed,
            search_text: String::new(),
            validation_error: None,
            changes: ChangeLog::default(),
            high_water,
        }
    }

    pub fn open_add_form(&mut self) -> Result<(), RosterError> {
        self.ensure_closed()?;
        self.draft = Draft::default();
        self.validation_error = None;
        self.modal = ModalState::OpenForAdd;
        self.changes.record(RosterChange::FormOpened { editing_id: None });
        Ok(())
    }

    /// Open the form pre-filled with employee `id`. Fails with `NotFound`
    /// (leaving the form closed) if there is no such employee.
    pub fn open_edit_form(&mut self, id: EmployeeId) -> Result<(), RosterError> {
        self.ensure_closed()?;
        let employee = self.roster.get(id).ok_or(RosterError::NotFound { id })?;
        self.draft = Draft::for_edit(employee);
        self.validation_error = None;
        self.modal = ModalState::OpenForEdit(id);
        self.changes.record(RosterChange::FormOpened {
            editing_id: Some(id),
        });
        Ok(())
    }

    /// Close the form and discard the draft and any validation message.
    pub fn close_form(&mut self) {
        let was_open = self.modal.is_open();
        self.modal = ModalState::Closed;
        self.draft = Draft::default();
        self.validation_error = None;
        if was_open {
            self.changes.record(RosterChange::FormClosed);
        }
    }

    pub fn update_draft_field(
        &mut self,
        field: DraftField,
        value: impl Into<String>,
    ) -> Result<(), RosterError> {
        self.ensure_open()?;
        self.draft.set(field, value);
        self.changes.record(RosterChange::DraftChanged);
        Ok(())
    }

    /// Same as [`update_draft_field`](Self::update_draft_field), with the
    /// field given by its form name (`"name"` or `"age"`).
    pub fn update_draft_field_named(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), RosterError> {
        let field: DraftField = field.parse()?;
        self.update_draft_field(field, value)
    }

    /// Validate and commit the draft, then close the form.
    ///
    /// On a validation failure the form stays open, the message is kept for
    /// rendering and the roster is untouched. Returns the id of the added or
    /// edited employee. An edit applies to every employee carrying the id.
    pub fn save_draft(&mut self) -> Result<EmployeeId, RosterError> {
        self.ensure_open()?;

        let (name, age) = match self.draft.validate() {
            Ok((name, age)) => (name.to_string(), age),
            Err(err) => {
                tracing::debug!(error = %err, "draft rejected");
                self.validation_error = Some(err);
                self.changes.record(RosterChange::ValidationFailed {
                    message: err.message().to_string(),
                });
                return Err(err.into());
            }
        };

        let id = match self.draft.editing_id {
            Some(id) => {
                let mut updated = 0;
                for employee in self.roster.matching_mut(id) {
                    employee.name.clone_from(&name);
                    employee.age = age;
                    updated += 1;
                }
                for _ in 0..updated {
                    self.changes.record(RosterChange::EmployeeUpdated { id });
                }
                if updated == 0 {
                    tracing::debug!(id, "edited employee no longer exists");
                } else {
                    tracing::debug!(id, updated, "employee updated");
                }
                id
            }
            None => {
                let id = self
                    .config
                    .id_strategy
                    .next_id(self.roster.employees(), self.high_water)
                    .ok_or(RosterError::IdsExhausted)?;
                self.high_water = self.high_water.max(id);
                self.roster.prepend(Employee::new(id, name, age));
                self.changes.record(RosterChange::EmployeeAdded { id });
                tracing::debug!(id, "employee added");
                id
            }
        };

        let persisted = self.persist();
        self.close_form();
        persisted.map(|()| id)
    }

    /// Flip availability of every employee carrying `id`. Returns the new
    /// values in roster order; empty if there is no such employee.
    pub fn toggle_availability(&mut self, id: EmployeeId) -> Result<Vec<bool>, RosterError> {
        let toggled: Vec<bool> = self
            .roster
            .matching_mut(id)
            .map(|employee| {
                employee.available = !employee.available;
                employee.available
            })
            .collect();
        for &available in &toggled {
            self.changes
                .record(RosterChange::AvailabilityToggled { id, available });
            tracing::debug!(id, available, "availability toggled");
        }
        self.persist()?;
        Ok(toggled)
    }

    /// Delete every employee carrying `id` after the prompt confirms.
    pub fn delete_employee(&mut self, id: EmployeeId) -> Result<DeleteOutcome, RosterError> {
        if !self.prompt.confirm(&self.config.delete_prompt) {
            tracing::debug!(id, "delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        let removed = self.roster.remove_all(id);
        for _ in &removed {
            self.changes.record(RosterChange::EmployeeDeleted { id });
        }
        if !removed.is_empty() {
            tracing::debug!(id, removed = removed.len(), "employee deleted");
        }
        self.persist()?;
        if removed.is_empty() {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted(removed))
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.search_text {
            self.search_text = text;
            self.changes.record(RosterChange::SearchChanged);
        }
    }

    /// Available employees matching the search text, in roster order.
    pub fn visible_employees(&self) -> Vec<&Employee> {
        self.roster.visible(&self.search_text).collect()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn employees(&self) -> &[Employee] {
        self.roster.employees()
    }

    pub fn aggregates(&self) -> RosterAggregates {
        self.roster.aggregates()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Bumped on every state change. Redraw when it differs from the last
    /// value seen.
    pub fn revision(&self) -> u64 {
        self.changes.revision()
    }

    /// Drain the changes recorded since the last call.
    pub fn take_changes(&mut self) -> Vec<RosterChange> {
        self.changes.drain()
    }

    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            revision: self.revision(),
            aggregates: self.aggregates(),
            search_text: self.search_text.clone(),
            visible_employees: self.roster.visible(&self.search_text).cloned().collect(),
            modal: self.modal,
            modal_title: self.modal.title(),
            draft: self.modal.is_open().then(|| self.draft.clone()),
            validation_message: self.validation_error.map(ValidationError::message),
        }
    }

    fn ensure_closed(&self) -> Result<(), RosterError> {
        if self.modal.is_open() {
            return Err(RosterError::FormAlreadyOpen);
        }
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), RosterError> {
        if !self.modal.is_open() {
            return Err(RosterError::FormClosed);
        }
        Ok(())
    }

    /// Write the whole roster, plus the id high-water mark under the
    /// monotonic strategy. The in-memory state stays authoritative if a
    /// write fails.
    fn persist(&self) -> Result<(), RosterError> {
        let encoded = encode_roster(&self.roster)?;
        self.write(&self.config.storage_key, &encoded)?;
        if self.config.id_strategy == IdStrategy::Monotonic {
            self.write(&self.config.id_counter_key(), &self.high_water.to_string())?;
        }
        Ok(())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), RosterError> {
        if let Err(err) = self.storage.set_item(key, value) {
            tracing::warn!(key, error = %err, "failed to persist roster");
            return Err(err.into());
        }
        Ok(())
    }
}

fn load_roster<S: KeyValueStore>(storage: &S, key: &str) -> Roster {
    match storage.get_item(key) {
        Ok(Some(raw)) => decode_roster(&raw).unwrap_or_else(|| {
            tracing::warn!(key, "stored roster is unreadable, starting empty");
            Roster::new()
        }),
        Ok(None) => Roster::new(),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read roster, starting empty");
            Roster::new()
        }
    }
}

/// Highest id ever issued: the roster's largest id, raised to the stored
/// counter under the monotonic strategy.
fn load_high_water<S: KeyValueStore>(
    storage: &S,
    config: &RosterConfig,
    roster: &Roster,
) -> EmployeeId {
    let from_roster = roster.max_id().unwrap_or(0);
    if config.id_strategy != IdStrategy::Monotonic {
        return from_roster;
    }

    let key = config.id_counter_key();
    let stored = match storage.get_item(&key) {
        Ok(Some(raw)) => raw.trim().parse::<EmployeeId>().unwrap_or_else(|err| {
            tracing::warn!(key = %key, error = %err, "id counter is unreadable, ignoring");
            0
        }),
        Ok(None) => 0,
        Err(err) => {
            tracing::warn!(key = %key, error = %err, "failed to read id counter, ignoring");
            0
        }
    };
    from_roster.max(stored)
}
