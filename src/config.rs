//! Roster configuration.
//!
//! All fields fall back to their defaults when missing, so a partial JSON
//! document (or `{}`) is a valid configuration.

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmployeeId};

/// Key the roster is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "employees";

/// Question put to the confirmation prompt before a delete.
pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this employee?";

/// How ids are chosen for newly added employees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `roster length + 1`. Can hand out an id that is still in use after a
    /// delete.
    #[default]
    RosterLength,
    /// One past the highest id ever issued. The high-water mark is kept under
    /// [`RosterConfig::id_counter_key`], so ids of deleted employees are
    /// never handed out again.
    Monotonic,
}

impl IdStrategy {
    /// Next id for `roster`, given the highest id issued so far. None once
    /// the id space is exhausted.
    pub fn next_id(self, roster: &[Employee], high_water: EmployeeId) -> Option<EmployeeId> {
        match self {
            IdStrategy::RosterLength => EmployeeId::try_from(roster.len()).ok()?.checked_add(1),
            IdStrategy::Monotonic => roster
                .iter()
                .map(|e| e.id)
                .fold(high_water, EmployeeId::max)
                .checked_add(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub storage_key: String,
    pub delete_prompt: String,
    pub id_strategy: IdStrategy,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            delete_prompt: DEFAULT_DELETE_PROMPT.to_string(),
            id_strategy: IdStrategy::default(),
        }
    }
}

impl RosterConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Key holding the highest id issued under [`IdStrategy::Monotonic`].
    pub fn id_counter_key(&self) -> String {
        format!("{}:last_id", self.storage_key)
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[EmployeeId]) -> Vec<Employee> {
        ids.iter().map(|&id| Employee::new(id, "x", 1)).collect()
    }

    #[test]
    fn defaults() {
        let config = RosterConfig::default();
        assert_eq!(config.storage_key, "employees");
        assert_eq!(config.delete_prompt, DEFAULT_DELETE_PROMPT);
        assert_eq!(config.id_strategy, IdStrategy::RosterLength);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RosterConfig::from_json(r#"{"id_strategy": "monotonic"}"#).unwrap();
        assert_eq!(config.id_strategy, IdStrategy::Monotonic);
        assert_eq!(config.storage_key, "employees");

        let empty = RosterConfig::from_json("{}").unwrap();
        assert_eq!(empty, RosterConfig::default());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(RosterConfig::from_json(r#"{"id_strategy": "random"}"#).is_err());
    }

    #[test]
    fn roster_length_ids() {
        assert_eq!(IdStrategy::RosterLength.next_id(&[], 0), Some(1));
        // after deleting id 1 from [2, 1], length-based assignment reuses 2
        assert_eq!(IdStrategy::RosterLength.next_id(&roster(&[2]), 2), Some(2));
    }

    #[test]
    fn monotonic_ids() {
        assert_eq!(IdStrategy::Monotonic.next_id(&[], 0), Some(1));
        assert_eq!(IdStrategy::Monotonic.next_id(&roster(&[2]), 0), Some(3));
        assert_eq!(IdStrategy::Monotonic.next_id(&roster(&[5, 1, 3]), 2), Some(6));
    }

    #[test]
    fn monotonic_ids_respect_high_water() {
        // newest employee (id 2) was deleted; 2 must not come back
        assert_eq!(IdStrategy::Monotonic.next_id(&roster(&[1]), 2), Some(3));
        assert_eq!(IdStrategy::Monotonic.next_id(&[], 9), Some(10));
    }

    #[test]
    fn exhausted_id_space() {
        assert_eq!(IdStrategy::Monotonic.next_id(&roster(&[EmployeeId::MAX]), 0), None);
        assert_eq!(IdStrategy::Monotonic.next_id(&[], EmployeeId::MAX), None);
    }

    #[test]
    fn counter_key_follows_storage_key() {
        assert_eq!(RosterConfig::default().id_counter_key(), "employees:last_id");
        let config = RosterConfig::default().with_storage_key("team");
        assert_eq!(config.id_counter_key(), "team:last_id");
    }
}
