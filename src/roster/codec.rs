use crate::employee::Employee;
use crate::storage::StorageError;

use super::Roster;

/// Decode a persisted roster. Anything that is not a JSON array of
/// employee-shaped objects yields None; `null` decodes to an empty roster.
pub fn decode_roster(raw: &str) -> Option<Roster> {
    match serde_json::from_str::<Option<Vec<Employee>>>(raw) {
        Ok(employees) => Some(Roster::from(employees.unwrap_or_default())),
        Err(err) => {
            tracing::debug!(error = %err, "stored roster is not a list of employees");
            None
        }
    }
}

pub fn encode_roster(roster: &Roster) -> Result<String, StorageError> {
    serde_json::to_string(roster.employees()).map_err(|e| StorageError::Serde(e.to_string()))
}
