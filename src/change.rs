//! Change records for presentation layers that redraw on change.
//!
//! The store never calls out on its own. It bumps a revision number and
//! appends a [`RosterChange`] for every state change; the boundary layer
//! either compares revisions or drains the changes after each call.

use std::collections::VecDeque;

use serde::Serialize;

use crate::employee::EmployeeId;

/// Undrained changes beyond this are dropped oldest first.
pub const MAX_PENDING_CHANGES: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum RosterChange {
    EmployeeAdded { id: EmployeeId },
    EmployeeUpdated { id: EmployeeId },
    AvailabilityToggled { id: EmployeeId, available: bool },
    EmployeeDeleted { id: EmployeeId },
    FormOpened { editing_id: Option<EmployeeId> },
    FormClosed,
    DraftChanged,
    ValidationFailed { message: String },
    SearchChanged,
}

impl RosterChange {
    /// Event name for catch-all subscribers.
    pub const ANY: &'static str = "RosterChanged";

    pub fn event_type(&self) -> &'static str {
        match self {
            RosterChange::EmployeeAdded { .. } => "EmployeeAdded",
            RosterChange::EmployeeUpdated { .. } => "EmployeeUpdated",
            RosterChange::AvailabilityToggled { .. } => "AvailabilityToggled",
            RosterChange::EmployeeDeleted { .. } => "EmployeeDeleted",
            RosterChange::FormOpened { .. } => "FormOpened",
            RosterChange::FormClosed => "FormClosed",
            RosterChange::DraftChanged => "DraftChanged",
            RosterChange::ValidationFailed { .. } => "ValidationFailed",
            RosterChange::SearchChanged => "SearchChanged",
        }
    }

    /// Whether the change touched persisted roster data.
    pub fn is_roster_change(&self) -> bool {
        matches!(
            self,
            RosterChange::EmployeeAdded { .. }
                | RosterChange::EmployeeUpdated { .. }
                | RosterChange::AvailabilityToggled { .. }
                | RosterChange::EmployeeDeleted { .. }
        )
    }
}

#[derive(Debug, Default)]
pub(crate) struct ChangeLog {
    revision: u64,
    pending: VecDeque<RosterChange>,
}

impl ChangeLog {
    pub(crate) fn record(&mut self, change: RosterChange) {
        self.revision += 1;
        if self.pending.len() == MAX_PENDING_CHANGES {
            self.pending.pop_front();
        }
        self.pending.push_back(change);
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) fn drain(&mut self) -> Vec<RosterChange> {
        self.pending.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_bumps_revision() {
        let mut log = ChangeLog::default();
        assert_eq!(log.revision(), 0);

        log.record(RosterChange::SearchChanged);
        log.record(RosterChange::FormClosed);
        assert_eq!(log.revision(), 2);

        let drained = log.drain();
        assert_eq!(drained, vec![RosterChange::SearchChanged, RosterChange::FormClosed]);
        assert!(log.drain().is_empty());
        assert_eq!(log.revision(), 2);
    }

    #[test]
    fn pending_is_bounded() {
        let mut log = ChangeLog::default();
        for id in 0..(MAX_PENDING_CHANGES as u64 + 5) {
            log.record(RosterChange::EmployeeAdded { id });
        }
        let drained = log.drain();
        assert_eq!(drained.len(), MAX_PENDING_CHANGES);
        assert_eq!(drained[0], RosterChange::EmployeeAdded { id: 5 });
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(RosterChange::AvailabilityToggled {
            id: 3,
            available: false,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "AvailabilityToggled", "id": 3, "available": false})
        );
        assert_eq!(
            serde_json::to_value(RosterChange::FormClosed).unwrap(),
            serde_json::json!({"type": "FormClosed"})
        );
    }

    #[test]
    fn roster_changes() {
        assert!(RosterChange::EmployeeDeleted { id: 1 }.is_roster_change());
        assert!(!RosterChange::DraftChanged.is_roster_change());
    }
}
