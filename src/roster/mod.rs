//! Roster - the ordered list of employees and everything derived from it.

mod codec;

use serde::Serialize;

use crate::employee::{Employee, EmployeeId};

pub use codec::{decode_roster, encode_roster};

/// Counts shown on the dashboard. Always computed from the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterAggregates {
    pub total_employees: usize,
    pub available_employees: usize,
}

/// Ordered employees, most recently added first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Every employee carrying `id`. Ids can repeat in rosters built with
    /// length-based assignment, so callers must not assume a single match.
    pub fn matching_mut(&mut self, id: EmployeeId) -> impl Iterator<Item = &mut Employee> + '_ {
        self.employees.iter_mut().filter(move |e| e.id == id)
    }

    pub fn position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }

    /// Insert at the front.
    pub fn prepend(&mut self, employee: Employee) {
        self.employees.insert(0, employee);
    }

    /// Remove every employee with `id`, keeping the order of the rest.
    /// Returns the removed employees in roster order.
    pub fn remove_all(&mut self, id: EmployeeId) -> Vec<Employee> {
        let mut removed = Vec::new();
        self.employees.retain(|e| {
            if e.id == id {
                removed.push(e.clone());
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn max_id(&self) -> Option<EmployeeId> {
        self.employees.iter().map(|e| e.id).max()
    }

    pub fn aggregates(&self) -> RosterAggregates {
        RosterAggregates {
            total_employees: self.employees.len(),
            available_employees: self.employees.iter().filter(|e| e.available).count(),
        }
    }

    /// Available employees whose name contains `search` (case-insensitive),
    /// in roster order. Unavailable employees are never visible.
    pub fn visible<'a>(&'a self, search: &'a str) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees
            .iter()
            .filter(move |e| e.available && e.name_matches(search))
    }
}

impl From<Vec<Employee>> for Roster {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl From<Roster> for Vec<Employee> {
    fn from(roster: Roster) -> Self {
        roster.employees
    }
}
