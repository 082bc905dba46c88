use serde::{Deserialize, Serialize};

pub type EmployeeId = u64;

/// A single roster entry. This is also the persisted shape: one JSON object
/// per employee with `id`, `name`, `age` and `available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: u32,
    pub available: bool,
}

impl Employee {
    /// A freshly hired employee. New employees start out available.
    pub fn new(id: EmployeeId, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            available: true,
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }

    /// Case-insensitive substring match against the name.
    pub fn name_matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
