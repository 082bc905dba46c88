//! Add/edit form state: the draft being typed and the modal it lives in.

use std::str::FromStr;

use serde::Serialize;

use crate::employee::{Employee, EmployeeId};
use crate::error::{RosterError, ValidationError};

/// Which form, if any, is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    OpenForAdd,
    OpenForEdit(EmployeeId),
}

impl ModalState {
    pub fn is_open(self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    /// Heading for the form; None while closed.
    pub fn title(self) -> Option<&'static str> {
        match self {
            ModalState::Closed => None,
            ModalState::OpenForAdd => Some("Add Employee"),
            ModalState::OpenForEdit(_) => Some("Edit Employee"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Age,
}

impl FromStr for DraftField {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(DraftField::Name),
            "age" => Ok(DraftField::Age),
            other => Err(RosterError::UnknownField(other.to_string())),
        }
    }
}

/// Unsaved form contents. `age` stays raw text until the draft is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub name: String,
    pub age: String,
    pub editing_id: Option<EmployeeId>,
}

impl Draft {
    pub fn for_edit(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            age: employee.age.to_string(),
            editing_id: Some(employee.id),
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        match field {
            DraftField::Name => self.name = value.into(),
            DraftField::Age => self.age = value.into(),
        }
    }

    /// Check the draft and return the name and parsed age to commit.
    pub fn validate(&self) -> Result<(&str, u32), ValidationError> {
        if self.name.is_empty() || self.age.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        let age = parse_age(&self.age)?;
        Ok((&self.name, age))
    }
}

/// Parse form input as a non-negative integer.
///
/// Leading whitespace is skipped, an optional sign is accepted and parsing
/// stops at the first non-digit, so `" 42 years"` is 42 and `"7.9"` is 7.
/// Input without leading digits, negative values and values that do not fit
/// in a `u32` are rejected. `"-0"` is zero.
pub fn parse_age(text: &str) -> Result<u32, ValidationError> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return Err(ValidationError::InvalidAge);
    }

    let value: u32 = digits.parse().map_err(|_| ValidationError::InvalidAge)?;
    if negative && value != 0 {
        return Err(ValidationError::InvalidAge);
    }
    Ok(value)
}
