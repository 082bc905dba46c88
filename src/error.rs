use thiserror::Error;

use crate::employee::EmployeeId;
use crate::storage::StorageError;

/// Rejection of a draft on save. The messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all mandatory fields.")]
    MissingFields,
    #[error("Age must be a non-negative integer.")]
    InvalidAge,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingFields => "Please fill in all mandatory fields.",
            ValidationError::InvalidAge => "Age must be a non-negative integer.",
        }
    }
}

#[derive(Debug, Error)]
pub enum RosterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("employee {id} not found")]
    NotFound { id: EmployeeId },

    #[error("employee form is already open")]
    FormAlreadyOpen,

    #[error("employee form is not open")]
    FormClosed,

    #[error("no employee ids left to assign")]
    IdsExhausted,

    #[error("unknown draft field: {0}")]
    UnknownField(String),

    #[error("roster storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("roster lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl RosterError {
    /// The validation failure behind this error, if any.
    pub fn validation(&self) -> Option<ValidationError> {
        match self {
            RosterError::Validation(err) => Some(*err),
            _ => None,
        }
    }
}
