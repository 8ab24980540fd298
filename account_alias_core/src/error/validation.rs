//! Validation related error types

use thiserror::Error;

/// Input errors detected before any remote call is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No alias name was supplied, or it was empty
    #[error("No account alias name was supplied")]
    MissingAlias,

    /// Desired state outside of `present`/`absent`
    #[error("Invalid account alias state '{value}': expected 'present' or 'absent'")]
    InvalidState { value: String },
}

impl ValidationError {
    /// Create an invalid state error
    pub fn invalid_state(value: &str) -> Self {
        Self::InvalidState {
            value: value.to_string(),
        }
    }
}
