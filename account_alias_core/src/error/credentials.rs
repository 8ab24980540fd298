//! Credential resolution error types

use thiserror::Error;

/// Errors raised while resolving explicit credential overrides
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    /// An override was given but the other half of the key pair is nowhere to be found
    #[error("Incomplete credentials: {missing} is not set")]
    Incomplete { missing: String },
}

impl CredentialError {
    /// Create an incomplete credentials error
    pub fn incomplete(missing: &str) -> Self {
        Self::Incomplete {
            missing: missing.to_string(),
        }
    }
}
