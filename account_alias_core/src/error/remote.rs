//! Remote service error types
//!
//! IAM reports idempotency conflicts as ordinary service errors. They are
//! given their own variants here so the reconciler can tell them apart from
//! genuine failures without looking at error codes.

use thiserror::Error;

/// Errors reported by the IAM and STS services
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// The alias already exists (create)
    #[error("Account alias '{alias}' already exists")]
    EntityAlreadyExists { alias: String },

    /// The alias does not exist (delete)
    #[error("Account alias '{alias}' does not exist")]
    NoSuchEntity { alias: String },

    /// Any other failure of a create or delete call
    #[error("{operation} failed{}: {message}", code_suffix(.code))]
    Unexpected {
        operation: String,
        code: Option<String>,
        message: String,
    },

    /// The caller identity lookup failed
    #[error("Caller identity lookup failed: {message}")]
    IdentityLookup { message: String },

    /// The caller identity response carried no account
    #[error("Caller identity response is missing the account id")]
    MissingAccount,
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" ({c})"))
        .unwrap_or_default()
}

impl RemoteError {
    /// Create an already-exists error
    pub fn entity_already_exists(alias: &str) -> Self {
        Self::EntityAlreadyExists {
            alias: alias.to_string(),
        }
    }

    /// Create a no-such-entity error
    pub fn no_such_entity(alias: &str) -> Self {
        Self::NoSuchEntity {
            alias: alias.to_string(),
        }
    }

    /// Create an unexpected error for the named operation
    pub fn unexpected(
        operation: &str,
        code: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self::Unexpected {
            operation: operation.to_string(),
            code: code.map(str::to_string),
            message: message.into(),
        }
    }

    /// Create an identity lookup error
    pub fn identity_lookup(message: impl Into<String>) -> Self {
        Self::IdentityLookup {
            message: message.into(),
        }
    }

    /// Check if this error means the remote side already matches the request
    pub fn is_already_in_desired_state(&self) -> bool {
        matches!(
            self,
            Self::EntityAlreadyExists { .. } | Self::NoSuchEntity { .. }
        )
    }

    /// Service error code, when the remote side supplied one
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::EntityAlreadyExists { .. } => Some("EntityAlreadyExists"),
            Self::NoSuchEntity { .. } => Some("NoSuchEntity"),
            Self::Unexpected { code, .. } => code.as_deref(),
            Self::IdentityLookup { .. } | Self::MissingAccount => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idempotency_conflicts() {
        assert!(RemoteError::entity_already_exists("acme").is_already_in_desired_state());
        assert!(RemoteError::no_such_entity("acme").is_already_in_desired_state());
        assert!(
            !RemoteError::unexpected("CreateAccountAlias", None, "boom")
                .is_already_in_desired_state()
        );
        assert!(!RemoteError::MissingAccount.is_already_in_desired_state());
    }

    #[test]
    fn test_unexpected_error_display_with_code() {
        let error = RemoteError::unexpected(
            "DeleteAccountAlias",
            Some("AccessDenied"),
            "User is not authorized",
        );
        assert_eq!(
            error.to_string(),
            "DeleteAccountAlias failed (AccessDenied): User is not authorized"
        );
        assert_eq!(error.code(), Some("AccessDenied"));
    }

    #[test]
    fn test_unexpected_error_display_without_code() {
        let error = RemoteError::unexpected("CreateAccountAlias", None, "dispatch failure");
        assert_eq!(
            error.to_string(),
            "CreateAccountAlias failed: dispatch failure"
        );
        assert_eq!(error.code(), None);
    }

    #[test]
    fn test_conflict_codes() {
        assert_eq!(
            RemoteError::entity_already_exists("acme").code(),
            Some("EntityAlreadyExists")
        );
        assert_eq!(
            RemoteError::no_such_entity("acme").code(),
            Some("NoSuchEntity")
        );
    }
}
