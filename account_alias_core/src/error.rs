//! Error types for the account alias core library
//!
//! Errors are grouped the same way callers have to react to them:
//! - Validation errors: caller input that never reaches the network
//! - Credential errors: explicit credential overrides that cannot be used
//! - Remote errors: faults reported by IAM or STS

use thiserror::Error;

pub mod credentials;
pub mod remote;
pub mod validation;

pub use self::credentials::CredentialError;
pub use self::remote::RemoteError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the account alias core library
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credential resolution errors
    #[error(transparent)]
    Credentials(#[from] CredentialError),

    /// Remote service errors
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

impl Error {
    /// Check if this error came from a remote call
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}
