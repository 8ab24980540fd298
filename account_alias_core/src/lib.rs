//! Account Alias Core Library
//!
//! Core library for reconciling the IAM account alias of an AWS account:
//! domain types, the error taxonomy, the remote service seams with their
//! AWS SDK implementations, credential override resolution, and the
//! reconciler itself.

pub mod aws;
pub mod credentials;
pub mod error;
pub mod reconciler;
pub mod service;
pub mod types;

// Re-export main types
pub use aws::{AwsServices, IamAliasApi, StsCallerIdentity};
pub use credentials::{CredentialOverrides, CredentialSource, SecureString};
pub use error::{Error, Result};
pub use reconciler::AliasReconciler;
pub use service::{AliasApi, CallerIdentity};
pub use types::{
    AccountIdentifier, AliasDesiredState, AliasName, AliasOutcome, ReconciliationResult,
};

/// AWS client configuration
///
/// Every field is optional; unset fields fall through to the SDK defaults
/// (environment, shared config files).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}
