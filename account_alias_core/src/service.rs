//! Remote service seams
//!
//! The reconciler only talks to these traits. The AWS SDK backed
//! implementations live in [`crate::aws`]; tests use in-memory mocks.

use crate::error::RemoteError;
use crate::types::{AccountIdentifier, AliasName};
use async_trait::async_trait;

/// Account alias management (IAM)
#[async_trait]
pub trait AliasApi: Send + Sync {
    /// Create the account alias
    ///
    /// Must report an existing alias as [`RemoteError::EntityAlreadyExists`].
    async fn create_account_alias(&self, alias: &AliasName) -> Result<(), RemoteError>;

    /// Delete the account alias
    ///
    /// Must report a missing alias as [`RemoteError::NoSuchEntity`].
    async fn delete_account_alias(&self, alias: &AliasName) -> Result<(), RemoteError>;
}

/// Caller identity lookup (STS)
#[async_trait]
pub trait CallerIdentity: Send + Sync {
    /// Account the current credentials belong to
    async fn account_id(&self) -> Result<AccountIdentifier, RemoteError>;
}
