//! Data model for account alias reconciliation

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Desired state of the account alias
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasDesiredState {
    /// The alias should exist
    #[default]
    Present,
    /// The alias should not exist
    Absent,
}

impl AliasDesiredState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

impl FromStr for AliasDesiredState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(ValidationError::invalid_state(other)),
        }
    }
}

impl fmt::Display for AliasDesiredState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-empty account alias name as supplied by the caller
///
/// No format rules are enforced here; IAM is the authority on what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AliasName(String);

impl AliasName {
    /// Create an alias name, rejecting empty input
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::MissingAlias);
        }
        Ok(Self(name))
    }

    /// Create an alias name from an optional flag value
    pub fn from_optional(name: Option<&str>) -> Result<Self, ValidationError> {
        name.ok_or(ValidationError::MissingAlias).and_then(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AliasName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier of the target account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountIdentifier(String);

impl AccountIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Classified result of the single create or delete call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasOutcome {
    /// The alias was created
    Created,
    /// The alias was deleted
    Deleted,
    /// Nothing to do: the alias already existed, or was already gone
    AlreadyInDesiredState,
    /// The remote call failed for any other reason
    UnexpectedError,
}

impl AliasOutcome {
    /// Whether this outcome modified the remote account
    pub fn is_change(&self) -> bool {
        matches!(self, Self::Created | Self::Deleted)
    }
}

/// Status record reported after a reconciliation
///
/// Serializes to the flat object existing consumers read:
/// `{"changed": .., "aws_account_id": .., "aws_account_alias": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    pub changed: bool,

    #[serde(rename = "aws_account_id")]
    pub account_identifier: AccountIdentifier,

    #[serde(rename = "aws_account_alias")]
    pub alias_name: AliasName,

    #[serde(skip)]
    pub outcome: AliasOutcome,
}

impl ReconciliationResult {
    pub fn new(
        outcome: AliasOutcome,
        account_identifier: AccountIdentifier,
        alias_name: AliasName,
    ) -> Self {
        Self {
            changed: outcome.is_change(),
            account_identifier,
            alias_name,
            outcome,
        }
    }
}
