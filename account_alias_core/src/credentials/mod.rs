//! Credential override resolution
//!
//! Explicit key material given on the command line takes precedence over the
//! standard AWS environment variables. When no override is given at all the
//! SDK default provider chain is used untouched. The process environment is
//! never modified; lookups go through a caller supplied function.

mod secret;

pub use secret::SecureString;

use crate::error::CredentialError;

/// Environment variable holding the access key id
pub const ACCESS_KEY_ID_ENV: &str = "AWS_ACCESS_KEY_ID";

/// Environment variable holding the secret access key
pub const SECRET_ACCESS_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";

/// Environment variable holding the session token of temporary credentials
pub const SESSION_TOKEN_ENV: &str = "AWS_SESSION_TOKEN";

/// Credential values passed explicitly for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialOverrides {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<SecureString>,
}

/// Where the SDK clients get their credentials from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Defer to the SDK default provider chain
    DefaultChain,
    /// Fixed key pair assembled from overrides and environment
    ///
    /// The session token is only taken from the environment when part of
    /// the pair came from there too.
    Static {
        access_key_id: String,
        secret_access_key: SecureString,
        session_token: Option<SecureString>,
    },
}

impl CredentialOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the access key id override; empty values are ignored
    pub fn with_access_key_id(mut self, access_key_id: Option<String>) -> Self {
        self.access_key_id = access_key_id.filter(|v| !v.is_empty());
        self
    }

    /// Set the secret access key override; empty values are ignored
    pub fn with_secret_access_key(mut self, secret_access_key: Option<String>) -> Self {
        self.secret_access_key = secret_access_key
            .filter(|v| !v.is_empty())
            .map(SecureString::new);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.access_key_id.is_none() && self.secret_access_key.is_none()
    }

    /// Resolve against the real process environment
    pub fn resolve(&self) -> Result<CredentialSource, CredentialError> {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolve using `env` to look up missing halves of the key pair and the
    /// session token
    pub fn resolve_with<F>(&self, env: F) -> Result<CredentialSource, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.is_empty() {
            return Ok(CredentialSource::DefaultChain);
        }

        let lookup = |name: &str| env(name).filter(|v| !v.is_empty());

        let access_key_id = match &self.access_key_id {
            Some(id) => id.clone(),
            None => lookup(ACCESS_KEY_ID_ENV)
                .ok_or_else(|| CredentialError::incomplete(ACCESS_KEY_ID_ENV))?,
        };

        let secret_access_key = match &self.secret_access_key {
            Some(secret) => secret.clone(),
            None => lookup(SECRET_ACCESS_KEY_ENV)
                .map(SecureString::new)
                .ok_or_else(|| CredentialError::incomplete(SECRET_ACCESS_KEY_ENV))?,
        };

        let session_token = if self.access_key_id.is_some() && self.secret_access_key.is_some() {
            None
        } else {
            lookup(SESSION_TOKEN_ENV).map(SecureString::new)
        };

        log::debug!(
            "Using explicit credentials (session token: {})",
            session_token.is_some()
        );
        Ok(CredentialSource::Static {
            access_key_id,
            secret_access_key,
            session_token,
        })
    }
}
