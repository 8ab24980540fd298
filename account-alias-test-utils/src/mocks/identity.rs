//! In-memory mock of the IAM account alias and STS caller identity APIs

use account_alias_core::error::RemoteError;
use account_alias_core::{
    AccountIdentifier, AliasApi, AliasName, AliasReconciler, CallerIdentity,
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Default account id reported by the mock
pub const DEFAULT_ACCOUNT_ID: &str = "123456789012";

/// Mock implementation of both remote services
///
/// Models a single account that holds at most one alias, the way IAM does.
/// Clones share state, so a test can hand one clone to the reconciler and
/// inspect another.
///
/// # Examples
///
/// ```rust,no_run
/// use account_alias_test_utils::MockIdentityService;
/// use account_alias_core::{AliasDesiredState, AliasName};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mock = MockIdentityService::new();
/// let reconciler = mock.reconciler();
///
/// let alias = AliasName::new("acme-prod")?;
/// let result = reconciler.reconcile(AliasDesiredState::Present, &alias).await?;
///
/// assert!(result.changed);
/// assert_eq!(mock.current_alias().as_deref(), Some("acme-prod"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MockIdentityService {
    state: Arc<Mutex<MockState>>,
}

/// A call received by the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    AccountId,
    CreateAccountAlias(String),
    DeleteAccountAlias(String),
}

#[derive(Debug)]
struct MockState {
    account_id: String,
    alias: Option<String>,
    identity_failure: Option<RemoteError>,
    mutation_failure: Option<RemoteError>,
    calls: Vec<MockCall>,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
            alias: None,
            identity_failure: None,
            mutation_failure: None,
            calls: Vec::new(),
        }
    }
}

impl Default for MockIdentityService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockIdentityService {
    /// Create a mock for an account without an alias
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Report a different account id
    pub fn with_account_id(self, account_id: &str) -> Self {
        self.state.lock().unwrap().account_id = account_id.to_string();
        self
    }

    /// Start with an alias already set
    pub fn with_alias(self, alias: &str) -> Self {
        self.state.lock().unwrap().alias = Some(alias.to_string());
        self
    }

    /// Make every identity lookup fail with `error`
    pub fn fail_identity_lookup(&self, error: RemoteError) {
        self.state.lock().unwrap().identity_failure = Some(error);
    }

    /// Make the next create or delete fail with `error`
    pub fn fail_next_mutation(&self, error: RemoteError) {
        self.state.lock().unwrap().mutation_failure = Some(error);
    }

    /// Alias currently set on the mock account
    pub fn current_alias(&self) -> Option<String> {
        self.state.lock().unwrap().alias.clone()
    }

    /// All calls received so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of create or delete calls received so far
    pub fn mutation_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, MockCall::AccountId))
            .count()
    }

    /// Build a reconciler wired to this mock for both services
    pub fn reconciler(&self) -> AliasReconciler {
        AliasReconciler::new(Arc::new(self.clone()), Arc::new(self.clone()))
    }
}

#[async_trait]
impl AliasApi for MockIdentityService {
    async fn create_account_alias(&self, alias: &AliasName) -> Result<(), RemoteError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(MockCall::CreateAccountAlias(alias.to_string()));

        if let Some(error) = state.mutation_failure.take() {
            return Err(error);
        }

        if state.alias.as_deref() == Some(alias.as_str()) {
            return Err(RemoteError::entity_already_exists(alias.as_str()));
        }

        // An account holds one alias; creating another replaces it
        state.alias = Some(alias.to_string());
        Ok(())
    }

    async fn delete_account_alias(&self, alias: &AliasName) -> Result<(), RemoteError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(MockCall::DeleteAccountAlias(alias.to_string()));

        if let Some(error) = state.mutation_failure.take() {
            return Err(error);
        }

        if state.alias.as_deref() != Some(alias.as_str()) {
            return Err(RemoteError::no_such_entity(alias.as_str()));
        }

        state.alias = None;
        Ok(())
    }
}

#[async_trait]
impl CallerIdentity for MockIdentityService {
    async fn account_id(&self) -> Result<AccountIdentifier, RemoteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(MockCall::AccountId);

        match &state.identity_failure {
            Some(error) => Err(error.clone()),
            None => Ok(AccountIdentifier::new(state.account_id.clone())),
        }
    }
}
