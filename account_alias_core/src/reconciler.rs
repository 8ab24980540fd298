//! Account alias reconciliation
//!
//! One reconciliation makes at most two remote calls: the caller identity
//! lookup, then a single create or delete. Idempotency conflicts and other
//! create/delete failures are folded into the result; only a failed identity
//! lookup is returned as an error.

use crate::error::{RemoteError, Result};
use crate::service::{AliasApi, CallerIdentity};
use crate::types::{AliasDesiredState, AliasName, AliasOutcome, ReconciliationResult};
use log::{debug, info, warn};
use std::sync::Arc;

/// Drives the account alias toward the desired state
#[derive(Clone)]
pub struct AliasReconciler {
    aliases: Arc<dyn AliasApi>,
    identity: Arc<dyn CallerIdentity>,
}

impl AliasReconciler {
    pub fn new(aliases: Arc<dyn AliasApi>, identity: Arc<dyn CallerIdentity>) -> Self {
        Self { aliases, identity }
    }

    /// Make the account alias match `desired_state` and report what happened
    pub async fn reconcile(
        &self,
        desired_state: AliasDesiredState,
        alias_name: &AliasName,
    ) -> Result<ReconciliationResult> {
        debug!("Reconciling account alias '{alias_name}' to {desired_state}");

        let account_identifier = self.identity.account_id().await?;
        debug!("Caller account: {account_identifier}");

        let outcome = match desired_state {
            AliasDesiredState::Present => classify(
                self.aliases.create_account_alias(alias_name).await,
                AliasOutcome::Created,
            ),
            AliasDesiredState::Absent => classify(
                self.aliases.delete_account_alias(alias_name).await,
                AliasOutcome::Deleted,
            ),
        };

        info!("Account alias '{alias_name}' on {account_identifier}: {outcome:?}");
        Ok(ReconciliationResult::new(
            outcome,
            account_identifier,
            alias_name.clone(),
        ))
    }
}

fn classify(result: std::result::Result<(), RemoteError>, applied: AliasOutcome) -> AliasOutcome {
    match result {
        Ok(()) => applied,
        Err(err) if err.is_already_in_desired_state() => {
            debug!("No change needed: {err}");
            AliasOutcome::AlreadyInDesiredState
        }
        Err(err) => {
            warn!("{}", swallowed_error_message(&err));
            AliasOutcome::UnexpectedError
        }
    }
}

/// Warning logged for a create/delete failure that is reported as no change
fn swallowed_error_message(err: &RemoteError) -> String {
    format!("Account alias left unchanged: {err}")
}
