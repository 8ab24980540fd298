//! Alias command orchestrator
//!
//! Wires configuration and credential overrides into AWS clients, runs the
//! reconciler, and renders the status record.

use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputFormat;
use account_alias_core::{
    AliasDesiredState, AliasName, AliasReconciler, AwsServices, CredentialOverrides,
    ReconciliationResult,
};
use log::debug;
use std::sync::Arc;

/// Orchestrator for a reconcile run
pub struct AliasOrchestrator {
    reconciler: AliasReconciler,
    format: OutputFormat,
}

impl AliasOrchestrator {
    /// Create an orchestrator around an existing reconciler
    pub fn new(reconciler: AliasReconciler, format: OutputFormat) -> Self {
        Self { reconciler, format }
    }

    /// Resolve credentials and build AWS-backed services from configuration
    pub async fn connect(config: &AppConfig, overrides: &CredentialOverrides) -> CliResult<Self> {
        let credentials = overrides
            .resolve()
            .map_err(account_alias_core::Error::from)?;
        debug!("Credential source resolved, connecting with {:?}", config.aws);

        let services = AwsServices::connect(&config.aws, &credentials).await;
        let reconciler =
            AliasReconciler::new(Arc::new(services.aliases), Arc::new(services.identity));

        Ok(Self::new(
            reconciler,
            OutputFormat::from_pretty(config.output.pretty),
        ))
    }

    /// Reconcile and return the rendered status record
    pub async fn run(&self, state: AliasDesiredState, alias: &AliasName) -> CliResult<String> {
        let result = self.reconcile(state, alias).await?;
        Ok(self.format.render(&result)?)
    }

    /// Reconcile without rendering
    pub async fn reconcile(
        &self,
        state: AliasDesiredState,
        alias: &AliasName,
    ) -> CliResult<ReconciliationResult> {
        Ok(self.reconciler.reconcile(state, alias).await?)
    }
}
