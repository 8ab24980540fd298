//! End-to-end reconcile runs through the orchestrator, backed by the mock services

use account_alias_cli::error::ExitCode;
use account_alias_cli::orchestrators::alias_orchestrator::AliasOrchestrator;
use account_alias_cli::output::OutputFormat;
use account_alias_core::error::RemoteError;
use account_alias_core::{AliasDesiredState, AliasName};
use account_alias_test_utils::MockIdentityService;

fn orchestrator(mock: &MockIdentityService) -> AliasOrchestrator {
    AliasOrchestrator::new(mock.reconciler(), OutputFormat::Line)
}

fn acme_prod() -> AliasName {
    AliasName::new("acme-prod").unwrap()
}

#[tokio::test]
async fn test_create_then_repeat_output() {
    let mock = MockIdentityService::new().with_account_id("123456789012");
    let orchestrator = orchestrator(&mock);

    let first = orchestrator
        .run(AliasDesiredState::Present, &acme_prod())
        .await
        .unwrap();
    let second = orchestrator
        .run(AliasDesiredState::Present, &acme_prod())
        .await
        .unwrap();

    assert_eq!(
        first,
        r#"{"changed": true, "aws_account_id": "123456789012", "aws_account_alias": "acme-prod"}"#
    );
    assert_eq!(
        second,
        r#"{"changed": false, "aws_account_id": "123456789012", "aws_account_alias": "acme-prod"}"#
    );
}

#[tokio::test]
async fn test_delete_existing_alias_output() {
    let mock = MockIdentityService::new().with_alias("acme-prod");

    let line = orchestrator(&mock)
        .run(AliasDesiredState::Absent, &acme_prod())
        .await
        .unwrap();

    assert!(line.starts_with(r#"{"changed": true, "#));
    assert_eq!(mock.current_alias(), None);
}

#[tokio::test]
async fn test_unexpected_error_still_prints_status() {
    let mock = MockIdentityService::new();
    mock.fail_next_mutation(RemoteError::unexpected(
        "DeleteAccountAlias",
        Some("ServiceFailure"),
        "Request processing has failed",
    ));

    let line = orchestrator(&mock)
        .run(AliasDesiredState::Absent, &acme_prod())
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["changed"], false);
    assert_eq!(value["aws_account_alias"], "acme-prod");
}

#[tokio::test]
async fn test_identity_failure_is_network_error() {
    let mock = MockIdentityService::new();
    mock.fail_identity_lookup(RemoteError::identity_lookup("ExpiredToken"));

    let err = orchestrator(&mock)
        .run(AliasDesiredState::Present, &acme_prod())
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), ExitCode::NetworkError);
    assert_eq!(mock.mutation_count(), 0);
}

#[tokio::test]
async fn test_pretty_output() {
    let mock = MockIdentityService::new();
    let orchestrator = AliasOrchestrator::new(mock.reconciler(), OutputFormat::Pretty);

    let text = orchestrator
        .run(AliasDesiredState::Present, &acme_prod())
        .await
        .unwrap();

    assert!(text.lines().count() > 1);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["aws_account_id"], "123456789012");
}
