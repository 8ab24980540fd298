//! Region selection for the SDK configuration
//!
//! These tests point the SDK at a throwaway shared config file and clear the
//! region variables, so they run one at a time.

use account_alias_core::aws::load_sdk_config;
use account_alias_core::{AwsConfig, CredentialSource, SecureString};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SHARED_CONFIG: &str = "\
[profile ops]
region = ap-southeast-2

[profile no-region]
output = json
";

fn isolate_aws_env(dir: &Path) {
    let config_file = dir.join("config");
    let credentials_file = dir.join("credentials");
    fs::write(&config_file, SHARED_CONFIG).unwrap();
    fs::write(&credentials_file, "").unwrap();

    unsafe {
        std::env::remove_var("AWS_REGION");
        std::env::remove_var("AWS_DEFAULT_REGION");
        std::env::remove_var("AWS_PROFILE");
        std::env::set_var("AWS_CONFIG_FILE", &config_file);
        std::env::set_var("AWS_SHARED_CREDENTIALS_FILE", &credentials_file);
        std::env::set_var("AWS_EC2_METADATA_DISABLED", "true");
    }
}

fn static_credentials() -> CredentialSource {
    CredentialSource::Static {
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: SecureString::new("secret"),
        session_token: None,
    }
}

async fn resolved_region(config: AwsConfig) -> Option<String> {
    load_sdk_config(&config, &static_credentials())
        .await
        .region()
        .map(|r| r.to_string())
}

#[tokio::test]
#[serial_test::serial]
async fn test_no_region_anywhere_falls_back_to_us_east_1() {
    let temp_dir = TempDir::new().unwrap();
    isolate_aws_env(temp_dir.path());

    let region = resolved_region(AwsConfig::default()).await;

    assert_eq!(region.as_deref(), Some("us-east-1"));
}

#[tokio::test]
#[serial_test::serial]
async fn test_profile_region_is_used() {
    let temp_dir = TempDir::new().unwrap();
    isolate_aws_env(temp_dir.path());

    let region = resolved_region(AwsConfig {
        profile: Some("ops".to_string()),
        ..Default::default()
    })
    .await;

    assert_eq!(region.as_deref(), Some("ap-southeast-2"));
}

#[tokio::test]
#[serial_test::serial]
async fn test_profile_without_region_falls_back_to_us_east_1() {
    let temp_dir = TempDir::new().unwrap();
    isolate_aws_env(temp_dir.path());

    let region = resolved_region(AwsConfig {
        profile: Some("no-region".to_string()),
        ..Default::default()
    })
    .await;

    assert_eq!(region.as_deref(), Some("us-east-1"));
}

#[tokio::test]
#[serial_test::serial]
async fn test_configured_region_beats_profile() {
    let temp_dir = TempDir::new().unwrap();
    isolate_aws_env(temp_dir.path());

    let region = resolved_region(AwsConfig {
        region: Some("eu-central-1".to_string()),
        profile: Some("ops".to_string()),
        endpoint_url: None,
    })
    .await;

    assert_eq!(region.as_deref(), Some("eu-central-1"));
}
