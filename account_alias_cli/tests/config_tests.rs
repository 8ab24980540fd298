//! Layered configuration loading

use account_alias_cli::config::{AppConfig, ConfigManager};
use figment::Jail;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn create_test_config_manager(temp_dir: &TempDir) -> ConfigManager {
    ConfigManager::with_path(temp_dir.path().join("config.toml"))
}

#[test]
fn test_defaults_without_config_file() {
    Jail::expect_with(|_jail| {
        let temp_dir = TempDir::new().unwrap();
        let config = create_test_config_manager(&temp_dir).load().unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(!config.output.pretty);
        Ok(())
    });
}

#[test]
fn test_config_file_values_are_loaded() {
    Jail::expect_with(|_jail| {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.toml"),
            r#"
[aws]
region = "eu-central-1"
profile = "org-admin"

[output]
pretty = true
"#,
        )
        .unwrap();

        let config = create_test_config_manager(&temp_dir).load().unwrap();

        assert_eq!(config.aws.region.as_deref(), Some("eu-central-1"));
        assert_eq!(config.aws.profile.as_deref(), Some("org-admin"));
        assert_eq!(config.aws.endpoint_url, None);
        assert!(config.output.pretty);
        Ok(())
    });
}

#[test]
fn test_environment_overrides_config_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[aws]
region = "eu-central-1"
"#,
        )?;
        jail.set_env("ACCOUNT_ALIAS_AWS__REGION", "ap-southeast-2");
        jail.set_env("ACCOUNT_ALIAS_AWS__ENDPOINT_URL", "http://localhost:4566");

        let manager = ConfigManager::with_path(jail.directory().join("config.toml"));
        let config = manager.load().map_err(|e| e.to_string())?;

        assert_eq!(config.aws.region.as_deref(), Some("ap-southeast-2"));
        assert_eq!(
            config.aws.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        Ok(())
    });
}

#[test]
fn test_cli_flags_override_everything() {
    Jail::expect_with(|jail| {
        jail.set_env("ACCOUNT_ALIAS_AWS__REGION", "ap-southeast-2");

        let temp_dir = TempDir::new().unwrap();
        let mut config = create_test_config_manager(&temp_dir)
            .load()
            .map_err(|e| e.to_string())?;
        config.apply_cli_overrides(Some("us-west-2".to_string()), None, None);

        assert_eq!(config.aws.region.as_deref(), Some("us-west-2"));
        Ok(())
    });
}

#[test]
fn test_invalid_config_file_is_an_error() {
    Jail::expect_with(|_jail| {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.toml"), "[output]\npretty = [1, 2]\n").unwrap();

        let result = create_test_config_manager(&temp_dir).load();

        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn test_default_path_follows_xdg_config_home() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", "/tmp/xdg-test");

        let path = ConfigManager::new().get_config_path();

        #[cfg(not(target_os = "windows"))]
        assert_eq!(
            path,
            PathBuf::from("/tmp/xdg-test/aws-account-alias/config.toml")
        );
        #[cfg(target_os = "windows")]
        assert!(path.ends_with("aws-account-alias/config.toml"));
        Ok(())
    });
}
