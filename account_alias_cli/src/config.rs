use account_alias_core::AwsConfig;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name used under the platform configuration directory
const APP_CONFIG_DIR: &str = "aws-account-alias";

/// Prefix for configuration environment variables, e.g. `ACCOUNT_ALIAS_AWS__REGION`
const ENV_PREFIX: &str = "ACCOUNT_ALIAS_";

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub aws: AwsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Print the status record indented instead of on one line
    #[serde(default)]
    pub pretty: bool,
}

impl AppConfig {
    /// Apply CLI argument overrides to the configuration
    pub fn apply_cli_overrides(
        &mut self,
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) {
        if let Some(region) = region {
            self.aws.region = Some(region);
        }
        if let Some(profile) = profile {
            self.aws.profile = Some(profile);
        }
        if let Some(endpoint_url) = endpoint_url {
            self.aws.endpoint_url = Some(endpoint_url);
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with default XDG-compliant paths
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Get the default XDG-compliant configuration path
    fn default_config_path() -> PathBuf {
        #[cfg(not(target_os = "windows"))]
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config)
                .join(APP_CONFIG_DIR)
                .join("config.toml");
        }

        dirs::config_dir()
            .map(|d| d.join(APP_CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from(".aws-account-alias"))
            .join("config.toml")
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    ///
    /// CLI flags are layered on top by [`AppConfig::apply_cli_overrides`].
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            log::debug!("Loading configuration from {}", self.config_path.display());
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().with_context(|| {
            format!(
                "Failed to load configuration from {}",
                self.config_path.display()
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_replace_loaded_values() {
        let mut config = AppConfig::default();
        config.aws.region = Some("eu-west-1".to_string());
        config.aws.profile = Some("prod".to_string());

        config.apply_cli_overrides(Some("us-west-2".to_string()), None, None);

        assert_eq!(config.aws.region.as_deref(), Some("us-west-2"));
        assert_eq!(config.aws.profile.as_deref(), Some("prod"));
        assert_eq!(config.aws.endpoint_url, None);
    }

    #[test]
    fn test_with_path_is_reported() {
        let manager = ConfigManager::with_path(PathBuf::from("/tmp/alias/config.toml"));
        assert_eq!(
            manager.get_config_path(),
            PathBuf::from("/tmp/alias/config.toml")
        );
    }
}
