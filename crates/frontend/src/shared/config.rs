//! Console configuration.
//!
//! The defaults are embedded at compile time; a deployment can replace them by
//! shipping a different `config.toml` next to the sources before building.

use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefix prepended to every endpoint path, e.g. `/nsrs`.
    pub base_path: String,
    /// Abort a request after this many milliseconds.
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TableConfig {
    pub default_page_size: u32,
    /// Delay between a list response arriving and it being shown.
    pub grace_delay_ms: u32,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.table.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "table.default_page_size must be positive".into(),
            ));
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::Invalid("api.timeout_ms must be positive".into()));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_path: "/nsrs".to_string(),
                timeout_ms: 60_000,
            },
            table: TableConfig {
                default_page_size: contracts::shared::pagination::DEFAULT_PAGE_SIZE,
                grace_delay_ms: 500,
            },
        }
    }
}

/// Load the embedded configuration, falling back to built-in defaults.
pub fn load_config() -> AppConfig {
    match AppConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => {
            log::info!("Loaded embedded configuration");
            config
        }
        Err(e) => {
            log::warn!("{}; using built-in defaults", e);
            AppConfig::default()
        }
    }
}

/// Configuration from context, or defaults when none was provided.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.table.grace_delay_ms, 500);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let raw = r#"
[api]
base_path = ""
timeout_ms = 1000

[table]
default_page_size = 0
grace_delay_ms = 0
"#;
        assert!(matches!(
            AppConfig::from_toml(raw),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::from_toml("[api"),
            Err(ConfigError::Parse(_))
        ));
    }
}
