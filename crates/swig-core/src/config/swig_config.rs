//! Top-level swig configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, GamesConfig, ObservabilityConfig, RulesConfig, StorageConfig};
use crate::errors::ConfigError;

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "swig.toml";

/// Every environment variable `apply_env_overrides` reads.
pub const ENV_VARS: [&str; 8] = [
    "SWIG_RULES_DEFAULT_RULE_COUNT",
    "SWIG_RULES_SUBJECT_NAME",
    "SWIG_GAMES_EXPIRY_DAYS",
    "SWIG_GAMES_REROLL_COUNT",
    "SWIG_GAMES_CUSTOM_RULE_WEIGHT",
    "SWIG_STORAGE_DB_PATH",
    "SWIG_STORAGE_READ_POOL_SIZE",
    "SWIG_LOG_LEVEL",
];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SWIG_*`)
/// 2. Project config (`swig.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SwigConfig {
    pub rules: RulesConfig,
    pub games: GamesConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl SwigConfig {
    /// Load configuration for the project at `root`.
    /// A missing `swig.toml` is not an error; an unparsable one is.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        tracing::debug!(path = %project_config_path.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a TOML file, without env overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SwigConfig) -> Result<(), ConfigError> {
        if config.rules.default_rule_count == 0 {
            return Err(invalid("rules.default_rule_count", "must be greater than 0"));
        }
        if config.games.reroll_count == 0 {
            return Err(invalid("games.reroll_count", "must be greater than 0"));
        }
        if config.games.expiry_days <= 0 {
            return Err(invalid("games.expiry_days", "must be greater than 0"));
        }
        if config.games.expiry_days > defaults::MAX_EXPIRY_DAYS {
            return Err(invalid(
                "games.expiry_days",
                &format!("must be at most {}", defaults::MAX_EXPIRY_DAYS),
            ));
        }
        let weight = config.games.custom_rule_weight;
        if !weight.is_finite() || weight <= 0.0 {
            return Err(invalid("games.custom_rule_weight", "must be a positive number"));
        }
        if config.storage.db_path.trim().is_empty() {
            return Err(invalid("storage.db_path", "must not be empty"));
        }
        if config.storage.read_pool_size == 0 {
            return Err(invalid("storage.read_pool_size", "must be greater than 0"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparsable numeric values are ignored and the previous value kept.
    fn apply_env_overrides(config: &mut SwigConfig) {
        if let Some(v) = env_parse::<usize>("SWIG_RULES_DEFAULT_RULE_COUNT") {
            config.rules.default_rule_count = v;
        }
        if let Ok(val) = std::env::var("SWIG_RULES_SUBJECT_NAME") {
            config.rules.subject_name = val;
        }
        if let Some(v) = env_parse::<i64>("SWIG_GAMES_EXPIRY_DAYS") {
            config.games.expiry_days = v;
        }
        if let Some(v) = env_parse::<usize>("SWIG_GAMES_REROLL_COUNT") {
            config.games.reroll_count = v;
        }
        if let Some(v) = env_parse::<f64>("SWIG_GAMES_CUSTOM_RULE_WEIGHT") {
            config.games.custom_rule_weight = v;
        }
        if let Ok(val) = std::env::var("SWIG_STORAGE_DB_PATH") {
            config.storage.db_path = val;
        }
        if let Some(v) = env_parse::<usize>("SWIG_STORAGE_READ_POOL_SIZE") {
            config.storage.read_pool_size = v;
        }
        if let Ok(val) = std::env::var("SWIG_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
