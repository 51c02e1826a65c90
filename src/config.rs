//!
//! This module defines configuration structures and loading logic for docstrict.
//! Configuration lives in `.docstrict.toml`; CLI flags override it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Configuration file looked up in the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = ".docstrict.toml";

/// Normalizes configuration keys (rule names, option names) to lowercase kebab-case.
pub fn normalize_key(key: &str) -> String {
    // If the key looks like a rule name (e.g., MD007), uppercase it
    if key.len() == 5 && key.to_ascii_lowercase().starts_with("md") && key[2..].chars().all(|c| c.is_ascii_digit()) {
        key.to_ascii_uppercase()
    } else {
        key.replace('_', "-").to_ascii_lowercase()
    }
}

/// Represents a rule-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RuleConfig {
    /// Configuration values for the rule
    #[serde(flatten)]
    pub values: BTreeMap<String, toml::Value>,
}

/// Represents the complete configuration loaded from .docstrict.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Global configuration options
    #[serde(default)]
    pub global: GlobalConfig,

    /// Rule-specific configurations
    #[serde(flatten)]
    pub rules: BTreeMap<String, RuleConfig>,
}

/// Global configuration options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Documentation directory checked and fixed when no paths are given
    pub docs_dir: PathBuf,

    /// Disabled rules
    pub disable: Vec<String>,

    /// Glob patterns excluded from discovery. Unset means each command's own default.
    pub exclude: Option<Vec<String>>,

    /// Respect .gitignore files when scanning directories. Unset means each command's own default.
    pub respect_gitignore: Option<bool>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            docs_dir: PathBuf::from("docs"),
            disable: Vec::new(),
            exclude: None,
            respect_gitignore: None,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file at {path}: {source}")]
    IoError { source: io::Error, path: String },

    /// Failed to parse the configuration content
    #[error("Failed to parse config file at {path}: {message}")]
    ParseError { path: String, message: String },
}

impl Config {
    /// Load an explicit config file, or `.docstrict.toml` from `base_dir` if present, or defaults.
    pub fn load(explicit: Option<&Path>, base_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let discovered = base_dir.join(CONFIG_FILE_NAME);
        if discovered.is_file() {
            log::debug!("Using config file {}", discovered.display());
            return Self::from_file(&discovered);
        }

        log::debug!("No {CONFIG_FILE_NAME} found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            source,
            path: path.display().to_string(),
        })?;
        Self::from_toml_str(&content).map_err(|message| ConfigError::ParseError {
            path: path.display().to_string(),
            message,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;

        // Rule sections are case-insensitive: [md007] and [MD007] mean the same rule
        config.rules = std::mem::take(&mut config.rules)
            .into_iter()
            .map(|(name, rule_config)| (normalize_key(&name), rule_config))
            .collect();
        config.global.disable = config.global.disable.iter().map(|r| normalize_key(r)).collect();

        Ok(config)
    }

    /// Whether a rule is disabled in the `[global]` section
    pub fn is_rule_disabled(&self, rule_name: &str) -> bool {
        self.global.disable.iter().any(|r| r.eq_ignore_ascii_case(rule_name))
    }
}

/// Get a rule-specific configuration value
/// Automatically tries both the original key and normalized variants (kebab-case ↔ snake_case)
pub fn get_rule_config_value<T: serde::de::DeserializeOwned>(config: &Config, rule_name: &str, key: &str) -> Option<T> {
    let rule_config = config.rules.get(&normalize_key(rule_name))?;

    let key_variants = [
        key.to_string(),
        normalize_key(key),
        key.replace('-', "_"),
        key.replace('_', "-"),
    ];

    for variant in &key_variants {
        if let Some(value) = rule_config.values.get(variant) {
            match T::deserialize(value.clone()) {
                Ok(result) => return Some(result),
                Err(e) => log::warn!("Ignoring invalid value for {rule_name}.{variant}: {e}"),
            }
        }
    }

    None
}
