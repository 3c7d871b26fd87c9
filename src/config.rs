//! Configuration file support for deptree.
//!
//! Provides YAML-based configuration through `deptree.config.yml` files,
//! including data structures, file loading, validation and merging with
//! command-line overrides.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use crate::adapters::outbound::network::NpmRegistryClient;
use crate::application::dto::{OutputFormat, DEFAULT_DEPTH};
use crate::shared::error::DeptreeError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "deptree.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_concurrency: Option<usize>,
    pub depth: Option<u32>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);
    tracing::debug!("Loaded config file {}", path.display());

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(url) = config.registry_url.as_deref() {
        validate_registry_url(url)?;
    }
    if let Some(secs) = config.timeout_secs {
        validate_timeout(secs)?;
    }
    if let Some(limit) = config.max_concurrency {
        validate_max_concurrency(limit)?;
    }
    if let Some(format) = config.format.as_deref() {
        OutputFormat::from_str(format).map_err(|message| DeptreeError::Validation { message })?;
    }
    Ok(())
}

fn validate_registry_url(url: &str) -> Result<()> {
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(DeptreeError::Validation {
            message: format!(
                "registry_url must start with http:// or https:// (got '{}')",
                url
            ),
        }
        .into());
    }
    Ok(())
}

fn validate_timeout(secs: u64) -> Result<()> {
    if secs == 0 {
        return Err(DeptreeError::Validation {
            message: "timeout_secs must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}

fn validate_max_concurrency(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(DeptreeError::Validation {
            message: "max_concurrency must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Values given on the command line; `None` falls back to the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub registry_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_concurrency: Option<usize>,
    pub depth: Option<u32>,
    pub format: Option<OutputFormat>,
}

/// Effective settings after merging CLI flags, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub registry_url: String,
    pub timeout: Duration,
    /// `None` leaves registry fan-out unbounded
    pub max_concurrency: Option<usize>,
    pub depth: u32,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            registry_url: NpmRegistryClient::DEFAULT_REGISTRY_URL.to_string(),
            timeout: Duration::from_secs(NpmRegistryClient::DEFAULT_TIMEOUT_SECS),
            max_concurrency: None,
            depth: DEFAULT_DEPTH,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Merges with precedence CLI flag > config file > built-in default.
    ///
    /// # Errors
    /// Returns a validation error if a command-line value is out of range.
    /// Config file values were validated when the file was loaded.
    pub fn resolve(cli: Overrides, config: Option<&ConfigFile>) -> Result<Self> {
        if let Some(url) = cli.registry_url.as_deref() {
            validate_registry_url(url)?;
        }
        if let Some(secs) = cli.timeout_secs {
            validate_timeout(secs)?;
        }
        if let Some(limit) = cli.max_concurrency {
            validate_max_concurrency(limit)?;
        }

        let defaults = Settings::default();
        let empty = ConfigFile::default();
        let file = config.unwrap_or(&empty);

        let file_format = match file.format.as_deref() {
            Some(format) => Some(
                OutputFormat::from_str(format)
                    .map_err(|message| DeptreeError::Validation { message })?,
            ),
            None => None,
        };

        Ok(Self {
            registry_url: cli
                .registry_url
                .or_else(|| file.registry_url.clone())
                .unwrap_or(defaults.registry_url),
            timeout: cli
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_concurrency: cli.max_concurrency.or(file.max_concurrency),
            depth: cli.depth.or(file.depth).unwrap_or(defaults.depth),
            format: cli.format.or(file_format).unwrap_or(defaults.format),
        })
    }
}
