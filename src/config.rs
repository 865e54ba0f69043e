use crate::error::MetricsError;
use crate::eval::NdcgMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RAGMETRICS_CONFIG";

/// Config file looked up in the current directory when `RAGMETRICS_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "ragmetrics.toml";

/// Main configuration structure. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    #[serde(default)]
    pub hit_rate: HitRateConfig,
    #[serde(default)]
    pub mrr: MrrConfig,
    #[serde(default)]
    pub ndcg: NdcgConfig,
}

/// Hit Rate configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HitRateConfig {
    /// Score the fraction of retrieved ids that are relevant instead of 0/1.
    #[serde(default)]
    pub granular: bool,
}

/// MRR configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MrrConfig {
    /// Average reciprocal ranks of every hit instead of the first one.
    #[serde(default)]
    pub granular: bool,
}

/// NDCG configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NdcgConfig {
    #[serde(default)]
    pub mode: NdcgMode,
}

impl MetricsConfig {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in RAGMETRICS_CONFIG environment variable
    /// 2. ./ragmetrics.toml in current directory
    pub fn load() -> Result<Self> {
        Self::from_path(&Self::config_path())
    }

    /// Like [`MetricsConfig::load`], but falls back to defaults when no config file exists.
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_path(&path)
    }

    /// Read and parse one config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        log::debug!("Loaded metrics config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> crate::Result<Self> {
        toml::from_str(config_str).map_err(|e| MetricsError::Config(e.to_string()))
    }

    fn config_path() -> PathBuf {
        // .env is optional
        let _ = dotenv::dotenv();
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
    }
}
