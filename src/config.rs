//! DGA configuration
//!
//! Handles loading of the optional `dga.yaml` file. Every field has a
//! default, so a missing file behaves exactly like an empty one. CLI flags
//! are applied on top with [`DgaConfig::with_overrides`].

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "dga.yaml";

/// Only supported schema version
pub const CONFIG_VERSION: u32 = 1;

/// Configuration file (`dga.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DgaConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// How results are printed
    #[serde(default)]
    pub output: OutputFormat,

    /// Print the decision rule that fired under each result
    #[serde(default)]
    pub explain: bool,

    /// Log filter directive (tracing `EnvFilter` syntax)
    #[serde(default = "default_log")]
    pub log: String,
}

/// Result rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `key: value` lines
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

fn default_log() -> String {
    "dga=warn".to_string()
}

impl Default for DgaConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputFormat::default(),
            explain: false,
            log: default_log(),
        }
    }
}

impl DgaConfig {
    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: DgaConfig = serde_norway::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        if config.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    /// Load a configuration file; the file must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load `dga.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }
        Self::load(&config_file).map(Some)
    }

    /// Resolve the effective configuration: an explicit path wins, then
    /// `dga.yaml` in `dir`, then defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::load_from_dir(dir)?.unwrap_or_default()),
        }
    }

    /// Apply CLI flags; flags can only switch features on
    pub fn with_overrides(mut self, json: bool, explain: bool) -> Self {
        if json {
            self.output = OutputFormat::Json;
        }
        self.explain |= explain;
        self
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}
