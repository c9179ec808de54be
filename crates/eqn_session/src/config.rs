//! Session defaults persisted as TOML.
//!
//! A missing file yields the defaults; any other read or parse failure is a
//! [`ConfigError`].

use eqn_didactic::EnhancerOptions;
use eqn_model::ExplanationLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default file name looked up in the working directory.
pub const CONFIG_FILE: &str = "eqn_config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub explanation_level: ExplanationLevel,
    pub include_conceptual_connections: bool,
    pub include_error_prevention: bool,
    pub include_graph: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            explanation_level: ExplanationLevel::Intermediate,
            include_conceptual_connections: true,
            include_error_prevention: true,
            include_graph: true,
        }
    }
}

impl SessionConfig {
    /// Load from `path`. A missing file yields the defaults; missing keys
    /// take their default values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn enhancer_options(&self) -> EnhancerOptions {
        EnhancerOptions {
            include_conceptual_connections: self.include_conceptual_connections,
            include_error_prevention: self.include_error_prevention,
        }
    }
}
