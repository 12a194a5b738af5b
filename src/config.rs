//! Adapter configuration loading.

use crate::dispatch::ExecutionCoordinator;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Adapter configuration.
///
/// Both fields are required. An empty `command_prefix` is legal and makes
/// every message a command candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct AdapterConfig {
    /// Prefix that marks a message as a command invocation (e.g. "!").
    pub command_prefix: String,
    /// Scheduling strategy for dispatched commands.
    pub coordinator: ExecutionCoordinator,
}

impl AdapterConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
