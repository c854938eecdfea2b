//! Configuration loading from disk.
//!
//! Loading only parses. Command-line overrides are applied on top of the
//! parsed file and the result is validated once, in [`resolve_config`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Values given on the command line; each replaces the file's value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub bind_address: Option<String>,
    pub proto_path: Option<PathBuf>,
}

impl Overrides {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(bind_address) = self.bind_address {
            config.listener.bind_address = bind_address;
        }
        if let Some(proto_path) = self.proto_path {
            config.schema.proto_path = proto_path;
        }
    }
}

/// Parse configuration from a TOML file without validating it.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Build the effective configuration: file (or defaults), then
/// overrides, then a single validation pass.
pub fn resolve_config(
    file: Option<&Path>,
    overrides: Overrides,
) -> Result<ServerConfig, ConfigError> {
    let mut config = match file {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    overrides.apply(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
