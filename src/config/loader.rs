//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::MirrorlistConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Error opening config: {}", e),
            ConfigError::Parse(e) => write!(f, "Error reading config: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a YAML file.
///
/// Repo keys in the mirror table are lowercased before validation so the
/// lookup path can rely on the invariant.
pub fn load_config(path: &Path) -> Result<MirrorlistConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let mut config: MirrorlistConfig =
        serde_yaml::from_str(&content).map_err(ConfigError::Parse)?;
    config.mirrors = std::mem::take(&mut config.mirrors).normalized();

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
