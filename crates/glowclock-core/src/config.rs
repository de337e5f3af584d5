use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

pub use glowclock_proto::config::*;

use glowclock_proto::config::{Config, ConfigValidationError, DEFAULT_CONFIG_FILE_PATH};
use log::{info, warn};
use shellexpand::full;
use thiserror::Error;

pub mod manager;

pub use manager::{ConfigApplied, ConfigImpact, ConfigManager, ConfigManagerError};

/// Failures while locating or decoding the configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to expand config path {path}: {reason}")]
    Expand { path: String, reason: String },
    #[error("config file does not exist: {}", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path:   PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config at {}: {source}", .path.display())]
    Validation {
        path:   PathBuf,
        #[source]
        source: ConfigValidationError,
    },
}

/// Resolves the configuration path and loads the file.
///
/// An explicit path must exist. The default path may be absent, in which
/// case the built-in defaults are used. A file that exists but cannot be
/// decoded or validated is logged and replaced by the defaults as well.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigLoadError> {
    let expanded = match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigLoadError::Missing { path: expanded });
            }

            expanded
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if !expanded.exists() {
                info!("No config file at {expanded:?}, using defaults");
                return Ok((Config::default(), expanded));
            }

            expanded
        }
    };

    let config = read_config(&expanded).unwrap_or_else(|err| {
        warn!("{err}, falling back to defaults");
        Config::default()
    });

    Ok((config, expanded))
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigLoadError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigLoadError::Expand {
        path:   str_path.to_string(),
        reason: err.to_string(),
    })?;

    Ok(PathBuf::from(expanded.to_string()))
}

/// Reads, decodes and validates the config file at `path`.
pub fn read_config(path: &Path) -> Result<Config, ConfigLoadError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Decoding config file {path:?}");

    let config: Config = toml::from_str(&content).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.validate().map_err(|source| ConfigLoadError::Validation {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Config file loaded successfully");

    Ok(config)
}
