//! Configuration file discovery and loading.
//!
//! Resolution order:
//! 1. An explicit path (`--config` or `GPU_DOCTOR_CONFIG`); it must exist
//! 2. `.gpu-doctor.yml` in the working directory, if present
//! 3. Built-in defaults

use crate::config::schema::DoctorConfig;
use crate::error::{DoctorError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".gpu-doctor.yml";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file.
    File(PathBuf),
    /// No file; built-in defaults.
    Defaults,
}

/// Find the config file to use, if any.
///
/// An explicit path is returned as-is (existence is checked when loading);
/// otherwise the working directory is searched.
pub fn discover(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let candidate = working_dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<DoctorConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DoctorError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DoctorError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config. Empty content yields the defaults.
pub fn parse_config(content: &str, path: &Path) -> Result<DoctorConfig> {
    if content.trim().is_empty() {
        return Ok(DoctorConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| DoctorError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve and load the effective configuration.
pub fn load_config(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> Result<(DoctorConfig, ConfigSource)> {
    match discover(explicit, working_dir) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            let config = load_config_file(&path)?;
            Ok((config, ConfigSource::File(path)))
        }
        None => {
            tracing::debug!("No config file found; using built-in defaults");
            Ok((DoctorConfig::default(), ConfigSource::Defaults))
        }
    }
}
