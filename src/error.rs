//! Error types for gpu-doctor.
//!
//! This module defines [`DoctorError`], the error type used outside the probe
//! set, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probes never return errors: a missing tool, file, or variable is an
//!   ordinary Fail/Warn outcome, and faults inside a probe map to "not found"
//! - `DoctorError` covers what can stop a run before or after the probes
//!   (unreadable config, serialization of the report)
//! - Use `anyhow::Error` (via `DoctorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for gpu-doctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// An explicitly requested configuration file does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for gpu-doctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;
