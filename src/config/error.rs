//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Diagnosis threshold must be at least {min}, got {actual}")]
    InvalidThreshold { min: usize, actual: usize },

    #[error("Extra reset keywords must not be blank")]
    BlankResetKeyword,

    #[error("Content catalog not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("Invalid log format '{0}' (expected 'pretty' or 'json')")]
    InvalidLogFormat(String),

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}
