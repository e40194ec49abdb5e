//! Core error types for recovery-core.
//!
//! The calculation engine itself never fails on "no data yet" inputs; these
//! errors cover the ingestion boundary (snapshots, configuration) and the
//! validated value types such as [`crate::DailyCost`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for recovery-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown dotted configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be resolved or created
    #[error("Configuration directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    /// Daily cost must be a finite, strictly positive amount
    #[error("Daily cost must be greater than zero (got {0})")]
    NonPositiveDailyCost(f64),

    /// Goal amounts must be a finite, strictly positive amount
    #[error("Goal amount must be greater than zero (got {0})")]
    NonPositiveGoalAmount(f64),

    /// Calendar date string was not `YYYY-MM-DD`
    #[error("Invalid calendar date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
