//! Core error types for betterrest-core.
//!
//! This module defines the error hierarchy using thiserror. The bedtime
//! calculation itself only ever fails with [`EstimationFailure`]; the other
//! kinds cover caller input and configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Estimation errors
    #[error("Estimation failed: {0}")]
    Estimation(#[from] EstimationFailure),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The estimator could not produce a usable prediction.
///
/// Every variant means the same thing to a caller: there is no bedtime.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimationFailure {
    /// Model artifact missing, unreadable or malformed
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Inputs the estimator cannot work with (NaN, infinite, ...)
    #[error("Invalid estimator input: {0}")]
    InvalidInput(String),

    /// The estimator answered with something that is not a duration
    #[error("Invalid prediction: {0} seconds")]
    InvalidPrediction(f64),

    /// No answer within the deadline
    #[error("Estimator timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Any other estimator-side failure
    #[error("{0}")]
    Failed(String),
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

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Wake-up text is not `HH:MM`
    #[error("Malformed wake-up time '{0}': expected HH:MM")]
    MalformedTime(String),

    /// Out of range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        value: i64,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
