//! Core error types for studylab-core.
//!
//! This module defines the error hierarchy using thiserror. Expected
//! control-flow outcomes ("no suitable tasks today") are result values,
//! not errors; only genuine failures land here.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studylab-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

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

/// Store-specific errors.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the planner document
    #[error("Failed to read planner data at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the planner document
    #[error("Failed to write planner data at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The persisted document could not be parsed
    #[error("Planner data at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document could not be serialized
    #[error("Failed to serialize planner data: {0}")]
    Serialize(#[source] serde_json::Error),
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

    /// The config directory could not be resolved or created
    #[error("Failed to prepare data directory: {0}")]
    DataDir(String),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A rating (mood or energy) outside 1..=5
    #[error("Invalid value for '{field}': {value} (expected 1..=5)")]
    RatingOutOfRange { field: &'static str, value: u8 },

    /// Sleep hours must be finite and non-negative
    #[error("Invalid sleep hours: {0}")]
    InvalidSleepHours(f64),

    /// Invalid value for a named field
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },

    /// Technique code not present in the catalog
    #[error("Unknown technique code: {0}")]
    UnknownTechnique(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
