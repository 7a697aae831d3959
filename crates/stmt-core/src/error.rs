//! Error types for the stmt-core library.
//!
//! Extraction and aggregation never fail; these errors only come from the
//! configuration layer and the I/O edges around it.

use thiserror::Error;

/// Main error type for the stmt library.
#[derive(Error, Debug)]
pub enum StmtError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a configuration file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised when validating a configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Anomaly threshold must be a positive, finite number of standard deviations.
    #[error("invalid anomaly threshold: {0}")]
    AnomalyThreshold(f64),

    /// Anomaly detection needs at least two samples to have a deviation.
    #[error("anomaly sample size must be at least 2, got {0}")]
    AnomalySample(usize),
}

/// Result type for the stmt library.
pub type Result<T> = std::result::Result<T, StmtError>;
