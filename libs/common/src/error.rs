//! Custom error types for the common library
//!
//! This module defines application-specific error types that can be used
//! throughout the application.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed
    #[error("Invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

/// Type alias for Result with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Custom error type for seed data loading
#[derive(Error, Debug)]
pub enum SeedError {
    /// Error occurred while reading a seed file
    #[error("Failed to read seed file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error occurred while parsing a seed file
    #[error("Failed to parse seed file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Type alias for Result with SeedError
pub type SeedResult<T> = Result<T, SeedError>;
