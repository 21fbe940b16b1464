//! Environment-based configuration
//!
//! This module provides configuration structs for the HTTP server and the
//! seed data location, populated from environment variables with sensible
//! defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{ConfigError, ConfigResult};

/// HTTP server configuration struct
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the server binds to
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let raw = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let bind_addr = raw.parse().map_err(|e| ConfigError::Invalid {
            var: "BIND_ADDR",
            message: format!("Invalid socket address: {}", e),
        })?;

        Ok(Self { bind_addr })
    }
}

/// Seed data configuration struct
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// Directory holding the static seed collections
    pub data_dir: PathBuf,
}

impl SeedConfig {
    /// Create a new SeedConfig from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let data_dir = env::var("MEDIA_DATA_DIR").unwrap_or_else(|_| "data".to_string());

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
        })
    }

    /// Path of the movies seed collection
    pub fn movies_path(&self) -> PathBuf {
        self.data_dir.join("movies.json")
    }

    /// Path of the series seed collection
    pub fn series_path(&self) -> PathBuf {
        self.data_dir.join("series.json")
    }
}
