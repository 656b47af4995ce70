//! Server configuration file support.
//!
//! Settings are read from a TOML file (`dashboard.toml`) when one exists and
//! then overridden by environment variables. Every field has a default, so
//! the server also starts with no file at all.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::services::DEFAULT_PERFORMANCE_SHEET;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid value for {name}: {message}")]
    InvalidEnv { name: String, message: String },
}

/// Dashboard server configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub uploads: UploadSettings,
}

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Upload handling settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSettings {
    /// Maximum request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Maximum number of payout files per valuation request.
    #[serde(default = "default_max_balance_files")]
    pub max_balance_files: usize,
    /// Sheet holding the delivery statistics.
    #[serde(default = "default_performance_sheet")]
    pub performance_sheet: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_max_balance_files() -> usize {
    2
}

fn default_performance_sheet() -> String {
    DEFAULT_PERFORMANCE_SHEET.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            max_balance_files: default_max_balance_files(),
            performance_sheet: default_performance_sheet(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from the first `dashboard.toml` found.
    ///
    /// Searches, in order:
    /// 1. `DASHBOARD_CONFIG` (if set)
    /// 2. Current directory
    /// 3. `backend/` directory
    /// 4. Parent directory
    ///
    /// Falls back to defaults when no file exists.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        if let Ok(path) = env::var("DASHBOARD_CONFIG") {
            return Self::from_file(path);
        }

        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                log::info!("loading configuration from {}", path.display());
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply `HOST` and `PORT` environment overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                name: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        Ok(self)
    }

    /// Full configuration: file (or defaults) plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.with_env_overrides()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
