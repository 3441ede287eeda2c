//! Tracker configuration file support.
//!
//! Configuration comes from `tracker.toml`:
//!
//! ```toml
//! [source]
//! type = "json"
//! path = "data/bills.json"
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! ```
//!
//! `ELT_CONFIG` points at an explicit file. Without any file the settings are
//! read from `ELT_SOURCE_TYPE` and `ELT_DATA_PATH`. `HOST` and `PORT` always
//! override the `[server]` section when set.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::{ErrorContext, SourceError, SourceResult};
use super::factory::SourceType;

pub const CONFIG_ENV: &str = "ELT_CONFIG";
pub const SOURCE_TYPE_ENV: &str = "ELT_SOURCE_TYPE";
pub const DATA_PATH_ENV: &str = "ELT_DATA_PATH";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSettings {
    #[serde(rename = "type", default = "default_source_type")]
    pub source_type: String,
    /// Data file for file-backed sources.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            source_type: default_source_type(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_source_type() -> String {
    "json".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SourceResult<Self> {
        let path = path.as_ref();
        let context = || ErrorContext::new("read_config").with_entity(path.display().to_string());

        let content = fs::read_to_string(path).map_err(|e| {
            SourceError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            SourceError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                context(),
            )
        })
    }

    /// Load configuration from the default location.
    ///
    /// Uses `ELT_CONFIG` when set, otherwise the first `tracker.toml` found
    /// by [`find_default_file`](Self::find_default_file).
    pub fn from_default_location() -> SourceResult<Self> {
        if let Ok(explicit) = env::var(CONFIG_ENV) {
            return Self::from_file(explicit);
        }

        match Self::find_default_file() {
            Some(path) => {
                debug!("Using configuration file {}", path.display());
                Self::from_file(&path)
            }
            None => Err(SourceError::configuration(
                "No tracker.toml found in standard locations",
            )),
        }
    }

    /// Searches for `tracker.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn find_default_file() -> Option<PathBuf> {
        [
            PathBuf::from("tracker.toml"),
            PathBuf::from("backend/tracker.toml"),
            PathBuf::from("../tracker.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Settings from `ELT_SOURCE_TYPE` / `ELT_DATA_PATH` only.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(source_type) = env::var(SOURCE_TYPE_ENV) {
            config.source.source_type = source_type;
        }
        config.source.path = env::var(DATA_PATH_ENV).ok().map(PathBuf::from);
        config
    }

    /// The configuration the server starts with.
    ///
    /// A config file wins when one exists; a broken file is an error, never a
    /// silent fallback. `HOST`/`PORT` are applied last.
    pub fn load() -> SourceResult<Self> {
        let config = if env::var(CONFIG_ENV).is_ok() || Self::find_default_file().is_some() {
            Self::from_default_location()?
        } else {
            debug!("No configuration file found, using environment");
            Self::from_env()
        };
        config.with_env_overrides()
    }

    /// Apply `HOST` and `PORT` on top of the `[server]` section.
    pub fn with_env_overrides(mut self) -> SourceResult<Self> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                SourceError::configuration_with_context(
                    format!("PORT must be a port number, got '{}'", port),
                    ErrorContext::new("read_env").with_entity("PORT"),
                )
            })?;
        }
        Ok(self)
    }

    /// Parsed `[source].type`.
    pub fn source_type(&self) -> SourceResult<SourceType> {
        self.source.source_type.parse().map_err(|e: String| {
            SourceError::configuration_with_context(
                e,
                ErrorContext::new("read_config").with_entity("source.type"),
            )
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
