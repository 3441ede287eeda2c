//! Record source factory.
//!
//! Creates the configured [`RecordSource`] from a [`TrackerConfig`] or the
//! environment.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use super::config::{TrackerConfig, DATA_PATH_ENV, SOURCE_TYPE_ENV};
use super::error::{ErrorContext, SourceError, SourceResult};
use super::sources::{InMemorySource, JsonFileSource, RecordSource};

/// Source type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceType {
    /// JSON export of the tracker spreadsheet
    Json,
    /// In-memory rows, starting empty
    Memory,
}

impl FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "memory" | "in-memory" | "local" => Ok(Self::Memory),
            _ => Err(format!("Unknown source type: {}", s)),
        }
    }
}

impl SourceType {
    /// Get source type from environment variable.
    ///
    /// Reads `ELT_SOURCE_TYPE`. Defaults to Json when `ELT_DATA_PATH` is set,
    /// otherwise Memory.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var(SOURCE_TYPE_ENV) {
            return val.parse().unwrap_or(Self::Memory);
        }

        if std::env::var(DATA_PATH_ENV).is_ok() {
            Self::Json
        } else {
            Self::Memory
        }
    }
}

/// Factory for record sources.
pub struct SourceFactory;

impl SourceFactory {
    /// Create a source of the given type.
    ///
    /// `path` is required for [`SourceType::Json`] and ignored otherwise.
    pub fn create(
        source_type: SourceType,
        path: Option<&Path>,
    ) -> SourceResult<Arc<dyn RecordSource>> {
        match source_type {
            SourceType::Json => {
                let path = path.ok_or_else(|| {
                    SourceError::configuration_with_context(
                        "JSON source requires a data path",
                        ErrorContext::new("create_source").with_entity("source.path"),
                    )
                })?;
                Ok(Arc::new(JsonFileSource::new(path)))
            }
            SourceType::Memory => Ok(Self::create_memory()),
        }
    }

    /// Create an empty in-memory source.
    pub fn create_memory() -> Arc<dyn RecordSource> {
        Arc::new(InMemorySource::default())
    }

    /// Create a source from a loaded configuration.
    pub fn from_config(config: &TrackerConfig) -> SourceResult<Arc<dyn RecordSource>> {
        let source_type = config.source_type()?;
        Self::create(source_type, config.source.path.as_deref())
    }

    /// Create a source from `ELT_SOURCE_TYPE` / `ELT_DATA_PATH`.
    pub fn from_env() -> SourceResult<Arc<dyn RecordSource>> {
        let config = TrackerConfig::from_env();
        Self::create(SourceType::from_env(), config.source.path.as_deref())
    }
}
