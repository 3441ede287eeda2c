//! Data access: record sources, configuration and the dataset snapshot.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (HTTP handlers, embedding callers)   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  DatasetStore (store.rs)                                │
//! │  - Lazy first load, explicit reload / invalidate        │
//! │  - Normalization into the working set                   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  RecordSource trait (sources.rs)                        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────────┐
//!     │ JsonFileSource   InMemorySource  │
//!     └──────────────────────────────────┘
//! ```
//!
//! Sources are created by [`SourceFactory`] from a [`TrackerConfig`].

pub mod checksum;
pub mod config;
pub mod error;
pub mod factory;
pub mod sources;
pub mod store;

pub use checksum::calculate_checksum;
pub use config::{ServerSettings, SourceSettings, TrackerConfig};
pub use error::{ErrorContext, SourceError, SourceResult};
pub use factory::{SourceFactory, SourceType};
pub use sources::{InMemorySource, JsonFileSource, RecordSource, SourceBatch};
pub use store::{Dataset, DatasetStore};

use std::sync::Arc;

/// Build a dataset store for the given configuration.
pub fn open_store(config: &TrackerConfig) -> SourceResult<Arc<DatasetStore>> {
    let source = SourceFactory::from_config(config)?;
    Ok(Arc::new(DatasetStore::new(source)))
}
