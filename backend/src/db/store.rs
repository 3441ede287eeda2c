//! Lazily loaded, explicitly reloadable dataset snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::info;
use parking_lot::RwLock;

use super::error::SourceResult;
use super::sources::RecordSource;
use crate::api::DatasetInfo;
use crate::models::Record;
use crate::services::normalizer::normalize;

/// Immutable normalized dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
    pub source: String,
    pub raw_rows: usize,
    /// Working set: records with a present date, in source order.
    pub records: Vec<Record>,
    /// Records dropped from the working set for lack of a date.
    pub undated_records: usize,
}

impl Dataset {
    pub fn info(&self) -> DatasetInfo {
        DatasetInfo {
            source: self.source.clone(),
            checksum: self.checksum.clone(),
            loaded_at: self.loaded_at,
            raw_rows: self.raw_rows,
            records: self.records.len(),
            undated_records: self.undated_records,
        }
    }
}

/// Owns the current snapshot of a [`RecordSource`].
///
/// The first [`snapshot`](Self::snapshot) loads the source; later calls hand
/// out the same `Arc` until [`reload`](Self::reload) or
/// [`invalidate`](Self::invalidate). Nothing refreshes implicitly.
pub struct DatasetStore {
    source: Arc<dyn RecordSource>,
    current: RwLock<Option<Arc<Dataset>>>,
}

impl DatasetStore {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self {
            source,
            current: RwLock::new(None),
        }
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Current snapshot, loading it on first use.
    pub fn snapshot(&self) -> SourceResult<Arc<Dataset>> {
        if let Some(dataset) = self.current.read().as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let mut slot = self.current.write();
        // Another caller may have loaded while we waited for the lock
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }
        let dataset = Arc::new(self.load_dataset()?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Re-read the source and swap the snapshot.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> SourceResult<Arc<Dataset>> {
        let dataset = Arc::new(
            self.load_dataset()
                .map_err(|e| e.with_operation("reload"))?,
        );
        *self.current.write() = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Drop the snapshot; the next `snapshot()` reloads.
    pub fn invalidate(&self) {
        *self.current.write() = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    /// The loaded snapshot, if any. Never triggers a load.
    pub fn current(&self) -> Option<Arc<Dataset>> {
        self.current.read().clone()
    }

    fn load_dataset(&self) -> SourceResult<Dataset> {
        let batch = self.source.load()?;
        let normalized = normalize(&batch.rows, &batch.links);
        let total = normalized.len();
        let records: Vec<Record> = normalized.into_iter().filter(Record::is_dated).collect();
        let undated_records = total - records.len();

        info!(
            "Dataset loaded from {}: {} rows, {} records ({} undated), checksum {}",
            batch.origin,
            batch.rows.len(),
            records.len(),
            undated_records,
            batch.checksum
        );

        Ok(Dataset {
            checksum: batch.checksum,
            loaded_at: Utc::now(),
            source: batch.origin,
            raw_rows: batch.rows.len(),
            records,
            undated_records,
        })
    }
}
