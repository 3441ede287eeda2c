//! Record sources: where raw spreadsheet rows come from.
//!
//! A source hands over the raw row table together with the position-aligned
//! hyperlink targets. Alignment is the source's job; the normalizer trusts it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::checksum::calculate_checksum;
use super::error::{ErrorContext, SourceError, SourceResult};
use crate::models::RawRow;

/// Keys under which a per-row hyperlink target may appear.
const HYPERLINK_KEYS: &[&str] = &["hyperlink", "Hyperlink", "link"];

/// One load of a source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceBatch {
    pub rows: Vec<RawRow>,
    /// Hyperlink target per row, by position.
    pub links: Vec<Option<String>>,
    /// SHA-256 of the content the rows were read from.
    pub checksum: String,
    /// Human-readable origin (file path or "memory").
    pub origin: String,
}

/// A provider of raw rows.
pub trait RecordSource: Send + Sync {
    /// Read the full row table. Every call re-reads the underlying content.
    fn load(&self) -> SourceResult<SourceBatch>;

    /// Short description used in logs and dataset info.
    fn describe(&self) -> String;
}

/// `{ "rows": [...], "links": [...] }` layout.
#[derive(Debug, Serialize, Deserialize)]
struct TableDocument {
    rows: Vec<RawRow>,
    #[serde(default)]
    links: Vec<Option<String>>,
}

/// Rows parsed from a JSON document, with links split out.
fn parse_document(content: &str, origin: &str) -> SourceResult<(Vec<RawRow>, Vec<Option<String>>)> {
    let context = || ErrorContext::new("parse").with_entity(origin.to_string());

    let value: Value = serde_json::from_str(content).map_err(|e| {
        SourceError::parse_with_context(format!("Invalid JSON: {}", e), context())
    })?;

    match value {
        Value::Object(_) => {
            let doc: TableDocument = serde_json::from_value(value).map_err(|e| {
                SourceError::parse_with_context(format!("Invalid row table: {}", e), context())
            })?;
            Ok((doc.rows, doc.links))
        }
        Value::Array(items) => {
            let mut rows = Vec::with_capacity(items.len());
            let mut links = Vec::with_capacity(items.len());
            for (index, mut item) in items.into_iter().enumerate() {
                let link = match item.as_object_mut() {
                    Some(obj) => HYPERLINK_KEYS
                        .iter()
                        .find_map(|key| obj.remove(*key))
                        .and_then(|v| v.as_str().map(str::to_string)),
                    None => {
                        return Err(SourceError::parse_with_context(
                            format!("Row {} is not an object", index),
                            context(),
                        ))
                    }
                };
                let row: RawRow = serde_json::from_value(item).map_err(|e| {
                    SourceError::parse_with_context(format!("Row {}: {}", index, e), context())
                })?;
                rows.push(row);
                links.push(link);
            }
            Ok((rows, links))
        }
        _ => Err(SourceError::parse_with_context(
            "Expected an array of rows or an object with a 'rows' key",
            context(),
        )),
    }
}

/// JSON export of the tracker spreadsheet on disk.
///
/// Accepts either an array of row objects (each optionally carrying a
/// `hyperlink` key) or an object `{ "rows": [...], "links": [...] }`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> SourceResult<SourceBatch> {
        let origin = self.path.display().to_string();
        let content = fs::read_to_string(&self.path).map_err(|e| {
            let context = ErrorContext::new("load")
                .with_entity(origin.clone())
                .with_details(e.to_string());
            match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    SourceError::missing_with_context("Source file is not readable", context)
                }
                _ => SourceError::InternalError {
                    message: "Failed to read source file".to_string(),
                    context,
                },
            }
        })?;

        let (rows, links) = parse_document(&content, &origin)?;
        info!("Loaded {} rows from {}", rows.len(), origin);

        Ok(SourceBatch {
            rows,
            links,
            checksum: calculate_checksum(content.as_bytes()),
            origin,
        })
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Rows held in memory; mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemorySource {
    table: RwLock<(Vec<RawRow>, Vec<Option<String>>)>,
}

impl InMemorySource {
    pub fn new(rows: Vec<RawRow>, links: Vec<Option<String>>) -> Self {
        Self {
            table: RwLock::new((rows, links)),
        }
    }

    /// Swap the held rows. Takes effect on the next `load`.
    pub fn replace(&self, rows: Vec<RawRow>, links: Vec<Option<String>>) {
        debug!("Replacing in-memory rows ({} rows)", rows.len());
        *self.table.write() = (rows, links);
    }
}

impl RecordSource for InMemorySource {
    fn load(&self) -> SourceResult<SourceBatch> {
        let (rows, links) = self.table.read().clone();
        let doc = TableDocument { rows, links };
        let bytes = serde_json::to_vec(&doc)
            .map_err(|e| SourceError::internal(format!("Failed to serialize rows: {}", e)))?;

        Ok(SourceBatch {
            checksum: calculate_checksum(&bytes),
            rows: doc.rows,
            links: doc.links,
            origin: "memory".to_string(),
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
