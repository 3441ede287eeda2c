use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// Dataset snapshot types + route
// =========================================================

/// Summary of the loaded dataset snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub source: String,
    pub checksum: String,
    pub loaded_at: DateTime<Utc>,
    pub raw_rows: usize,
    pub records: usize,
    pub undated_records: usize,
}

/// Route path for an explicit dataset reload
pub const POST_RELOAD_DATASET: &str = "/v1/dataset/reload";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_info_round_trip() {
        let info = DatasetInfo {
            source: "memory".to_string(),
            checksum: "abc".to_string(),
            loaded_at: DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            raw_rows: 3,
            records: 4,
            undated_records: 1,
        };
        let json = serde_json::to_string(&info).unwrap();
        let back: DatasetInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
