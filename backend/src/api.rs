//! Public API surface for the tracker backend.
//!
//! This file consolidates the DTO types returned by the view builders and the
//! HTTP API. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::dataset::DatasetInfo;
pub use crate::routes::facets::FacetIndex;
pub use crate::routes::facets::FacetValues;
pub use crate::routes::flow::FlowDiagram;
pub use crate::routes::flow::FlowLink;
pub use crate::routes::graph::GraphEdge;
pub use crate::routes::graph::GraphNode;
pub use crate::routes::graph::NodeCategory;
pub use crate::routes::graph::NodeId;
pub use crate::routes::graph::RelationshipGraph;
pub use crate::routes::records::ResultsTable;
pub use crate::routes::scatter::ScatterData;
pub use crate::routes::scatter::ScatterPoint;
pub use crate::routes::timeline::TimelineData;
pub use crate::routes::timeline::TimelineInterval;
pub use crate::routes::yearly::YearCount;
pub use crate::routes::yearly::YearlyCounts;

pub use crate::models::{
    BasicSearch, DateRange, FacetSelection, Field, FieldValue, RawRow, Record, SearchMode,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_record_json_shape() {
        let record = Record {
            author: Some("A".to_string()),
            date: NaiveDate::from_ymd_opt(2020, 1, 1),
            policy_area: Some("X".to_string()),
            enactment_method: None,
            title: "Bill 1".to_string(),
            link: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["author"], "A");
        assert_eq!(json["date"], "2020-01-01");
        assert!(json["enactment_method"].is_null());
        assert_eq!(json["title"], "Bill 1");
    }

    #[test]
    fn test_basic_search_deserializes_mode() {
        let search: BasicSearch =
            serde_json::from_str(r#"{"mode":"enactment_method","values":["Signed"]}"#).unwrap();
        assert_eq!(search.mode, SearchMode::EnactmentMethod);
        assert_eq!(search.values, vec!["Signed"]);
        assert!(search.range.is_none());
    }
}
