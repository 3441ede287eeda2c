use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Timeline types + route
// =========================================================

/// One bill-author pair on the timeline, spanning `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub group: Option<String>,
    pub policy_area: Option<String>,
    pub enactment_method: Option<String>,
    pub link: Option<String>,
}

/// Timeline dataset with its axis bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineData {
    pub intervals: Vec<TimelineInterval>,
    pub axis_start: NaiveDate,
    pub axis_end: NaiveDate,
}

/// Route path for the timeline view
pub const POST_TIMELINE_VIEW: &str = "/v1/views/timeline";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_interval_clone() {
        let interval = TimelineInterval {
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
            label: "Bill 1".to_string(),
            group: Some("A".to_string()),
            policy_area: None,
            enactment_method: None,
            link: None,
        };
        let cloned = interval.clone();
        assert_eq!(cloned, interval);
        assert_eq!(cloned.group.as_deref(), Some("A"));
    }
}
