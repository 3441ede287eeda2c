use chrono::Duration;

use crate::api::{TimelineData, TimelineInterval};
use crate::models::Record;

use super::error::{AnalysisError, AnalysisResult};

/// One interval per dated record: `[date, date + 1 day)`, labelled by title
/// and grouped by author.
///
/// Fails with [`AnalysisError::NoValidDates`] when nothing carries a date.
pub fn build_timeline(records: &[Record]) -> AnalysisResult<TimelineData> {
    let intervals: Vec<TimelineInterval> = records
        .iter()
        .filter_map(|record| {
            let start = record.date?;
            Some(TimelineInterval {
                start,
                end: start + Duration::days(1),
                label: record.title.clone(),
                group: record.author.clone(),
                policy_area: record.policy_area.clone(),
                enactment_method: record.enactment_method.clone(),
                link: record.link.clone(),
            })
        })
        .collect();

    let axis_start = intervals
        .iter()
        .map(|i| i.start)
        .min()
        .ok_or(AnalysisError::NoValidDates)?;
    let axis_end = intervals
        .iter()
        .map(|i| i.end)
        .max()
        .ok_or(AnalysisError::NoValidDates)?;

    Ok(TimelineData {
        intervals,
        axis_start,
        axis_end,
    })
}
