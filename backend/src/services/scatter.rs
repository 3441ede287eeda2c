use crate::api::{ScatterData, ScatterPoint};
use crate::models::{Field, Record};

use super::error::AnalysisResult;

/// Build scatter plot points, one per record.
///
/// Field names are validated up front; anything outside
/// {policy_area, date, author, enactment_method} is rejected before a single
/// point is built.
pub fn build_scatter(
    records: &[Record],
    x_field: &str,
    y_field: &str,
    color_field: &str,
) -> AnalysisResult<ScatterData> {
    let x: Field = x_field.parse()?;
    let y: Field = y_field.parse()?;
    let color: Field = color_field.parse()?;

    Ok(build_scatter_for(records, x, y, color))
}

/// Typed variant of [`build_scatter`] for callers that already hold [`Field`]s.
pub fn build_scatter_for(records: &[Record], x: Field, y: Field, color: Field) -> ScatterData {
    let points: Vec<ScatterPoint> = records
        .iter()
        .map(|record| ScatterPoint {
            x: x.value_of(record),
            y: y.value_of(record),
            color: color.value_of(record),
            title: record.title.clone(),
            link: record.link.clone(),
            enactment_method: record.enactment_method.clone(),
            date: record.date,
        })
        .collect();

    ScatterData {
        x_field: x,
        y_field: y,
        color_field: color,
        x_label: x.display_label().to_string(),
        y_label: y.display_label().to_string(),
        color_label: color.display_label().to_string(),
        total_count: points.len(),
        points,
    }
}
