use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Field, FieldValue};

// =========================================================
// Scatter types + route
// =========================================================

/// One plotted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: Option<FieldValue>,
    pub y: Option<FieldValue>,
    pub color: Option<FieldValue>,
    pub title: String,
    pub link: Option<String>,
    pub enactment_method: Option<String>,
    pub date: Option<NaiveDate>,
}

/// Scatter plot dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScatterData {
    pub x_field: Field,
    pub y_field: Field,
    pub color_field: Field,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    pub total_count: usize,
    pub points: Vec<ScatterPoint>,
}

/// Route path for the scatter view
pub const POST_SCATTER_VIEW: &str = "/v1/views/scatter";
