use serde::{Deserialize, Serialize};

// =========================================================
// Yearly count types + route
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Bills introduced per calendar year, ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyCounts {
    pub years: Vec<YearCount>,
}

/// Route path for the yearly count view
pub const POST_YEARLY_VIEW: &str = "/v1/views/yearly";
