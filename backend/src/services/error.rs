//! Error conditions surfaced by the analysis core.
//!
//! Parsing anomalies (unparseable dates, blank cells) are absorbed by the
//! normalizer and never show up here. Only precondition violations on
//! aggregate operations and invalid caller input are reported. An empty
//! filter result is a valid outcome, not an error.

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Facet bounds requested over a working set with no dated record.
    #[error("Empty dataset: no dated records to compute {operation}")]
    EmptyDataset { operation: String },

    /// Scatter axis outside {policy_area, date, author, enactment_method}.
    #[error("Invalid field selection: '{field}' is not one of policy_area, date, author, enactment_method")]
    InvalidFieldSelection { field: String },

    /// Timeline requested over zero dated records.
    #[error("No valid dates: a timeline needs at least one dated record")]
    NoValidDates,

    /// Selected value does not exist in the facet index.
    #[error("Unknown {facet} value: '{value}'")]
    UnknownFacetValue { facet: String, value: String },

    /// Date range with start after end.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange { start: String, end: String },
}

impl AnalysisError {
    pub fn empty_dataset(operation: impl Into<String>) -> Self {
        Self::EmptyDataset {
            operation: operation.into(),
        }
    }

    /// Whether the error comes from caller input rather than the data.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidFieldSelection { .. }
                | Self::UnknownFacetValue { .. }
                | Self::InvalidDateRange { .. }
        )
    }
}
