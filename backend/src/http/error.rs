//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::db::SourceError;
use crate::services::AnalysisError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Internal server error
    Internal(String),
    /// Record source failure
    Source(SourceError),
    /// Analysis failure
    Analysis(AnalysisError),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ApiError) {
        match self {
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Source(e) => {
                let (status, code) = match &e {
                    SourceError::MissingSource { .. } => {
                        (StatusCode::SERVICE_UNAVAILABLE, "MISSING_SOURCE")
                    }
                    SourceError::ParseError { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "SOURCE_PARSE_ERROR")
                    }
                    SourceError::ConfigurationError { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR")
                    }
                    SourceError::InternalError { .. } => {
                        (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
                    }
                };
                let body = ApiError::new(code, e.message());
                let body = if e.context().is_empty() {
                    body
                } else {
                    body.with_details(e.context().to_string())
                };
                (status, body)
            }
            AppError::Analysis(e) => {
                let status = if e.is_invalid_input() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::UNPROCESSABLE_ENTITY
                };
                let code = match &e {
                    AnalysisError::InvalidFieldSelection { .. } => "INVALID_FIELD",
                    AnalysisError::UnknownFacetValue { .. } => "UNKNOWN_FACET_VALUE",
                    AnalysisError::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
                    AnalysisError::EmptyDataset { .. } => "EMPTY_DATASET",
                    AnalysisError::NoValidDates => "NO_VALID_DATES",
                };
                (status, ApiError::new(code, e.to_string()))
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_body();
        if status.is_server_error() {
            warn!("{} {}: {}", status.as_u16(), error.code, error.message);
        }
        (status, Json(error)).into_response()
    }
}

impl From<SourceError> for AppError {
    fn from(err: SourceError) -> Self {
        AppError::Source(err)
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Analysis(err)
    }
}
