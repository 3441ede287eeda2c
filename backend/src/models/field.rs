//! Record fields that can be plotted on a scatter axis.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::services::error::AnalysisError;

/// Plottable record field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    PolicyArea,
    Date,
    Author,
    EnactmentMethod,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::PolicyArea,
        Field::Date,
        Field::Author,
        Field::EnactmentMethod,
    ];

    /// Machine name used in requests.
    pub fn key(self) -> &'static str {
        match self {
            Field::PolicyArea => "policy_area",
            Field::Date => "date",
            Field::Author => "author",
            Field::EnactmentMethod => "enactment_method",
        }
    }

    /// Axis title shown by chart renderers.
    pub fn display_label(self) -> &'static str {
        match self {
            Field::PolicyArea => "Policy Area",
            Field::Date => "Date Introduced",
            Field::Author => "Author",
            Field::EnactmentMethod => "Method of Enactment",
        }
    }

    /// Extract this field's value from a record.
    pub fn value_of(self, record: &Record) -> Option<FieldValue> {
        match self {
            Field::PolicyArea => record.policy_area.clone().map(FieldValue::Text),
            Field::Date => record.date.map(FieldValue::Date),
            Field::Author => record.author.clone().map(FieldValue::Text),
            Field::EnactmentMethod => record.enactment_method.clone().map(FieldValue::Text),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = AnalysisError;

    /// Accepts machine names and the spreadsheet-style display names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "policy_area" => Ok(Field::PolicyArea),
            "date" | "date_introduced" => Ok(Field::Date),
            "author" => Ok(Field::Author),
            "enactment_method" | "method_of_enactment" => Ok(Field::EnactmentMethod),
            _ => Err(AnalysisError::InvalidFieldSelection {
                field: s.to_string(),
            }),
        }
    }
}

/// Value of a plottable field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Date(NaiveDate),
    Text(String),
}
