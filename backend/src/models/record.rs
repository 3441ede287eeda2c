//! Raw and canonical bill records.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One spreadsheet row as handed over by a record source.
///
/// Field names follow the tracker spreadsheet's column labels; snake_case
/// aliases are accepted for hand-written fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Single author or a comma-separated list of authors.
    #[serde(rename = "Author(s)", alias = "authors", default, deserialize_with = "cell")]
    pub authors: Option<String>,
    /// Original introduction date, in whatever textual form the sheet used.
    #[serde(
        rename = "Original Introduction Date:",
        alias = "date",
        default,
        deserialize_with = "cell"
    )]
    pub date: Option<String>,
    #[serde(
        rename = "Main policy topic",
        alias = "policy_area",
        default,
        deserialize_with = "cell"
    )]
    pub policy_area: Option<String>,
    /// Display text of the link cell; may embed the URL itself.
    #[serde(
        rename = "Current Link (Inc. Amndt, if applicable)",
        alias = "title_and_link",
        default,
        deserialize_with = "cell"
    )]
    pub title_and_link: Option<String>,
    #[serde(
        rename = "Method of Enactment",
        alias = "enactment_method",
        default,
        deserialize_with = "cell"
    )]
    pub enactment_method: Option<String>,
}

impl RawRow {
    pub fn new(
        authors: Option<&str>,
        date: Option<&str>,
        policy_area: Option<&str>,
        title_and_link: Option<&str>,
        enactment_method: Option<&str>,
    ) -> Self {
        Self {
            authors: authors.map(str::to_string),
            date: date.map(str::to_string),
            policy_area: policy_area.map(str::to_string),
            title_and_link: title_and_link.map(str::to_string),
            enactment_method: enactment_method.map(str::to_string),
        }
    }
}

/// Spreadsheet exports mix strings, numbers and blanks in the same column.
fn cell<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// Canonical (bill, author) record produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub author: Option<String>,
    pub date: Option<NaiveDate>,
    pub policy_area: Option<String>,
    pub enactment_method: Option<String>,
    pub title: String,
    pub link: Option<String>,
}

impl Record {
    /// Whether this record belongs to the working set.
    pub fn is_dated(&self) -> bool {
        self.date.is_some()
    }
}
