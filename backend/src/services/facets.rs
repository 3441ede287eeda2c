//! Facet index: distinct filter choices and date bounds.

use std::collections::BTreeSet;

use crate::api::{FacetIndex, FacetValues};
use crate::models::{DateRange, FacetSelection, Record};

use super::error::{AnalysisError, AnalysisResult};

/// Distinct, sorted, non-null values per facet over the dated records.
///
/// Never fails; an empty input gives empty sets.
pub fn facet_values(records: &[Record]) -> FacetValues {
    let mut authors = BTreeSet::new();
    let mut policy_areas = BTreeSet::new();
    let mut enactment_methods = BTreeSet::new();

    for record in records.iter().filter(|r| r.is_dated()) {
        if let Some(author) = &record.author {
            authors.insert(author.clone());
        }
        if let Some(policy) = &record.policy_area {
            policy_areas.insert(policy.clone());
        }
        if let Some(method) = &record.enactment_method {
            enactment_methods.insert(method.clone());
        }
    }

    FacetValues {
        authors: authors.into_iter().collect(),
        policy_areas: policy_areas.into_iter().collect(),
        enactment_methods: enactment_methods.into_iter().collect(),
    }
}

/// Observed date bounds of the working set.
pub fn date_bounds(records: &[Record]) -> AnalysisResult<DateRange> {
    let mut dates = records.iter().filter_map(|r| r.date);
    let first = dates
        .next()
        .ok_or_else(|| AnalysisError::empty_dataset("facet date bounds"))?;
    let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Ok(DateRange::new(min, max))
}

/// Full facet index over the working set.
///
/// Fails with [`AnalysisError::EmptyDataset`] when no record carries a date.
pub fn facets(records: &[Record]) -> AnalysisResult<FacetIndex> {
    let bounds = date_bounds(records)?;
    let values = facet_values(records);

    Ok(FacetIndex {
        authors: values.authors,
        policy_areas: values.policy_areas,
        enactment_methods: values.enactment_methods,
        date_min: bounds.start,
        date_max: bounds.end,
    })
}

impl FacetIndex {
    /// The observed range, used as the default date selection.
    pub fn full_range(&self) -> DateRange {
        DateRange::new(self.date_min, self.date_max)
    }

    /// Wildcard selection over the observed range.
    pub fn select_all(&self) -> FacetSelection {
        FacetSelection::new(self.full_range())
    }

    /// Reject selections naming values the index does not know.
    pub fn validate(&self, selection: &FacetSelection) -> AnalysisResult<()> {
        check_known("author", &selection.authors, &self.authors)?;
        check_known("policy_area", &selection.policy_areas, &self.policy_areas)?;
        check_known(
            "enactment_method",
            &selection.enactment_methods,
            &self.enactment_methods,
        )?;

        if selection.range.is_inverted() {
            return Err(AnalysisError::InvalidDateRange {
                start: selection.range.start.to_string(),
                end: selection.range.end.to_string(),
            });
        }
        Ok(())
    }
}

fn check_known(facet: &str, selected: &BTreeSet<String>, known: &[String]) -> AnalysisResult<()> {
    // `known` is sorted, so binary search is valid
    match selected
        .iter()
        .find(|value| known.binary_search(*value).is_err())
    {
        Some(value) => Err(AnalysisError::UnknownFacetValue {
            facet: facet.to_string(),
            value: value.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(author: Option<&str>, policy: Option<&str>, method: Option<&str>, date: Option<NaiveDate>) -> Record {
        Record {
            author: author.map(str::to_string),
            date,
            policy_area: policy.map(str::to_string),
            enactment_method: method.map(str::to_string),
            title: "Bill".to_string(),
            link: None,
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record(Some("B"), Some("Y"), Some("Signed"), Some(ymd(2021, 5, 1))),
            record(Some("A"), Some("X"), None, Some(ymd(2019, 2, 3))),
            record(None, Some("X"), Some("Veto Override"), Some(ymd(2020, 7, 4))),
            record(Some("Z"), Some("Undated"), Some("Undated"), None),
        ]
    }

    #[test]
    fn test_facets_sorted_distinct_non_null() {
        let index = facets(&sample()).unwrap();
        assert_eq!(index.authors, vec!["A", "B"]);
        assert_eq!(index.policy_areas, vec!["X", "Y"]);
        assert_eq!(index.enactment_methods, vec!["Signed", "Veto Override"]);
    }

    #[test]
    fn test_facets_date_bounds() {
        let index = facets(&sample()).unwrap();
        assert_eq!(index.date_min, ymd(2019, 2, 3));
        assert_eq!(index.date_max, ymd(2021, 5, 1));
        assert_eq!(index.full_range(), DateRange::new(ymd(2019, 2, 3), ymd(2021, 5, 1)));
    }

    #[test]
    fn test_facets_empty_dataset() {
        let err = facets(&[]).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyDataset { .. }));

        let undated = vec![record(Some("A"), None, None, None)];
        assert!(matches!(
            facets(&undated),
            Err(AnalysisError::EmptyDataset { .. })
        ));
        // Value sets alone never fail
        assert!(facet_values(&undated).authors.is_empty());
    }

    #[test]
    fn test_validate_accepts_known_values() {
        let index = facets(&sample()).unwrap();
        let selection = index
            .select_all()
            .with_authors(["A"])
            .with_policy_areas(["X", "Y"]);
        assert!(index.validate(&selection).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_value() {
        let index = facets(&sample()).unwrap();
        let selection = index.select_all().with_enactment_methods(["Pocket Veto"]);
        let err = index.validate(&selection).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownFacetValue {
                facet: "enactment_method".to_string(),
                value: "Pocket Veto".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let index = facets(&sample()).unwrap();
        let selection = index
            .select_all()
            .with_range(DateRange::new(ymd(2021, 1, 1), ymd(2020, 1, 1)));
        assert!(matches!(
            index.validate(&selection),
            Err(AnalysisError::InvalidDateRange { .. })
        ));
    }
}
