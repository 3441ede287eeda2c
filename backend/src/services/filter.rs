//! The filter engine shared by basic search, advanced filtering and every view.

use crate::api::ResultsTable;
use crate::models::{BasicSearch, DateRange, FacetSelection, Record};

/// Records matching `selection`, in input order.
///
/// Zero matches is a valid outcome and yields an empty vector.
pub fn filter_records(records: &[Record], selection: &FacetSelection) -> Vec<Record> {
    records
        .iter()
        .filter(|record| selection.matches(record))
        .cloned()
        .collect()
}

/// Run a basic (single-facet) search through the same engine.
pub fn basic_search(records: &[Record], search: BasicSearch, full_range: DateRange) -> Vec<Record> {
    let selection = search.into_selection(full_range);
    filter_records(records, &selection)
}

/// Results table for a filtered record set.
pub fn results_table(records: Vec<Record>) -> ResultsTable {
    ResultsTable {
        total: records.len(),
        records,
    }
}
