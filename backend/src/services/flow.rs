//! Three-layer author → policy area → enactment method flow diagram.

use std::collections::{BTreeSet, HashMap};

use crate::api::{FlowDiagram, FlowLink};
use crate::models::Record;

/// Weighted links keyed by (source, target), ordered by first occurrence.
#[derive(Default)]
struct LinkAccumulator {
    positions: HashMap<(usize, usize), usize>,
    links: Vec<FlowLink>,
}

impl LinkAccumulator {
    fn add(&mut self, source: usize, target: usize) {
        match self.positions.get(&(source, target)) {
            Some(&pos) => self.links[pos].value += 1,
            None => {
                self.positions.insert((source, target), self.links.len());
                self.links.push(FlowLink {
                    source,
                    target,
                    value: 1,
                });
            }
        }
    }
}

fn sorted_layer<'a>(values: impl Iterator<Item = Option<&'a String>>) -> Vec<String> {
    values
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn index_of(layer: &[String], offset: usize, value: &str) -> Option<usize> {
    layer
        .binary_search_by(|probe| probe.as_str().cmp(value))
        .ok()
        .map(|i| i + offset)
}

/// Build the flow diagram.
///
/// Node indices are global: authors occupy `[0, A)`, policy areas `[A, A+P)`
/// and methods `[A+P, A+P+M)`. Author→policy links are accumulated first,
/// then policy→method links; repeated pairs add to `value`.
pub fn build_flow(records: &[Record]) -> FlowDiagram {
    let authors = sorted_layer(records.iter().map(|r| r.author.as_ref()));
    let policy_areas = sorted_layer(records.iter().map(|r| r.policy_area.as_ref()));
    let enactment_methods = sorted_layer(records.iter().map(|r| r.enactment_method.as_ref()));

    let policy_offset = authors.len();
    let method_offset = policy_offset + policy_areas.len();

    let mut links = LinkAccumulator::default();

    for record in records {
        if let (Some(author), Some(policy)) = (&record.author, &record.policy_area) {
            if let (Some(s), Some(t)) = (
                index_of(&authors, 0, author),
                index_of(&policy_areas, policy_offset, policy),
            ) {
                links.add(s, t);
            }
        }
    }

    for record in records {
        if let (Some(policy), Some(method)) = (&record.policy_area, &record.enactment_method) {
            if let (Some(s), Some(t)) = (
                index_of(&policy_areas, policy_offset, policy),
                index_of(&enactment_methods, method_offset, method),
            ) {
                links.add(s, t);
            }
        }
    }

    let labels = authors
        .iter()
        .chain(policy_areas.iter())
        .chain(enactment_methods.iter())
        .cloned()
        .collect();

    FlowDiagram {
        authors,
        policy_areas,
        enactment_methods,
        labels,
        links: links.links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(author: Option<&str>, policy: Option<&str>, method: Option<&str>) -> Record {
        Record {
            author: author.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2020, 1, 1),
            policy_area: policy.map(str::to_string),
            enactment_method: method.map(str::to_string),
            title: "Bill".to_string(),
            link: None,
        }
    }

    fn pairs(flow: &FlowDiagram) -> Vec<(usize, usize, u64)> {
        flow.links.iter().map(|l| (l.source, l.target, l.value)).collect()
    }

    #[test]
    fn test_weights_accumulate() {
        let records = vec![
            record(Some("A"), Some("X"), Some("Signed")),
            record(Some("A"), Some("X"), Some("Signed")),
        ];
        let flow = build_flow(&records);

        assert_eq!(flow.labels, vec!["A", "X", "Signed"]);
        assert_eq!(pairs(&flow), vec![(0, 1, 2), (1, 2, 2)]);
    }

    #[test]
    fn test_layer_offsets_and_order() {
        let records = vec![
            record(Some("B"), Some("Y"), Some("Veto Override")),
            record(Some("A"), Some("X"), Some("Signed")),
            record(Some("B"), Some("X"), Some("Signed")),
        ];
        let flow = build_flow(&records);

        assert_eq!(flow.authors, vec!["A", "B"]);
        assert_eq!(flow.policy_areas, vec!["X", "Y"]);
        assert_eq!(flow.enactment_methods, vec!["Signed", "Veto Override"]);
        assert_eq!(flow.labels, vec!["A", "B", "X", "Y", "Signed", "Veto Override"]);

        // author pass first, then policy pass, each in first-occurrence order
        assert_eq!(
            pairs(&flow),
            vec![(1, 3, 1), (0, 2, 1), (1, 2, 1), (3, 5, 1), (2, 4, 2)]
        );
    }

    #[test]
    fn test_partial_records_contribute_only_complete_pairs() {
        let records = vec![
            record(None, Some("X"), Some("Signed")),
            record(Some("A"), None, Some("Signed")),
            record(Some("A"), Some("X"), None),
        ];
        let flow = build_flow(&records);

        assert_eq!(flow.labels, vec!["A", "X", "Signed"]);
        assert_eq!(pairs(&flow), vec![(0, 1, 1), (1, 2, 1)]);
    }

    #[test]
    fn test_empty_input() {
        let flow = build_flow(&[]);
        assert!(flow.labels.is_empty());
        assert!(flow.links.is_empty());
    }

    #[test]
    fn test_same_string_in_two_layers_gets_two_indices() {
        let flow = build_flow(&[record(Some("Budget"), Some("Budget"), Some("Signed"))]);
        assert_eq!(flow.labels, vec!["Budget", "Budget", "Signed"]);
        assert_eq!(pairs(&flow), vec![(0, 1, 1), (1, 2, 1)]);
    }
}
