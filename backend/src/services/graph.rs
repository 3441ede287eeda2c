//! Author → bill → policy-area relationship graph.
//!
//! Nodes are keyed by a category-qualified [`NodeId`], so a bill titled the
//! same as an author still yields two nodes. Both nodes and edges keep
//! first-insertion order; re-inserting an existing node or edge is a no-op.

use std::collections::HashSet;

use crate::api::{GraphEdge, GraphNode, NodeCategory, NodeId, RelationshipGraph};
use crate::models::Record;

#[derive(Default)]
struct GraphBuilder {
    visited: HashSet<NodeId>,
    nodes: Vec<GraphNode>,
    seen_edges: HashSet<(NodeId, NodeId)>,
    edges: Vec<GraphEdge>,
}

impl GraphBuilder {
    /// First-seen node content wins; later visits do not update it.
    fn add_node(&mut self, id: &NodeId, make: impl FnOnce() -> GraphNode) {
        if self.visited.insert(id.clone()) {
            self.nodes.push(make());
        }
    }

    fn add_edge(&mut self, source: &NodeId, target: &NodeId) {
        if self.seen_edges.insert((source.clone(), target.clone())) {
            self.edges.push(GraphEdge {
                source: source.clone(),
                target: target.clone(),
            });
        }
    }

    fn finish(self) -> RelationshipGraph {
        RelationshipGraph {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}

fn bill_node(id: &NodeId, record: &Record) -> GraphNode {
    let mut tooltip = format!("Bill: {}", record.title);
    if let Some(date) = record.date {
        tooltip.push_str(&format!("\nIntroduced: {}", date));
    }
    if let Some(link) = &record.link {
        tooltip.push_str(&format!("\nLink: {}", link));
    }
    GraphNode {
        id: id.clone(),
        label: record.title.clone(),
        category: NodeCategory::Bill,
        color: NodeCategory::Bill.color().to_string(),
        tooltip,
        link: record.link.clone(),
    }
}

fn plain_node(id: &NodeId, label: &str, category: NodeCategory) -> GraphNode {
    GraphNode {
        id: id.clone(),
        label: label.to_string(),
        category,
        color: category.color().to_string(),
        tooltip: format!("{}: {}", category.display_name(), label),
        link: None,
    }
}

/// Build the relationship graph in a single pass over `records`.
pub fn build_graph(records: &[Record]) -> RelationshipGraph {
    let mut builder = GraphBuilder::default();

    for record in records {
        let bill = NodeId::Bill(record.title.clone());
        builder.add_node(&bill, || bill_node(&bill, record));

        let author = record.author.as_deref().map(|name| {
            let id = NodeId::Author(name.to_string());
            builder.add_node(&id, || plain_node(&id, name, NodeCategory::Author));
            id
        });

        let policy = record.policy_area.as_deref().map(|area| {
            let id = NodeId::Policy(area.to_string());
            builder.add_node(&id, || plain_node(&id, area, NodeCategory::PolicyArea));
            id
        });

        if let Some(author) = &author {
            builder.add_edge(author, &bill);
        }
        if let Some(policy) = &policy {
            builder.add_edge(&bill, policy);
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(author: Option<&str>, title: &str, policy: Option<&str>) -> Record {
        Record {
            author: author.map(str::to_string),
            date: NaiveDate::from_ymd_opt(2020, 1, 1),
            policy_area: policy.map(str::to_string),
            enactment_method: Some("Signed".to_string()),
            title: title.to_string(),
            link: None,
        }
    }

    #[test]
    fn test_scenario_two_authors_one_bill() {
        let records = vec![
            record(Some("A"), "Bill 1", Some("X")),
            record(Some("B"), "Bill 1", Some("X")),
        ];
        let graph = build_graph(&records);

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.clone()).collect();
        assert_eq!(
            ids,
            vec![
                NodeId::Bill("Bill 1".to_string()),
                NodeId::Author("A".to_string()),
                NodeId::Policy("X".to_string()),
                NodeId::Author("B".to_string()),
            ]
        );

        let edges: Vec<_> = graph
            .edges
            .iter()
            .map(|e| (e.source.clone(), e.target.clone()))
            .collect();
        assert_eq!(
            edges,
            vec![
                (NodeId::Author("A".to_string()), NodeId::Bill("Bill 1".to_string())),
                (NodeId::Bill("Bill 1".to_string()), NodeId::Policy("X".to_string())),
                (NodeId::Author("B".to_string()), NodeId::Bill("Bill 1".to_string())),
            ]
        );
        assert_eq!(graph.node_count, 4);
        assert_eq!(graph.edge_count, 3);
    }

    #[test]
    fn test_duplicate_edge_is_idempotent() {
        let records = vec![
            record(Some("A"), "Bill 1", None),
            record(Some("A"), "Bill 1", None),
        ];
        let graph = build_graph(&records);
        assert_eq!(graph.edge_count, 1);
        assert_eq!(graph.node_count, 2);
    }

    #[test]
    fn test_absent_author_and_policy_add_no_edges() {
        let graph = build_graph(&[record(None, "Orphan", None)]);
        assert_eq!(graph.node_count, 1);
        assert_eq!(graph.edge_count, 0);
        assert_eq!(graph.nodes[0].category, NodeCategory::Bill);
        assert_eq!(graph.nodes[0].tooltip, "Bill: Orphan\nIntroduced: 2020-01-01");
    }

    #[test]
    fn test_title_equal_to_author_does_not_collide() {
        let graph = build_graph(&[record(Some("Smith"), "Smith", Some("X"))]);

        assert_eq!(graph.node_count, 3);
        let categories: Vec<_> = graph.nodes.iter().map(|n| n.category).collect();
        assert_eq!(
            categories,
            vec![NodeCategory::Bill, NodeCategory::Author, NodeCategory::PolicyArea]
        );
        assert_eq!(graph.edges[0].source, NodeId::Author("Smith".to_string()));
        assert_eq!(graph.edges[0].target, NodeId::Bill("Smith".to_string()));
    }

    #[test]
    fn test_first_seen_tooltip_wins() {
        let mut first = record(Some("A"), "Bill 1", None);
        first.link = Some("https://first.example".to_string());
        let mut second = record(Some("B"), "Bill 1", None);
        second.date = NaiveDate::from_ymd_opt(2022, 2, 2);
        second.link = Some("https://second.example".to_string());

        let graph = build_graph(&[first, second]);
        let bill = &graph.nodes[0];
        assert_eq!(
            bill.tooltip,
            "Bill: Bill 1\nIntroduced: 2020-01-01\nLink: https://first.example"
        );
        assert_eq!(bill.link.as_deref(), Some("https://first.example"));
    }

    #[test]
    fn test_node_colors_by_category() {
        let graph = build_graph(&[record(Some("A"), "Bill 1", Some("X"))]);
        let colors: Vec<_> = graph.nodes.iter().map(|n| n.color.as_str()).collect();
        assert_eq!(colors, vec!["#ffa500", "#1f78b4", "#33a02c"]);
        assert_eq!(graph.nodes[1].tooltip, "Author: A");
        assert_eq!(graph.nodes[2].tooltip, "Policy Area: X");
    }
}
