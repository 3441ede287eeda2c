use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =========================================================
// Relationship graph types + route
// =========================================================

/// Category-qualified node identity.
///
/// Serialized as `"<category>:<name>"` (e.g. `"author:Smith"`), which is what
/// graph renderers use as the node key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum NodeId {
    Bill(String),
    Author(String),
    Policy(String),
}

impl NodeId {
    pub fn category(&self) -> NodeCategory {
        match self {
            NodeId::Bill(_) => NodeCategory::Bill,
            NodeId::Author(_) => NodeCategory::Author,
            NodeId::Policy(_) => NodeCategory::PolicyArea,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeId::Bill(name) | NodeId::Author(name) | NodeId::Policy(name) => name,
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self {
            NodeId::Bill(_) => "bill",
            NodeId::Author(_) => "author",
            NodeId::Policy(_) => "policy",
        };
        write!(f, "{}:{}", prefix, self.name())
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, name) = s
            .split_once(':')
            .ok_or_else(|| format!("Node id '{}' has no category prefix", s))?;
        let name = name.to_string();
        match prefix {
            "bill" => Ok(NodeId::Bill(name)),
            "author" => Ok(NodeId::Author(name)),
            "policy" => Ok(NodeId::Policy(name)),
            other => Err(format!("Unknown node category '{}'", other)),
        }
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for NodeId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeCategory {
    Bill,
    Author,
    PolicyArea,
}

impl NodeCategory {
    /// Presentation color for renderers.
    pub fn color(self) -> &'static str {
        match self {
            NodeCategory::Bill => "#ffa500",
            NodeCategory::Author => "#1f78b4",
            NodeCategory::PolicyArea => "#33a02c",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            NodeCategory::Bill => "Bill",
            NodeCategory::Author => "Author",
            NodeCategory::PolicyArea => "Policy Area",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub category: NodeCategory,
    pub color: String,
    pub tooltip: String,
    pub link: Option<String>,
}

/// Directed, unweighted edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Author → bill → policy-area graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub node_count: usize,
    pub edge_count: usize,
}

/// Route path for the relationship graph view
pub const POST_GRAPH_VIEW: &str = "/v1/views/graph";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_serializes_as_prefixed_key() {
        let id = NodeId::Author("Smith".to_string());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"author:Smith\"");

        let back: NodeId = serde_json::from_str("\"policy:Health\"").unwrap();
        assert_eq!(back, NodeId::Policy("Health".to_string()));
    }

    #[test]
    fn test_node_id_name_may_contain_colon() {
        let id: NodeId = "bill:HB 1: Budget".parse().unwrap();
        assert_eq!(id, NodeId::Bill("HB 1: Budget".to_string()));
        assert_eq!(id.to_string(), "bill:HB 1: Budget");
    }

    #[test]
    fn test_node_id_rejects_unknown_prefix() {
        assert!("senator:Smith".parse::<NodeId>().is_err());
        assert!("Smith".parse::<NodeId>().is_err());
        assert!(serde_json::from_str::<NodeId>("\"Smith\"").is_err());
    }

    #[test]
    fn test_same_name_different_category() {
        let bill = NodeId::Bill("Smith".to_string());
        let author = NodeId::Author("Smith".to_string());
        assert_ne!(bill, author);
        assert_eq!(bill.name(), author.name());
        assert_eq!(bill.category(), NodeCategory::Bill);
        assert_eq!(author.category(), NodeCategory::Author);
    }
}
