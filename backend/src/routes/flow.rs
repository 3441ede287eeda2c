use serde::{Deserialize, Serialize};

// =========================================================
// Flow diagram types + route
// =========================================================

/// Weighted link between two global node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: u64,
}

/// Author → policy area → enactment method flow.
///
/// `labels` is `authors ++ policy_areas ++ enactment_methods`; link indices
/// point into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowDiagram {
    pub authors: Vec<String>,
    pub policy_areas: Vec<String>,
    pub enactment_methods: Vec<String>,
    pub labels: Vec<String>,
    pub links: Vec<FlowLink>,
}

/// Route path for the flow view
pub const POST_FLOW_VIEW: &str = "/v1/views/flow";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_link_copy() {
        let link = FlowLink {
            source: 0,
            target: 2,
            value: 3,
        };
        let copied = link;
        assert_eq!(copied, link);
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"source":0,"target":2,"value":3}"#
        );
    }
}
