//! Diagnostic report of a graph's adjacency

use crate::model::{GraphKind, NodeId};
use serde::Serialize;
use std::fmt;

const RULE: &str = "-------------------";

/// Snapshot of every node's neighbors, plus the marked search if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphInfo {
    pub kind: GraphKind,
    pub nodes: Vec<NodeInfo>,
    pub search: Option<SearchInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub id: NodeId,
    pub neighbors: Vec<NodeId>,
}

/// Shortest path between the marked search start and end.
/// `distance` is `None` when the end is unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchInfo {
    pub start: NodeId,
    pub end: NodeId,
    pub distance: Option<usize>,
}

impl fmt::Display for GraphInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "Node ID: {}", node.id)?;
            if node.neighbors.is_empty() {
                writeln!(f, "Neighbors: Empty")?;
            } else {
                let ids: Vec<String> = node.neighbors.iter().map(|id| id.to_string()).collect();
                writeln!(f, "Neighbors: {}", ids.join(" "))?;
            }
            writeln!(f, "{RULE}")?;
        }
        writeln!(f, "{RULE}")?;

        if let Some(search) = &self.search {
            write!(f, "Shortest path {} -> {}: ", search.start, search.end)?;
            match search.distance {
                Some(d) => writeln!(f, "{d}")?,
                None => writeln!(f, "unreachable")?,
            }
        }
        Ok(())
    }
}
