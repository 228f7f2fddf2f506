//! Core identifiers and records for the interactive graph

use std::fmt;

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// User-visible node identifier. Unique within one graph.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Arena slot of a node, tagged with the generation the slot was filled in.
///
/// Slots are reused after a node is removed, but generations never repeat
/// within a topology, so a handle to a removed node stays dead even when a
/// later node lands in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle {
    pub(crate) slot: NodeIndex,
    pub(crate) generation: u64,
}

impl NodeHandle {
    pub(crate) fn new(slot: NodeIndex, generation: u64) -> Self {
        NodeHandle { slot, generation }
    }

    /// Raw arena index, mostly useful for logging.
    pub fn index(self) -> usize {
        self.slot.index()
    }

    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Which edge-insertion policy a graph was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphKind::Undirected => f.write_str("undirected"),
            GraphKind::Directed => f.write_str("directed"),
        }
    }
}

/// A stored edge record, read as `node1 -> node2` by directed graphs.
///
/// `==` compares records as stored, so `a -> b` and `b -> a` differ. Use
/// [`Edge::joins`] for the unordered match undirected graphs care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub node1: NodeHandle,
    pub node2: NodeHandle,
}

impl Edge {
    pub fn new(node1: NodeHandle, node2: NodeHandle) -> Self {
        Edge { node1, node2 }
    }

    /// Unordered match: `{a, b}` equals `{b, a}`.
    pub fn joins(&self, a: NodeHandle, b: NodeHandle) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(i: usize) -> NodeHandle {
        NodeHandle::new(NodeIndex::new(i), 0)
    }

    #[test]
    fn test_edge_equality_keeps_direction() {
        let (a, b, c) = (handle(0), handle(1), handle(2));

        assert_eq!(Edge::new(a, b), Edge::new(a, b));
        assert_ne!(Edge::new(a, b), Edge::new(b, a));
        assert_ne!(Edge::new(a, b), Edge::new(a, c));
        assert!(Edge::new(b, a).joins(a, b));
        assert!(!Edge::new(a, b).joins(a, c));
    }

    #[test]
    fn test_handles_differ_by_generation() {
        let old = NodeHandle::new(NodeIndex::new(1), 1);
        let new = NodeHandle::new(NodeIndex::new(1), 4);

        assert_ne!(old, new);
        assert_eq!(old.index(), new.index());
        assert_eq!(new.generation(), 4);
    }

    #[test]
    fn test_graph_kind_names() {
        assert_eq!(GraphKind::default(), GraphKind::Undirected);
        assert_eq!(GraphKind::Directed.to_string(), "directed");
        assert_eq!(NodeId(12).to_string(), "12");
    }
}
