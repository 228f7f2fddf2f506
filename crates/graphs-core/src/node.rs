//! Graph vertex with an insertion-ordered adjacency list

use crate::model::{NodeHandle, NodeId};

/// A vertex: its identifier plus the handles of its neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    neighbors: Vec<NodeHandle>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Node {
            id,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Add `other` to the neighbor list. Adding an existing neighbor does nothing.
    pub fn add_neighbor(&mut self, other: NodeHandle) {
        if !self.neighbors.contains(&other) {
            self.neighbors.push(other);
        }
    }

    /// Remove `other` from the neighbor list if present.
    pub fn remove_neighbor(&mut self, other: NodeHandle) {
        self.neighbors.retain(|&n| n != other);
    }

    /// Neighbors in the order they were added.
    pub fn neighbors(&self) -> &[NodeHandle] {
        &self.neighbors
    }

    pub fn has_neighbor(&self, other: NodeHandle) -> bool {
        self.neighbors.contains(&other)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}
