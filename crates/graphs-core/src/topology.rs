//! Node arena and edge records, backed by petgraph::StableDiGraph

use crate::model::{Edge, NodeHandle, NodeId};
use crate::node::Node;
use petgraph::stable_graph::{EdgeIndex, StableDiGraph};

/// A filled arena slot. `generation` must match the handle used to reach it.
struct Slot {
    generation: u64,
    node: Node,
}

/// Storage for nodes and edge records.
///
/// Neighbor lists on the nodes are the adjacency the algorithms walk; the
/// petgraph edges are the edge records kept in sync with them. petgraph
/// reuses vacant slots, so every handle also carries a generation from a
/// counter that `clear` does not reset. A handle whose generation no longer
/// matches its slot is treated as missing.
pub struct Topology {
    inner: StableDiGraph<Slot, Edge>,
    order: Vec<NodeHandle>,
    generation: u64,
}

impl std::fmt::Debug for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Topology")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl Topology {
    pub fn new() -> Self {
        Topology {
            inner: StableDiGraph::new(),
            order: Vec::new(),
            generation: 0,
        }
    }

    /// Add a node with no neighbors.
    pub fn add_node(&mut self, id: NodeId) -> NodeHandle {
        let generation = self.generation;
        self.generation += 1;
        let slot = self.inner.add_node(Slot {
            generation,
            node: Node::new(id),
        });
        let handle = NodeHandle::new(slot, generation);
        self.order.push(handle);
        handle
    }

    /// Remove a node, every back-reference to it, and its edge records.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node> {
        if !self.contains(handle) {
            return None;
        }
        let slot = self.inner.remove_node(handle.slot)?;
        self.order.retain(|&h| h != handle);
        for other in self.inner.node_weights_mut() {
            other.node.remove_neighbor(handle);
        }
        Some(slot.node)
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.node(handle).is_some()
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.inner
            .node_weight(handle.slot)
            .filter(|slot| slot.generation == handle.generation)
            .map(|slot| &slot.node)
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.inner
            .node_weight_mut(handle.slot)
            .filter(|slot| slot.generation == handle.generation)
            .map(|slot| &mut slot.node)
    }

    /// Node handles in insertion order.
    pub fn nodes(&self) -> &[NodeHandle] {
        &self.order
    }

    /// Find a node by its identifier.
    pub fn find_node(&self, id: NodeId) -> Option<NodeHandle> {
        self.order
            .iter()
            .copied()
            .find(|&h| self.node(h).is_some_and(|n| n.id() == id))
    }

    /// Neighbors of a node, empty for a missing handle.
    pub fn neighbors(&self, handle: NodeHandle) -> &[NodeHandle] {
        match self.node(handle) {
            Some(node) => node.neighbors(),
            None => &[],
        }
    }

    /// Make `to` a neighbor of `from` (one direction only).
    pub fn link(&mut self, from: NodeHandle, to: NodeHandle) {
        if let Some(node) = self.node_mut(from) {
            node.add_neighbor(to);
        }
    }

    /// Drop `to` from the neighbors of `from` (one direction only).
    pub fn unlink(&mut self, from: NodeHandle, to: NodeHandle) {
        if let Some(node) = self.node_mut(from) {
            node.remove_neighbor(to);
        }
    }

    /// Store an edge record `{from, to}`. Both nodes must exist.
    pub fn add_record(&mut self, from: NodeHandle, to: NodeHandle) {
        if self.contains(from) && self.contains(to) {
            self.inner.add_edge(from.slot, to.slot, Edge::new(from, to));
        }
    }

    /// Whether a record `from -> to` exists.
    pub fn has_record(&self, from: NodeHandle, to: NodeHandle) -> bool {
        self.find_record(from, to).is_some()
    }

    /// Remove the record `from -> to`. Returns whether one was removed.
    pub fn remove_record(&mut self, from: NodeHandle, to: NodeHandle) -> bool {
        match self.find_record(from, to) {
            Some(idx) => self.inner.remove_edge(idx).is_some(),
            None => false,
        }
    }

    fn find_record(&self, from: NodeHandle, to: NodeHandle) -> Option<EdgeIndex> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        self.inner.find_edge(from.slot, to.slot)
    }

    /// Iterate over all edge records.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.inner
            .edge_indices()
            .filter_map(move |idx| self.inner.edge_weight(idx))
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Drop every node and edge. Handles issued before stay dead.
    pub fn clear(&mut self) {
        self.inner.clear();
        self.order.clear();
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::new()
    }
}
