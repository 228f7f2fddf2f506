//! The interactive graph: mutation, queries, shortest path and undo

use crate::error::GraphError;
use crate::history::{History, Placement, Undone};
use crate::info::{GraphInfo, NodeInfo, SearchInfo};
use crate::inserter::{create_inserter, EdgeInserter};
use crate::model::{GraphKind, NodeHandle, NodeId};
use crate::node::Node;
use crate::path;
use crate::topology::Topology;
use tracing::debug;

/// A mutable graph that records every successful node or edge addition so it
/// can be undone in reverse order.
///
/// Every operation is total: requests that make no sense (self-loops,
/// duplicate edges, missing nodes, undo on an empty log) are absorbed as
/// no-ops and reported through the return value.
pub struct Graph {
    topology: Topology,
    inserter: Box<dyn EdgeInserter>,
    history: History,
    next_id: u64,
    starting_node: Option<NodeHandle>,
    search_start: Option<NodeHandle>,
    search_end: Option<NodeHandle>,
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind())
            .field("node_count", &self.topology.node_count())
            .field("edge_count", &self.topology.edge_count())
            .field("history_len", &self.history.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Graph {
    pub fn new(kind: GraphKind) -> Self {
        Self::with_inserter(create_inserter(kind))
    }

    /// Simple undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Directed graph: edges only add the target to the source's neighbors.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    pub fn with_inserter(inserter: Box<dyn EdgeInserter>) -> Self {
        Graph {
            topology: Topology::new(),
            inserter,
            history: History::new(),
            next_id: 0,
            starting_node: None,
            search_start: None,
            search_end: None,
        }
    }

    pub fn kind(&self) -> GraphKind {
        self.inserter.kind()
    }

    pub fn is_directed(&self) -> bool {
        self.kind() == GraphKind::Directed
    }

    // ── Nodes ───────────────────────────────────────────────

    /// Add a node with the next free identifier.
    pub fn add_node(&mut self) -> NodeHandle {
        let previous_next_id = self.next_id;
        let mut id = self.next_id;
        while self.topology.find_node(NodeId(id)).is_some() {
            id += 1;
        }
        self.next_id = id + 1;
        self.place_node(NodeId(id), previous_next_id)
    }

    /// Add a node with an explicit identifier. The id counter is left alone;
    /// later automatic ids skip over this one.
    pub fn add_node_with_id(&mut self, id: NodeId) -> Result<NodeHandle, GraphError> {
        if self.topology.find_node(id).is_some() {
            return Err(GraphError::DuplicateNodeId(id));
        }
        Ok(self.place_node(id, self.next_id))
    }

    fn place_node(&mut self, id: NodeId, previous_next_id: u64) -> NodeHandle {
        let handle = self.topology.add_node(id);
        self.history.record(Placement::Node {
            handle,
            id,
            previous_next_id,
        });
        debug!("Added node {} at slot {}", id, handle.index());
        handle
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&Node> {
        self.topology.node(handle)
    }

    /// Node handles in insertion order.
    pub fn nodes(&self) -> &[NodeHandle] {
        self.topology.nodes()
    }

    /// Find a node by identifier.
    pub fn find_node(&self, id: NodeId) -> Option<NodeHandle> {
        self.topology.find_node(id)
    }

    /// Like [`Graph::find_node`], but an unknown id is an error.
    pub fn resolve(&self, id: NodeId) -> Result<NodeHandle, GraphError> {
        self.find_node(id).ok_or(GraphError::UnknownNode(id))
    }

    /// Identifier of a node, if it still exists.
    pub fn id_of(&self, handle: NodeHandle) -> Option<NodeId> {
        self.node(handle).map(Node::id)
    }

    /// Neighbors of a node in insertion order (empty for a missing node).
    pub fn neighbors(&self, handle: NodeHandle) -> &[NodeHandle] {
        self.topology.neighbors(handle)
    }

    /// Identifier the next `add_node` would start from.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn node_count(&self) -> usize {
        self.topology.node_count()
    }

    // ── Edges ───────────────────────────────────────────────

    /// Whether an edge between `a` and `b` exists. Order is ignored for undirected
    /// graphs; directed graphs look for `a -> b`.
    pub fn has_edge(&self, a: NodeHandle, b: NodeHandle) -> bool {
        self.inserter.connects(&self.topology, a, b)
    }

    /// Add an edge through the graph's insertion policy. Returns whether a new
    /// edge was created; only then is it recorded for undo.
    pub fn add_edge(&mut self, a: NodeHandle, b: NodeHandle) -> bool {
        if !self.inserter.insert(&mut self.topology, a, b) {
            debug!("Ignored edge {} -> {}", a.index(), b.index());
            return false;
        }
        self.history.record(Placement::Edge {
            source: a,
            target: b,
        });
        debug!("Added edge {} -> {}", a.index(), b.index());
        true
    }

    /// Remove the edge between `a` and `b` in both directions, whichever way
    /// it was added. Not recorded in the history. Returns whether anything
    /// was removed.
    pub fn remove_edge(&mut self, a: NodeHandle, b: NodeHandle) -> bool {
        let linked = self.topology.node(a).is_some_and(|n| n.has_neighbor(b))
            || self.topology.node(b).is_some_and(|n| n.has_neighbor(a));
        self.topology.unlink(a, b);
        self.topology.unlink(b, a);
        let forward = self.topology.remove_record(a, b);
        let backward = self.topology.remove_record(b, a);

        let removed = linked || forward || backward;
        if removed {
            debug!("Removed edge {} - {}", a.index(), b.index());
        }
        removed
    }

    /// Edge records as identifier pairs.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.topology
            .edges()
            .filter_map(|e| Some((self.id_of(e.node1)?, self.id_of(e.node2)?)))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    // ── Two-phase edge gesture ──────────────────────────────

    /// Stage the first endpoint of an edge (pointer pressed on a node).
    pub fn set_starting_node(&mut self, node: NodeHandle) {
        self.starting_node = Some(node);
    }

    pub fn starting_node(&self) -> Option<NodeHandle> {
        self.starting_node
    }

    /// Finish the gesture on `node` (pointer released). An edge is attempted
    /// when a different node was staged; the staging is cleared either way.
    pub fn add_edge_if_valid(&mut self, node: NodeHandle) -> bool {
        match self.starting_node.take() {
            Some(start) if start != node => self.add_edge(start, node),
            _ => false,
        }
    }

    /// Drop a staged endpoint without adding anything.
    pub fn cancel_pending_edge(&mut self) {
        self.starting_node = None;
    }

    // ── Shortest path ───────────────────────────────────────

    /// Edge count of a shortest path, `None` if `end` is unreachable.
    pub fn shortest_path(&self, start: NodeHandle, end: NodeHandle) -> Option<usize> {
        path::shortest_path(&self.topology, start, end)
    }

    /// The nodes of one shortest path from `start` to `end`.
    pub fn shortest_route(&self, start: NodeHandle, end: NodeHandle) -> Option<Vec<NodeHandle>> {
        path::shortest_route(&self.topology, start, end)
    }

    pub fn set_search_start(&mut self, node: NodeHandle) {
        self.search_start = Some(node);
    }

    pub fn set_search_end(&mut self, node: NodeHandle) {
        self.search_end = Some(node);
    }

    // ── History ─────────────────────────────────────────────

    pub fn history(&self) -> &[Placement] {
        self.history.entries()
    }

    /// Reverse the most recent node or edge addition. Returns the undone
    /// entry, or `None` if there was nothing to undo.
    pub fn undo(&mut self) -> Option<Undone> {
        let placement = self.history.pop()?;
        let changed = match placement {
            Placement::Node {
                handle,
                id,
                previous_next_id,
            } => {
                let removed = self.topology.remove_node(handle).is_some();
                for marker in [
                    &mut self.starting_node,
                    &mut self.search_start,
                    &mut self.search_end,
                ] {
                    if *marker == Some(handle) {
                        *marker = None;
                    }
                }
                self.next_id = previous_next_id;
                debug!("Undid node {}", id);
                removed
            }
            Placement::Edge { source, target } => {
                let retracted = self.inserter.retract(&mut self.topology, source, target);
                debug!(
                    "Undid edge {} -> {} (changed: {})",
                    source.index(),
                    target.index(),
                    retracted
                );
                retracted
            }
        };
        Some(Undone { placement, changed })
    }

    /// Remove everything and reset the id counter.
    pub fn clear(&mut self) {
        self.topology.clear();
        self.history.clear();
        self.next_id = 0;
        self.starting_node = None;
        self.search_start = None;
        self.search_end = None;
        debug!("Cleared graph");
    }

    // ── Diagnostics ─────────────────────────────────────────

    /// Adjacency report, with the marked search when both ends are set.
    pub fn info(&self) -> GraphInfo {
        let nodes = self
            .nodes()
            .iter()
            .filter_map(|&h| {
                let node = self.node(h)?;
                Some(NodeInfo {
                    id: node.id(),
                    neighbors: node
                        .neighbors()
                        .iter()
                        .filter_map(|&n| self.id_of(n))
                        .collect(),
                })
            })
            .collect();

        let search = match (self.search_start, self.search_end) {
            (Some(start), Some(end)) => match (self.id_of(start), self.id_of(end)) {
                (Some(start_id), Some(end_id)) => Some(SearchInfo {
                    start: start_id,
                    end: end_id,
                    distance: self.shortest_path(start, end),
                }),
                _ => None,
            },
            _ => None,
        };

        GraphInfo {
            kind: self.kind(),
            nodes,
            search,
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::undirected()
    }
}
