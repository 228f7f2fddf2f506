//! Edge-insertion policies
//!
//! The graph engine owns traversal, history and undo; how an edge is laid
//! into the topology is delegated to an [`EdgeInserter`]. Two policies ship:
//! [`Undirected`] (reciprocal neighbors, one unordered record) and
//! [`Directed`] (one-way neighbor, one ordered record).

use crate::model::{GraphKind, NodeHandle};
use crate::topology::Topology;

/// How edges are inserted, queried and retracted.
pub trait EdgeInserter: std::fmt::Debug {
    fn kind(&self) -> GraphKind;

    /// Whether an edge between `a` and `b` exists under this policy.
    fn connects(&self, topology: &Topology, a: NodeHandle, b: NodeHandle) -> bool;

    /// Insert an edge. Returns `false` when the request was absorbed as a
    /// no-op (self-loop, duplicate, missing endpoint).
    fn insert(&self, topology: &mut Topology, a: NodeHandle, b: NodeHandle) -> bool;

    /// Exactly reverse a previous successful `insert(a, b)`. Returns `false`
    /// when the edge was already gone.
    fn retract(&self, topology: &mut Topology, a: NodeHandle, b: NodeHandle) -> bool;
}

/// Simple undirected graph: no self-loops, no multi-edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct Undirected;

impl EdgeInserter for Undirected {
    fn kind(&self) -> GraphKind {
        GraphKind::Undirected
    }

    fn connects(&self, topology: &Topology, a: NodeHandle, b: NodeHandle) -> bool {
        topology.has_record(a, b) || topology.has_record(b, a)
    }

    fn insert(&self, topology: &mut Topology, a: NodeHandle, b: NodeHandle) -> bool {
        if a == b || !topology.contains(a) || !topology.contains(b) {
            return false;
        }
        if self.connects(topology, a, b) {
            return false;
        }
        topology.add_record(a, b);
        topology.link(a, b);
        topology.link(b, a);
        true
    }

    fn retract(&self, topology: &mut Topology, a: NodeHandle, b: NodeHandle) -> bool {
        topology.unlink(a, b);
        topology.unlink(b, a);
        topology.remove_record(a, b) || topology.remove_record(b, a)
    }
}

/// Directed graph: `a -> b` adds `b` to `a`'s neighbors only.
///
/// Self-loops and repeated arcs are rejected just like in [`Undirected`];
/// `a -> b` and `b -> a` are distinct arcs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Directed;

impl EdgeInserter for Directed {
    fn kind(&self) -> GraphKind {
        GraphKind::Directed
    }

    fn connects(&self, topology: &Topology, a: NodeHandle, b: NodeHandle) -> bool {
        topology.has_record(a, b)
    }

    fn insert(&self, topology: &mut Topology, a: NodeHandle, b: NodeHandle) -> bool {
        if a == b || !topology.contains(a) || !topology.contains(b) {
            return false;
        }
        if self.connects(topology, a, b) {
            return false;
        }
        topology.add_record(a, b);
        topology.link(a, b);
        true
    }

    fn retract(&self, topology: &mut Topology, a: NodeHandle, b: NodeHandle) -> bool {
        topology.unlink(a, b);
        topology.remove_record(a, b)
    }
}

/// Build the inserter for a graph kind.
pub fn create_inserter(kind: GraphKind) -> Box<dyn EdgeInserter> {
    match kind {
        GraphKind::Undirected => Box::new(Undirected),
        GraphKind::Directed => Box::new(Directed),
    }
}
