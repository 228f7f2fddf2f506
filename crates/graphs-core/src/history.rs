//! Undo log of structural edits

use crate::model::{NodeHandle, NodeId};

/// One successful structural mutation, with what it takes to reverse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A node was added. `previous_next_id` is the id counter before the add.
    Node {
        handle: NodeHandle,
        id: NodeId,
        previous_next_id: u64,
    },
    /// An edge between `source` and `target` was added (`source -> target` when directed).
    Edge {
        source: NodeHandle,
        target: NodeHandle,
    },
}

/// Result of one undo step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undone {
    pub placement: Placement,
    /// `false` when the entry no longer matched the graph, e.g. an edge that
    /// `remove_edge` already took out.
    pub changed: bool,
}

/// Append-only log, popped from the back by undo.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Placement>,
}

impl History {
    pub fn new() -> Self {
        History { entries: Vec::new() }
    }

    pub fn record(&mut self, placement: Placement) {
        self.entries.push(placement);
    }

    pub fn pop(&mut self) -> Option<Placement> {
        self.entries.pop()
    }

    pub fn entries(&self) -> &[Placement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
