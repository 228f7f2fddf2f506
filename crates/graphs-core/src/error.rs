//! Errors for the fallible graph lookups

use crate::model::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node id {0} is already in use")]
    DuplicateNodeId(NodeId),

    #[error("no node with id {0}")]
    UnknownNode(NodeId),
}
