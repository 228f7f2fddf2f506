//! Graphs Core: interactive graph model, edge policies, shortest path and undo

pub mod model;
pub mod node;
pub mod topology;
pub mod inserter;
pub mod history;
pub mod path;
pub mod info;
pub mod graph;
pub mod error;


#[cfg(test)]
pub mod test_utils;

pub use model::{NodeId, NodeHandle, GraphKind, Edge};
pub use node::Node;
pub use topology::Topology;
pub use inserter::{EdgeInserter, Undirected, Directed, create_inserter};
pub use history::{History, Placement, Undone};
pub use info::{GraphInfo, NodeInfo, SearchInfo};
pub use graph::Graph;
pub use error::GraphError;
