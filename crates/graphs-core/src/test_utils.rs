//! Test utilities for graph construction

use crate::graph::Graph;
use crate::model::NodeHandle;

/// Add `count` nodes and return their handles in order.
pub fn add_nodes(graph: &mut Graph, count: usize) -> Vec<NodeHandle> {
    (0..count).map(|_| graph.add_node()).collect()
}

/// Undirected path 0-1-2-...-(n-1).
pub fn path_graph(n: usize) -> (Graph, Vec<NodeHandle>) {
    let mut graph = Graph::undirected();
    let nodes = add_nodes(&mut graph, n);
    for pair in nodes.windows(2) {
        graph.add_edge(pair[0], pair[1]);
    }
    (graph, nodes)
}

/// Graph with `n` nodes and the given edges, by position.
pub fn graph_with_edges(
    mut graph: Graph,
    n: usize,
    edges: &[(usize, usize)],
) -> (Graph, Vec<NodeHandle>) {
    let nodes = add_nodes(&mut graph, n);
    for &(a, b) in edges {
        graph.add_edge(nodes[a], nodes[b]);
    }
    (graph, nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_graph() {
        let (graph, nodes) = path_graph(5);
        assert_eq!(nodes.len(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.history().len(), 9);
    }
}
