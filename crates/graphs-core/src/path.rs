//! Unweighted shortest paths (breadth-first search over neighbor lists)

use crate::model::NodeHandle;
use crate::topology::Topology;
use std::collections::{HashMap, VecDeque};

/// Number of edges on a shortest path from `start` to `end`.
///
/// `Some(0)` when `start == end`; `None` when `end` cannot be reached or
/// either endpoint is missing.
pub fn shortest_path(topology: &Topology, start: NodeHandle, end: NodeHandle) -> Option<usize> {
    bfs(topology, start, end).map(|parents| route_len(&parents, end))
}

/// Nodes on one shortest path, `start` and `end` included.
pub fn shortest_route(
    topology: &Topology,
    start: NodeHandle,
    end: NodeHandle,
) -> Option<Vec<NodeHandle>> {
    let parents = bfs(topology, start, end)?;

    let mut route = Vec::new();
    let mut current = Some(end);
    while let Some(node) = current {
        route.push(node);
        current = parents.get(&node).copied().flatten();
    }
    route.reverse();
    Some(route)
}

/// BFS parent table, or `None` if `end` is never reached.
///
/// Distance is fixed the first time a node is reached; the search stops as
/// soon as `end` is discovered.
fn bfs(
    topology: &Topology,
    start: NodeHandle,
    end: NodeHandle,
) -> Option<HashMap<NodeHandle, Option<NodeHandle>>> {
    if !topology.contains(start) || !topology.contains(end) {
        return None;
    }

    let mut parents = HashMap::new();
    parents.insert(start, None);
    if start == end {
        return Some(parents);
    }

    let mut queue = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in topology.neighbors(current) {
            if parents.contains_key(&next) {
                continue;
            }
            parents.insert(next, Some(current));
            if next == end {
                return Some(parents);
            }
            queue.push_back(next);
        }
    }

    None
}

fn route_len(parents: &HashMap<NodeHandle, Option<NodeHandle>>, end: NodeHandle) -> usize {
    let mut len = 0;
    let mut current = parents.get(&end).copied().flatten();
    while let Some(node) = current {
        len += 1;
        current = parents.get(&node).copied().flatten();
    }
    len
}
