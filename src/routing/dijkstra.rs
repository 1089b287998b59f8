use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use crate::graph::CampusGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Edge weights
// are finite meters, so total_cmp gives a well-defined order; exact cost ties
// fall back to node index, which makes heap order deterministic but leaves
// the choice among equal-cost paths arbitrary.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.index().cmp(&self.node.index()))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A route found by the search: node sequence from start to end, inclusive,
/// and its total cost in meters.
#[derive(Debug, Clone)]
pub struct PathFound {
    pub nodes: Vec<NodeIndex>,
    pub distance_m: f64,
}

/// Dijkstra's algorithm over the campus graph, traced for path recovery.
///
/// Returns `None` when no sequence of open segments connects `start` to
/// `end`, never a partial route. `start == end` short-circuits to the
/// single-node route with distance 0. The returned distance is the settled
/// tentative distance of `end`, which by construction equals the sum of the
/// traversed edge weights.
pub fn shortest_path(graph: &CampusGraph, start: NodeIndex, end: NodeIndex) -> Option<PathFound> {
    if start == end {
        return Some(PathFound {
            nodes: vec![start],
            distance_m: 0.0,
        });
    }

    let estimated_nodes = graph.node_count();
    let mut distances: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4 + 1);

    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        // The popped cost is final; reaching the end settles it.
        if node == end {
            break;
        }

        // Skip stale heap entries superseded by a better path.
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight();

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                    predecessors.insert(next, node);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                        predecessors.insert(next, node);
                    }
                }
            }
        }
    }

    // No predecessor for the end node means it was never reached.
    if !predecessors.contains_key(&end) {
        return None;
    }

    let mut nodes = vec![end];
    let mut current = end;
    while current != start {
        let &prev = predecessors.get(&current)?;
        nodes.push(prev);
        current = prev;
    }
    nodes.reverse();

    let distance_m = *distances.get(&end)?;
    Some(PathFound { nodes, distance_m })
}
