use std::{cmp::Ordering, collections::BinaryHeap};

use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::TRANSFER_PENALTY_MIN;
use crate::model::TransitGraph;

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl Eq for State {}

// Implement Ord for State to use in BinaryHeap
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap by cost (reversed from standard Rust BinaryHeap);
        // costs are finite, input coordinates are validated upstream
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-score and predecessor labels left behind by a search.
pub(crate) struct SearchTree {
    /// Minutes from the start stop, for every reached node
    pub(crate) scores: HashMap<NodeIndex, f64>,
    /// The edge that produced each node's best score
    pub(crate) parent_edge: HashMap<NodeIndex, EdgeIndex>,
}

/// Label-setting shortest-path search over time cost with a transfer
/// penalty.
///
/// The penalty is a second-order cost: it applies when a relaxed
/// edge's mode differs from the mode of the edge that produced the
/// current node's label, which is why the predecessor map stores
/// edges, not nodes. The first edge out of `start` has no prior mode
/// and never pays it. Terminates as soon as `target` pops as the
/// frontier minimum.
pub(crate) fn shortest_path_tree(
    graph: &TransitGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> SearchTree {
    let estimated = graph.stop_count().min(1000);
    let mut scores: HashMap<NodeIndex, f64> = HashMap::with_capacity(estimated);
    let mut parent_edge: HashMap<NodeIndex, EdgeIndex> = HashMap::with_capacity(estimated);
    let mut heap = BinaryHeap::with_capacity(estimated / 4);

    scores.insert(start, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            break;
        }

        // Skip if we've found a better path
        if let Some(&best) = scores.get(&node) {
            if cost > best {
                continue;
            }
        }

        let incoming_mode = parent_edge.get(&node).map(|&edge| &graph.graph[edge].mode);

        for edge in graph.graph.edges(node) {
            let next = edge.target();
            let mut next_cost = cost + edge.weight().time_min;
            if incoming_mode.is_some_and(|mode| *mode != edge.weight().mode) {
                next_cost += TRANSFER_PENALTY_MIN;
            }

            match scores.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    parent_edge.insert(next, edge.id());
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        parent_edge.insert(next, edge.id());
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    SearchTree {
        scores,
        parent_edge,
    }
}
