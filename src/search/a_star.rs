use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::errors::RoutingError;
use crate::geometry::straight_line;
use crate::graph::{Edge, Graph};
use super::SearchTree;


/// Frontier entry
/// Ordered by f_cost = cost so far + heuristic estimate to the destination,
/// reversed so the BinaryHeap pops the most promising entry first.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    f_cost: f64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.total_cmp(&self.f_cost)
    }
}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}
impl Eq for FrontierEntry {}


/// Destination-directed shortest path, A* with straight-line heuristic
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Returns the same distance/predecessor shape as [`dijkstra`](super::dijkstra::dijkstra), but the
/// search stops as soon as `dst` is popped from the frontier. With an
/// admissible heuristic (see [`straight_line`]) the cost at `dst` is optimal;
/// costs of other nodes are whatever the search had settled when it stopped
/// and must not be read as all-nodes distances. If the frontier drains
/// without reaching `dst`, its cost stays `f64::INFINITY`.
pub fn a_star(graph: &Graph, src: usize, dst: usize) -> Result<SearchTree, RoutingError> {
    graph.node(src)?;
    let goal = graph.node(dst)?.clone();

    let n = graph.size();
    let mut tree = SearchTree::unreached(n);
    tree.dist[src] = 0.0; // gscore: confirmed cost from the source

    // fscore = gscore + heuristic, the frontier's ordering key
    let mut f_score = vec![f64::INFINITY; n];
    f_score[src] = straight_line(graph.node(src)?, &goal);

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    frontier.push(FrontierEntry { f_cost: f_score[src], node: src });

    while let Some(FrontierEntry { f_cost, node }) = frontier.pop() {

        // Popping the destination means no cheaper route to it remains
        if node == dst {
            break;
        }

        // A better entry for this node was already expanded, skip the stale one
        if f_cost > f_score[node] {
            continue;
        }

        for &Edge { to, weight } in graph.neighbors(node)? {
            let tentative = tree.dist[node] + weight;

            if tentative < tree.dist[to] {
                tree.dist[to] = tentative;
                tree.parent[to] = Some(node);
                f_score[to] = tentative + straight_line(graph.node(to)?, &goal);
                frontier.push(FrontierEntry { f_cost: f_score[to], node: to });
            }
        }
    }

    Ok(tree)
}
