use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::errors::RoutingError;
use crate::graph::{Edge, Graph};
use super::SearchTree;


/// Frontier entry
/// Ordering is by cost only, reversed so the BinaryHeap pops the cheapest
/// entry first. The heap may hold several entries for one node; stale ones
/// are discarded on pop rather than removed eagerly.
#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    cost: f64,
    node: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
    }
}
impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl Eq for FrontierEntry {}


/// Shortest paths from `src` to every reachable node, Dijkstra's algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Returns the full distance/predecessor tree: `dist[src]` is 0, unreachable
/// nodes keep `f64::INFINITY` and no predecessor. Fails only if `src` is not
/// a node of the graph.
pub fn dijkstra(graph: &Graph, src: usize) -> Result<SearchTree, RoutingError> {
    graph.node(src)?;

    let mut tree = SearchTree::unreached(graph.size());
    tree.dist[src] = 0.0;

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    frontier.push(FrontierEntry { cost: 0.0, node: src });

    // Pop the cheapest unsettled entry until every reachable node settles
    while let Some(FrontierEntry { cost, node }) = frontier.pop() {

        // A cheaper path to this node was already settled, skip the stale entry
        if cost > tree.dist[node] {
            continue;
        }

        for &Edge { to, weight } in graph.neighbors(node)? {
            let next_cost = cost + weight;

            // Strict improvement only - equal-cost alternatives never
            // overwrite an already assigned predecessor
            if next_cost < tree.dist[to] {
                tree.dist[to] = next_cost;
                tree.parent[to] = Some(node);
                frontier.push(FrontierEntry { cost: next_cost, node: to });
            }
        }
    }

    Ok(tree)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::sample_map;

    const EPS: f64 = 1e-9;

    // Diamond-shaped graph: a -> b -> d and a -> c -> d
    fn diamond() -> Graph {
        let mut g = Graph::new();
        let a = g.add_node("a", 0.0, 0.0);
        let b = g.add_node("b", 1.0, 1.0);
        let c = g.add_node("c", 1.0, -1.0);
        let d = g.add_node("d", 2.0, 0.0);

        g.add_edge(a, b, 1.0, false).unwrap();
        g.add_edge(a, c, 3.0, false).unwrap();
        g.add_edge(b, d, 5.0, false).unwrap();
        g.add_edge(c, d, 1.0, false).unwrap();
        g
    }

    #[test]
    fn test_dijkstra_diamond_costs_and_parents() {
        let g = diamond();
        let tree = dijkstra(&g, 0).unwrap();

        assert_eq!(tree.dist[0], 0.0);
        assert!((tree.dist[1] - 1.0).abs() < EPS);
        assert!((tree.dist[2] - 3.0).abs() < EPS);
        assert!((tree.dist[3] - 4.0).abs() < EPS); // via a -> c -> d

        assert_eq!(tree.parent[0], None);
        assert_eq!(tree.parent[1], Some(0));
        assert_eq!(tree.parent[2], Some(0));
        assert_eq!(tree.parent[3], Some(2));
    }

    #[test]
    fn test_dijkstra_handles_cycles() {
        // a -> b -> c -> a plus an exit c -> d
        let mut g = Graph::new();
        let a = g.add_node("a", 0.0, 0.0);
        let b = g.add_node("b", 1.0, 0.0);
        let c = g.add_node("c", 2.0, 0.0);
        let d = g.add_node("d", 3.0, 0.0);

        g.add_edge(a, b, 1.0, false).unwrap();
        g.add_edge(b, c, 1.0, false).unwrap();
        g.add_edge(c, a, 1.0, false).unwrap();
        g.add_edge(c, d, 2.0, false).unwrap();

        let tree = dijkstra(&g, a).unwrap();

        assert!((tree.dist[b] - 1.0).abs() < EPS);
        assert!((tree.dist[c] - 2.0).abs() < EPS);
        assert!((tree.dist[d] - 4.0).abs() < EPS);
        // the cycle edge back into the source never improves it
        assert_eq!(tree.dist[a], 0.0);
        assert_eq!(tree.parent[a], None);
    }

    #[test]
    fn test_dijkstra_unreachable_node_stays_infinite() {
        let mut g = Graph::new();
        let a = g.add_node("a", 0.0, 0.0);
        let b = g.add_node("b", 1.0, 0.0);
        let island = g.add_node("island", 9.0, 9.0);

        g.add_edge(a, b, 1.0, true).unwrap();

        let tree = dijkstra(&g, a).unwrap();

        assert_eq!(tree.dist[island], f64::INFINITY);
        assert_eq!(tree.parent[island], None);
        assert!(!tree.is_reached(island));
        assert_eq!(tree.cost(island), None);
    }

    #[test]
    fn test_dijkstra_source_out_of_range() {
        let g = diamond();
        let err = dijkstra(&g, 42).unwrap_err();
        assert_eq!(err, RoutingError::NodeOutOfRange { id: 42, size: 4 });
    }

    #[test]
    fn test_dijkstra_sample_map_station_to_airport() {
        let g = sample_map();
        let (a, f) = (0, 5);

        let tree = dijkstra(&g, a).unwrap();

        // A -> D -> E -> F: 2.5 + 1.8 + 3.0
        assert!((tree.dist[f] - 7.3).abs() < EPS);
        assert_eq!(tree.parent[f], Some(4)); // E:Mall
        assert_eq!(tree.parent[4], Some(3)); // D:Hospital
        assert_eq!(tree.parent[3], Some(a));

        // every reached node carries a non-negative cost
        for n in 0..g.size() {
            assert!(tree.dist[n] >= 0.0);
        }
    }

    #[test]
    fn test_dijkstra_repeated_queries_identical() {
        let g = sample_map();
        let first = dijkstra(&g, 0).unwrap();
        let second = dijkstra(&g, 0).unwrap();

        assert_eq!(first.dist, second.dist);
        assert_eq!(first.parent, second.parent);
    }
}
