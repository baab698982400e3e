pub mod a_star;
pub mod dijkstra;
mod reconstruct;

pub use a_star::a_star;
pub use dijkstra::dijkstra;
pub use reconstruct::reconstruct_path;

use crate::errors::RoutingError;
use crate::graph::Graph;


/// Distance and predecessor arrays produced by one search.
///
/// Indexed by node id. `dist` holds the best known cost from the source,
/// `f64::INFINITY` where the search never reached a node; `parent` holds the
/// node each one was reached from, `None` for the source and unreached nodes.
/// Every query allocates a fresh tree, nothing is shared between queries.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTree {
    pub dist: Vec<f64>,
    pub parent: Vec<Option<usize>>,
}

impl SearchTree {
    pub(crate) fn unreached(size: usize) -> Self {
        Self {
            dist: vec![f64::INFINITY; size],
            parent: vec![None; size],
        }
    }

    /// Cost from the source to `node`, or `None` when unreachable (or out of
    /// range for this tree)
    pub fn cost(&self, node: usize) -> Option<f64> {
        let d = *self.dist.get(node)?;
        d.is_finite().then_some(d)
    }

    pub fn is_reached(&self, node: usize) -> bool {
        self.cost(node).is_some()
    }
}

/// Which search strategy to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

/// Run the selected search from `src`.
///
/// [`Algorithm::AStar`] needs a destination to aim at and fails with
/// [`RoutingError::MissingDestination`] without one; [`Algorithm::Dijkstra`]
/// ignores `dst` and settles every reachable node.
pub fn search(
    graph: &Graph,
    src: usize,
    algorithm: Algorithm,
    dst: Option<usize>,
) -> Result<SearchTree, RoutingError> {
    match algorithm {
        Algorithm::Dijkstra => dijkstra(graph, src),
        Algorithm::AStar => {
            let dst = dst.ok_or(RoutingError::MissingDestination)?;
            a_star(graph, src, dst)
        }
    }
}

/// A reconstructed route and its total cost
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Vec<usize>, // node ids, source and destination included
    pub cost: f64,
}

/// Search, read the destination cost and reconstruct in one call.
///
/// `Ok(None)` means the destination exists but no route leads to it - an
/// ordinary outcome for a routing query, not an error. Invalid node ids are
/// errors.
pub fn shortest_route(
    graph: &Graph,
    src: usize,
    dst: usize,
    algorithm: Algorithm,
) -> Result<Option<Route>, RoutingError> {
    graph.node(dst)?;

    let tree = search(graph, src, algorithm, Some(dst))?;
    let Some(cost) = tree.cost(dst) else {
        return Ok(None);
    };

    let path = reconstruct_path(&tree.parent, src, dst);
    if path.is_empty() {
        return Ok(None);
    }
    Ok(Some(Route { path, cost }))
}
