use num_traits::Float;

use crate::graph::Node;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance - avoids the sqrt when only ordering matters
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// Straight-line distance between two nodes, used as the A* heuristic.
///
/// The estimate is admissible (never overestimates the remaining cost) and
/// consistent only when every edge weight is at least the straight-line
/// distance between its endpoints - true for real-world travel distances.
/// If weights encode something else (e.g. travel time), the caller must
/// supply a graph where this still holds; the search does not verify it, and
/// A* may return a suboptimal route when it is violated.
pub fn straight_line(a: &Node, b: &Node) -> f64 {
    euclidean(a.x, a.y, b.x, b.y)
}
