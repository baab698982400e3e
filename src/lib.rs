//! Shortest path search over weighted road-network graphs.
//!
//! A [`Graph`] is built once from nodes with planar coordinates and weighted
//! directed edges, then queried any number of times with either Dijkstra's
//! algorithm or A* guided by straight-line distance.

pub mod errors;
pub mod geometry;
pub mod graph;
pub mod search;

mod collections;

pub use errors::RoutingError;
pub use geometry::straight_line;
pub use graph::{Edge, Graph, Node, sample_map};
pub use search::{
    Algorithm, Route, SearchTree, a_star, dijkstra, reconstruct_path, search, shortest_route,
};
