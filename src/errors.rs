use thiserror::Error;

/// Errors raised at the graph and search boundaries.
///
/// These are caller errors. A query that completes without finding a route is
/// not an error - it is reported through the result value (an infinite cost
/// and an empty path).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("node id {id} is out of range for a graph of {size} nodes")]
    NodeOutOfRange { id: usize, size: usize },
    #[error("edge weight {weight} is negative")]
    NegativeWeight { weight: f64 },
    #[error("a_star requires a destination node")]
    MissingDestination,
}
