use crate::collections::FxIndexMap;
use crate::errors::RoutingError;


/// Point on the road network
/// Coordinates are planar and only feed the A* heuristic; the name is a
/// display label and never influences the algorithms.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub name: String,
}

/// Directed arc to another node
/// A bidirectional road is stored as two of these, one per direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: f64, // travel cost - distance or time
}

/// Weighted directed graph with dense 0-based node ids and adjacency lists.
///
/// Built once, then read-only for the lifetime of any queries: searches take
/// `&Graph` and allocate their own per-query state, so a frozen graph can be
/// shared across threads.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    adj: Vec<Vec<Edge>>,
    names: FxIndexMap<String, usize>,
}

impl Graph {

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for an expected node count
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            adj: Vec::with_capacity(nodes),
            names: FxIndexMap::default(),
        }
    }

    /// Append a node and return its newly assigned id.
    /// Ids are dense: the first node gets 0, the next 1, and so on.
    pub fn add_node(&mut self, name: &str, x: f64, y: f64) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node { id, x, y, name: name.to_string() });
        self.adj.push(Vec::new());
        self.names.insert(name.to_string(), id);
        id
    }

    /// Append the edge `u -> v`, and `v -> u` as well when `bidirectional`.
    ///
    /// Both endpoints must already exist - an unknown id is an error, never an
    /// implicit node creation - and the weight must be non-negative. All
    /// checks happen before any insert, so a failed call leaves the graph
    /// unmodified.
    pub fn add_edge(
        &mut self,
        u: usize,
        v: usize,
        weight: f64,
        bidirectional: bool,
    ) -> Result<(), RoutingError> {
        self.check_id(u)?;
        self.check_id(v)?;
        if weight < 0.0 {
            return Err(RoutingError::NegativeWeight { weight });
        }

        self.adj[u].push(Edge { to: v, weight });
        if bidirectional {
            self.adj[v].push(Edge { to: u, weight });
        }
        Ok(())
    }

    /// Outgoing edges of `u` in insertion order
    pub fn neighbors(&self, u: usize) -> Result<&[Edge], RoutingError> {
        self.check_id(u)?;
        Ok(&self.adj[u])
    }

    pub fn node(&self, id: usize) -> Result<&Node, RoutingError> {
        self.nodes
            .get(id)
            .ok_or(RoutingError::NodeOutOfRange { id, size: self.nodes.len() })
    }

    /// All nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Look up a node id by its display name.
    /// If two nodes share a name, the most recently added one wins.
    pub fn node_by_name(&self, name: &str) -> Option<usize> {
        self.names.get(name).copied()
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn check_id(&self, id: usize) -> Result<(), RoutingError> {
        if id >= self.nodes.len() {
            return Err(RoutingError::NodeOutOfRange { id, size: self.nodes.len() });
        }
        Ok(())
    }
}

/// Small demo map of six named places connected by bidirectional roads.
/// Used as the fixture for the search tests and as a ready-made graph for
/// callers that just want something to query.
pub fn sample_map() -> Graph {
    let mut g = Graph::with_capacity(6);

    let a = g.add_node("A:Station", 0.0, 0.0);
    let b = g.add_node("B:Market", 2.0, 1.0);
    let c = g.add_node("C:College", 4.0, 0.0);
    let d = g.add_node("D:Hospital", 1.0, -2.0);
    let e = g.add_node("E:Mall", 3.0, -2.0);
    let f = g.add_node("F:Airport", 6.0, -1.0);

    // The sample data is well-formed, unwrap is safe here
    let roads = [
        (a, b, 2.2),
        (a, d, 2.5),
        (b, c, 2.5),
        (b, e, 3.0),
        (c, f, 2.8),
        (d, e, 1.8),
        (e, f, 3.0),
        (b, d, 3.4),
    ];
    for (u, v, w) in roads {
        g.add_edge(u, v, w, true).unwrap();
    }

    g
}
