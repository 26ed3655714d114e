//! Board trait and adjacency-list graph.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::core::{Location, Transport};

/// A directed, typed edge leaving some node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Node the edge leads to.
    pub destination: Location,
    /// Transport type, which decides the ticket required.
    pub transport: Transport,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(destination: Location, transport: Transport) -> Self {
        Self {
            destination,
            transport,
        }
    }
}

/// Read-only view of a transport board.
///
/// ## Implementation Notes
///
/// - `edges_from`: return an empty slice for unknown nodes
/// - Parallel edges with different transports are allowed (a node pair
///   can be linked by both taxi and bus)
pub trait Board {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Check if a node exists.
    fn contains(&self, node: Location) -> bool;

    /// All edges leaving `node`.
    fn edges_from(&self, node: Location) -> &[Edge];

    /// All nodes, in ascending order.
    fn nodes(&self) -> Vec<Location>;

    /// Check if the board has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}

/// Adjacency-list board.
///
/// Most nodes on a city map have a handful of edges, so per-node edge
/// lists are `SmallVec`s that stay inline up to six entries.
///
/// ## Example
///
/// ```
/// use rust_yard::board::{Board, TransportGraph};
/// use rust_yard::core::{Location, Transport};
///
/// let mut graph = TransportGraph::new();
/// graph.add_edge(Location(1), Location(2), Transport::Taxi);
/// graph.add_edge(Location(2), Location(3), Transport::Bus);
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edges_from(Location(2)).len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransportGraph {
    adjacency: FxHashMap<Location, SmallVec<[Edge; 6]>>,
}

impl TransportGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an undirected graph from `(a, b, transport)` triples.
    pub fn from_edges(edges: impl IntoIterator<Item = (u32, u32, Transport)>) -> Self {
        let mut graph = Self::new();
        for (a, b, transport) in edges {
            graph.add_edge(Location(a), Location(b), transport);
        }
        graph
    }

    /// A cycle `1 - 2 - ... - n - 1` where every edge uses `transport`.
    #[must_use]
    pub fn cycle(n: u32, transport: Transport) -> Self {
        let mut graph = Self::new();
        for i in 1..=n {
            let next = if i == n { 1 } else { i + 1 };
            if next != i {
                graph.add_edge(Location(i), Location(next), transport);
            } else {
                graph.add_node(Location(i));
            }
        }
        graph
    }

    /// Add an isolated node. No-op if it already exists.
    pub fn add_node(&mut self, node: Location) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an edge in both directions, creating missing nodes.
    pub fn add_edge(&mut self, a: Location, b: Location, transport: Transport) {
        self.add_directed_edge(a, b, transport);
        self.add_directed_edge(b, a, transport);
    }

    /// Add a one-way edge, creating missing nodes.
    pub fn add_directed_edge(&mut self, from: Location, to: Location, transport: Transport) {
        self.add_node(to);
        self.adjacency
            .entry(from)
            .or_default()
            .push(Edge::new(to, transport));
    }

    /// Total number of directed edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }
}

impl Board for TransportGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains(&self, node: Location) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn edges_from(&self, node: Location) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    fn nodes(&self) -> Vec<Location> {
        let mut nodes: Vec<_> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }
}
