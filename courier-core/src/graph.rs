//! Undirected, weighted transport graph.
//!
//! The graph is built once while loading a problem and is shared read-only
//! by every [`WorldState`](crate::WorldState) snapshot afterwards. Duplicate
//! edges collapse on insertion, keeping the smaller weight.

use std::collections::BTreeMap;

/// Integer identifier of a location in the transport graph.
pub type NodeId = u32;

/// Traversal time of an edge, in simulation steps.
pub type Weight = u32;

/// An undirected graph with at most one weighted edge per node pair.
///
/// # Examples
///
/// ```
/// use courier_core::Graph;
///
/// let graph = Graph::from_edges([(0, 1, 5), (1, 0, 3), (1, 2, 1)]);
/// assert_eq!(graph.weight(0, 1), Some(3));
/// assert_eq!(graph.weight(1, 0), Some(3));
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.weight(0, 2), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, Weight>>,
}

impl Graph {
    /// Construct an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(from, to, weight)` triples.
    ///
    /// Duplicate edges, in either orientation, keep the minimum weight.
    #[must_use]
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, Weight)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.insert_edge(from, to, weight);
        }
        graph
    }

    /// Insert an undirected edge, keeping the smaller weight on duplicates.
    pub fn insert_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) {
        let stored = self.weight(from, to).map_or(weight, |existing| existing.min(weight));
        self.adjacency.entry(from).or_default().insert(to, stored);
        self.adjacency.entry(to).or_default().insert(from, stored);
    }

    /// Add a node without edges. Existing nodes are left untouched.
    pub fn insert_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// Weight of the edge between `from` and `to`, if the nodes are adjacent.
    #[must_use]
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.adjacency
            .get(&from)
            .and_then(|neighbours| neighbours.get(&to))
            .copied()
    }

    /// Whether an edge joins `from` and `to`.
    #[must_use]
    pub fn is_adjacent(&self, from: NodeId, to: NodeId) -> bool {
        self.weight(from, to).is_some()
    }

    /// Neighbours of `node` with the connecting edge weights, in node order.
    pub fn neighbours(&self, node: NodeId) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency
            .get(&node)
            .into_iter()
            .flat_map(|neighbours| neighbours.iter().map(|(&to, &weight)| (to, weight)))
    }

    /// Whether `node` appears in the graph.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// All known nodes in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Every undirected edge once, as `(lower, higher, weight)` in node order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.adjacency.iter().flat_map(|(&from, neighbours)| {
            neighbours
                .iter()
                .filter(move |&(&to, _)| from <= to)
                .map(move |(&to, &weight)| (from, to, weight))
        })
    }
}
