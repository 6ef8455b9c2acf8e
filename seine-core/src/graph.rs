//! Undirected simple-graph substrate shared by the generators and the
//! robustness analyzer.
//!
//! Storage is slot based: the node identifier is its slot index, and a
//! removed node leaves a dead slot behind so the identifiers of surviving
//! nodes stay stable across an entire removal sequence. Neighbour sets are
//! ordered so iteration is deterministic under a fixed seed.

use std::collections::BTreeSet;

use crate::error::GraphError;

/// A mutable undirected simple graph over integer node identifiers.
///
/// Invariants maintained by every mutation:
///
/// - no self-loops and no duplicate edges;
/// - adjacency is symmetric: `v ∈ adj(u)` iff `u ∈ adj(v)`;
/// - `degree(u)` equals the size of `u`'s neighbour set for every live `u`.
///
/// # Examples
/// ```
/// use seine_core::Graph;
///
/// let mut graph = Graph::with_node_count(3);
/// graph.add_edge(0, 1).expect("endpoints are live");
/// graph.add_edge(1, 2).expect("endpoints are live");
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.degree(1), Some(2));
///
/// graph.remove_node(1).expect("node 1 is live");
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Option<BTreeSet<usize>>>,
    live_nodes: usize,
    edge_count: usize,
}

impl Graph {
    /// Creates a graph with `node_count` live, isolated nodes `0..node_count`.
    #[must_use]
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            adjacency: (0..node_count).map(|_| Some(BTreeSet::new())).collect(),
            live_nodes: node_count,
            edge_count: 0,
        }
    }

    /// Appends a fresh isolated node and returns its identifier.
    pub fn add_node(&mut self) -> usize {
        let id = self.adjacency.len();
        self.adjacency.push(Some(BTreeSet::new()));
        self.live_nodes += 1;
        id
    }

    /// Removes a node together with all of its incident edges.
    ///
    /// The slot is left dead; the identifiers of the remaining nodes do not
    /// shift.
    ///
    /// # Errors
    /// Returns [`GraphError::NodeNotFound`] when `node` is not live.
    pub fn remove_node(&mut self, node: usize) -> Result<(), GraphError> {
        let neighbours = self
            .adjacency
            .get_mut(node)
            .and_then(Option::take)
            .ok_or(GraphError::NodeNotFound { node })?;

        for neighbour in &neighbours {
            if let Some(Some(set)) = self.adjacency.get_mut(*neighbour) {
                set.remove(&node);
            }
        }

        self.edge_count -= neighbours.len();
        self.live_nodes -= 1;
        Ok(())
    }

    /// Inserts the undirected edge `(u, v)`.
    ///
    /// Returns `true` when the edge was newly inserted and `false` when it
    /// was already present, so callers can keep degree totals incrementally.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when `u == v` and
    /// [`GraphError::NodeNotFound`] when either endpoint is not live.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        if u == v {
            return Err(GraphError::SelfLoop { node: u });
        }
        if !self.contains(v) {
            return Err(GraphError::NodeNotFound { node: v });
        }
        let Some(Some(from)) = self.adjacency.get_mut(u) else {
            return Err(GraphError::NodeNotFound { node: u });
        };
        if !from.insert(v) {
            return Ok(false);
        }
        if let Some(Some(to)) = self.adjacency.get_mut(v) {
            to.insert(u);
        }
        self.edge_count += 1;
        Ok(true)
    }

    /// Returns whether `node` is live.
    #[must_use]
    pub fn contains(&self, node: usize) -> bool {
        matches!(self.adjacency.get(node), Some(Some(_)))
    }

    /// Returns whether the undirected edge `(u, v)` is present.
    #[must_use]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .and_then(Option::as_ref)
            .is_some_and(|set| set.contains(&v))
    }

    /// Returns the degree of a live node, or `None` for a dead slot.
    #[must_use]
    pub fn degree(&self, node: usize) -> Option<usize> {
        self.adjacency
            .get(node)
            .and_then(Option::as_ref)
            .map(BTreeSet::len)
    }

    /// Iterates over the neighbours of a live node in ascending order.
    ///
    /// Returns `None` for a dead slot so callers can distinguish "isolated"
    /// from "removed".
    pub fn neighbours(&self, node: usize) -> Option<impl Iterator<Item = usize> + '_> {
        self.adjacency
            .get(node)
            .and_then(Option::as_ref)
            .map(|set| set.iter().copied())
    }

    /// Returns the number of live nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the allocated slot count, including dead slots.
    ///
    /// Node identifiers are always smaller than this bound, which makes it
    /// the right size for auxiliary per-node buffers.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns whether the graph has no live nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_nodes == 0
    }

    /// Iterates over the live node identifiers in ascending order.
    ///
    /// # Examples
    /// ```
    /// use seine_core::Graph;
    ///
    /// let mut graph = Graph::with_node_count(3);
    /// graph.remove_node(1).expect("node 1 is live");
    /// let nodes: Vec<_> = graph.nodes().collect();
    /// assert_eq!(nodes, vec![0, 2]);
    /// ```
    pub fn nodes(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| id))
    }

    /// Iterates over the edges in canonical `(u, v)` form with `u < v`,
    /// ordered lexicographically.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|set| (id, set)))
            .flat_map(|(u, set)| {
                set.iter()
                    .copied()
                    .filter(move |&v| u < v)
                    .map(move |v| (u, v))
            })
    }
}
