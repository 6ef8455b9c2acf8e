//! Descriptive statistics over a graph, consumed by plotting collaborators
//! and by tests.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crate::{analyze::local_clustering, graph::Graph};

/// Returns the `top_k` live nodes with the highest degree, ties broken by
/// ascending identifier.
///
/// # Examples
/// ```
/// use seine_core::{Graph, stats};
///
/// let mut graph = Graph::with_node_count(4);
/// graph.add_edge(2, 0).expect("endpoints are live");
/// graph.add_edge(2, 1).expect("endpoints are live");
/// graph.add_edge(2, 3).expect("endpoints are live");
/// assert_eq!(stats::hubs(&graph, 2), vec![2, 0]);
/// ```
#[must_use]
pub fn hubs(graph: &Graph, top_k: usize) -> Vec<usize> {
    let mut nodes: Vec<usize> = graph.nodes().collect();
    nodes.sort_by_key(|&node| (Reverse(graph.degree(node).unwrap_or(0)), node));
    nodes.truncate(top_k);
    nodes
}

/// Returns the mean degree over the live nodes, or 0 for an empty graph.
#[must_use]
pub fn average_degree(graph: &Graph) -> f64 {
    if graph.is_empty() {
        return 0.0;
    }
    2.0 * graph.edge_count() as f64 / graph.node_count() as f64
}

/// Returns the normalised degree distribution: each observed degree mapped
/// to the fraction of live nodes carrying it.
#[must_use]
pub fn degree_distribution(graph: &Graph) -> BTreeMap<usize, f64> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for node in graph.nodes() {
        if let Some(degree) = graph.degree(node) {
            *counts.entry(degree).or_insert(0) += 1;
        }
    }

    let total = graph.node_count() as f64;
    counts
        .into_iter()
        .map(|(degree, count)| (degree, count as f64 / total))
        .collect()
}

/// Returns the mean local clustering coefficient over the live nodes, or 0
/// for an empty graph.
#[must_use]
pub fn average_clustering(graph: &Graph) -> f64 {
    let mut sum = 0.0f64;
    let mut counted = 0usize;
    for node in graph.nodes() {
        if let Some(coefficient) = local_clustering(graph, node) {
            sum += coefficient;
            counted += 1;
        }
    }
    if counted == 0 { 0.0 } else { sum / counted as f64 }
}
