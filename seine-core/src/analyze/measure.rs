//! One-shot structural measurement of a (possibly pruned) graph.
//!
//! Produces the component, diameter, and clustering figures recorded after
//! every removal step. Component membership comes from union-find over the
//! surviving edges; the diameter is the exact longest shortest path within
//! the giant component, found by breadth-first search from each of its
//! nodes.

use std::collections::VecDeque;

use crate::graph::Graph;

use super::{series::ClusteringHistogram, union_find::DisjointSet};

/// Structural metrics observed for one graph state.
///
/// Degenerate states are sentinel-valued rather than errors: a graph with
/// zero or one live node has diameter 0, and a graph with no live nodes has
/// every count at 0, so robustness curves terminate cleanly at 100%
/// removal.
#[derive(Clone, Debug, PartialEq)]
pub struct StructuralSummary {
    giant_component_size: usize,
    component_count: usize,
    mean_finite_component_size: f64,
    diameter: usize,
    mean_clustering: f64,
    clustering_histogram: ClusteringHistogram,
}

impl StructuralSummary {
    /// Returns the node count of the largest connected component.
    #[must_use]
    #[rustfmt::skip]
    pub fn giant_component_size(&self) -> usize { self.giant_component_size }

    /// Returns the number of connected components among the live nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the mean size of the components other than the giant one, or
    /// 0 when the giant component is the only one.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean_finite_component_size(&self) -> f64 { self.mean_finite_component_size }

    /// Returns the longest shortest-path distance within the giant
    /// component.
    #[must_use]
    #[rustfmt::skip]
    pub fn diameter(&self) -> usize { self.diameter }

    /// Returns the mean local clustering coefficient over all live nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn mean_clustering(&self) -> f64 { self.mean_clustering }

    /// Returns the bucketed distribution of per-node clustering
    /// coefficients.
    #[must_use]
    #[rustfmt::skip]
    pub fn clustering_histogram(&self) -> &ClusteringHistogram { &self.clustering_histogram }
}

/// Measures the current structure of `graph`.
///
/// # Examples
/// ```
/// use seine_core::{Graph, measure_structure};
///
/// let mut graph = Graph::with_node_count(4);
/// graph.add_edge(0, 1).expect("endpoints are live");
/// graph.add_edge(1, 2).expect("endpoints are live");
///
/// let summary = measure_structure(&graph);
/// assert_eq!(summary.giant_component_size(), 3);
/// assert_eq!(summary.component_count(), 2);
/// assert_eq!(summary.diameter(), 2);
/// ```
#[must_use]
pub fn measure_structure(graph: &Graph) -> StructuralSummary {
    let components = component_view(graph);
    let diameter = giant_diameter(graph, &components.giant_members);
    let (mean_clustering, clustering_histogram) = clustering_profile(graph);

    StructuralSummary {
        giant_component_size: components.giant_size,
        component_count: components.count,
        mean_finite_component_size: components.mean_finite_size,
        diameter,
        mean_clustering,
        clustering_histogram,
    }
}

/// Computes the local clustering coefficient of a live node.
///
/// Returns `None` for a dead slot. A node of degree below 2 has
/// coefficient 0.
#[must_use]
pub fn local_clustering(graph: &Graph, node: usize) -> Option<f64> {
    let neighbours: Vec<usize> = graph.neighbours(node)?.collect();
    let degree = neighbours.len();
    if degree < 2 {
        return Some(0.0);
    }

    let mut links = 0usize;
    for (idx, &a) in neighbours.iter().enumerate() {
        for &b in &neighbours[idx + 1..] {
            if graph.has_edge(a, b) {
                links += 1;
            }
        }
    }

    let possible = degree * (degree - 1) / 2;
    Some(links as f64 / possible as f64)
}

struct ComponentView {
    count: usize,
    giant_size: usize,
    mean_finite_size: f64,
    giant_members: Vec<usize>,
}

fn component_view(graph: &Graph) -> ComponentView {
    let capacity = graph.capacity();
    let mut set = DisjointSet::new(capacity);
    for (u, v) in graph.edges() {
        set.union(u, v);
    }

    let mut sizes = vec![0usize; capacity];
    for node in graph.nodes() {
        let root = set.find(node);
        sizes[root] += 1;
    }

    let mut count = 0usize;
    let mut giant_root = None;
    let mut giant_size = 0usize;
    for (root, &size) in sizes.iter().enumerate() {
        if size == 0 {
            continue;
        }
        count += 1;
        if size > giant_size {
            giant_size = size;
            giant_root = Some(root);
        }
    }

    let finite_nodes = graph.node_count() - giant_size;
    let mean_finite_size = if count > 1 {
        finite_nodes as f64 / (count - 1) as f64
    } else {
        0.0
    };

    let giant_members = giant_root.map_or_else(Vec::new, |target| {
        graph
            .nodes()
            .filter(|&node| set.find(node) == target)
            .collect()
    });

    ComponentView {
        count,
        giant_size,
        mean_finite_size,
        giant_members,
    }
}

/// Longest shortest path among `members`, which must form one connected
/// component of `graph`.
fn giant_diameter(graph: &Graph, members: &[usize]) -> usize {
    if members.len() <= 1 {
        return 0;
    }

    let mut distances = vec![usize::MAX; graph.capacity()];
    let mut queue = VecDeque::new();
    let mut diameter = 0usize;

    for &source in members {
        for slot in &mut distances {
            *slot = usize::MAX;
        }
        distances[source] = 0;
        queue.clear();
        queue.push_back(source);

        while let Some(node) = queue.pop_front() {
            let here = distances[node];
            diameter = diameter.max(here);
            let Some(neighbours) = graph.neighbours(node) else {
                continue;
            };
            for next in neighbours {
                if distances[next] == usize::MAX {
                    distances[next] = here + 1;
                    queue.push_back(next);
                }
            }
        }
    }

    diameter
}

fn clustering_profile(graph: &Graph) -> (f64, ClusteringHistogram) {
    let mut histogram = ClusteringHistogram::default();
    let mut sum = 0.0f64;
    let mut counted = 0usize;

    for node in graph.nodes() {
        let Some(coefficient) = local_clustering(graph, node) else {
            continue;
        };
        histogram.record(coefficient);
        sum += coefficient;
        counted += 1;
    }

    let mean = if counted == 0 { 0.0 } else { sum / counted as f64 };
    (mean, histogram)
}
