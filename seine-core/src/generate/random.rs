//! Erdős–Rényi random network generation.

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    error::{NetworkError, Result},
    graph::Graph,
};

use super::NetworkModel;

/// Generates G(N, p) random networks: every one of the `C(N, 2)` possible
/// edges is included independently with probability `p`.
///
/// The direct pairwise formulation is O(N²), which is comfortable at the
/// node counts these experiments use (hundreds to a few thousand).
///
/// # Examples
/// ```
/// use seine_core::{NetworkModel, RandomNetwork};
///
/// let empty = RandomNetwork::new(10, 0.0).expect("parameters are valid");
/// assert_eq!(empty.generate(1).edge_count(), 0);
///
/// let complete = RandomNetwork::new(10, 1.0).expect("parameters are valid");
/// assert_eq!(complete.generate(1).edge_count(), 45);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RandomNetwork {
    nodes: usize,
    probability: f64,
}

impl RandomNetwork {
    /// Creates a recipe for G(`nodes`, `probability`).
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidNodeCount`] when `nodes` is zero and
    /// [`NetworkError::InvalidEdgeProbability`] when `probability` is not a
    /// finite value within `[0, 1]`.
    pub fn new(nodes: usize, probability: f64) -> Result<Self> {
        if nodes < 1 {
            return Err(NetworkError::InvalidNodeCount { got: nodes });
        }
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(NetworkError::InvalidEdgeProbability { got: probability });
        }
        Ok(Self { nodes, probability })
    }

    /// Creates a recipe whose expected mean degree is `mean_degree`, via
    /// `p = k / (N - 1)`.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidNodeCount`] when `nodes` is zero and
    /// [`NetworkError::InvalidEdgeProbability`] when the implied probability
    /// falls outside `[0, 1]`.
    pub fn with_mean_degree(nodes: usize, mean_degree: f64) -> Result<Self> {
        if nodes < 1 {
            return Err(NetworkError::InvalidNodeCount { got: nodes });
        }
        let probability = if nodes == 1 {
            0.0
        } else {
            mean_degree / (nodes - 1) as f64
        };
        Self::new(nodes, probability)
    }

    /// Returns the node count of generated graphs.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> usize { self.nodes }

    /// Returns the independent edge-inclusion probability.
    #[must_use]
    #[rustfmt::skip]
    pub fn probability(&self) -> f64 { self.probability }
}

impl NetworkModel for RandomNetwork {
    fn node_count(&self) -> usize {
        self.nodes
    }

    fn name(&self) -> &str {
        "erdos-renyi"
    }

    #[instrument(
        name = "generate.random",
        skip(self),
        fields(nodes = self.nodes, probability = self.probability, seed = seed),
    )]
    fn generate(&self, seed: u64) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut graph = Graph::with_node_count(self.nodes);

        for i in 0..self.nodes {
            for j in (i + 1)..self.nodes {
                let draw: f64 = rng.sample(Standard);
                if draw < self.probability {
                    graph
                        .add_edge(i, j)
                        .expect("pairwise loop visits live, distinct endpoints");
                }
            }
        }

        info!(edges = graph.edge_count(), "generated random network");
        graph
    }
}
