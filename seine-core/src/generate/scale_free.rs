//! Barabási–Albert scale-free network generation.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    error::{NetworkError, Result},
    graph::Graph,
};

use super::NetworkModel;

/// Generates scale-free networks by preferential attachment: a clique seed
/// of `seed_nodes` nodes grows one node at a time, each new arrival
/// attaching to `attachments` distinct existing nodes chosen with
/// probability proportional to their current degree.
///
/// Target selection draws from an attachment pool in which every node
/// appears once per unit of degree, re-sampling on duplicates, so the pool
/// doubles as the running degree total and no per-step renormalisation is
/// needed.
///
/// # Examples
/// ```
/// use seine_core::{NetworkModel, ScaleFreeNetwork};
///
/// let model = ScaleFreeNetwork::new(100, 2, 3).expect("parameters are valid");
/// let graph = model.generate(7);
/// assert_eq!(graph.node_count(), 100);
/// // Three seed-clique edges plus two per grown node.
/// assert_eq!(graph.edge_count(), 3 + 2 * 97);
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScaleFreeNetwork {
    nodes: usize,
    attachments: usize,
    seed_nodes: usize,
}

impl ScaleFreeNetwork {
    /// Creates a recipe for a network of `nodes` nodes grown from a clique
    /// of `seed_nodes`, attaching `attachments` edges per new node.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidNodeCount`] when `nodes` is zero,
    /// [`NetworkError::InvalidAttachmentCount`] when `attachments` is zero,
    /// [`NetworkError::AttachmentExceedsSeed`] when `attachments` exceeds
    /// `seed_nodes`, and [`NetworkError::SeedExceedsTarget`] when
    /// `seed_nodes` exceeds `nodes`.
    pub fn new(nodes: usize, attachments: usize, seed_nodes: usize) -> Result<Self> {
        if nodes < 1 {
            return Err(NetworkError::InvalidNodeCount { got: nodes });
        }
        if attachments < 1 {
            return Err(NetworkError::InvalidAttachmentCount { got: attachments });
        }
        if attachments > seed_nodes {
            return Err(NetworkError::AttachmentExceedsSeed {
                attachments,
                seed_nodes,
            });
        }
        if seed_nodes > nodes {
            return Err(NetworkError::SeedExceedsTarget {
                seed_nodes,
                node_count: nodes,
            });
        }
        Ok(Self {
            nodes,
            attachments,
            seed_nodes,
        })
    }

    /// Creates a recipe whose asymptotic mean degree is `mean_degree`, via
    /// `m = k / 2` with a seed clique of `m + 1` nodes.
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidNodeCount`] when `nodes` is zero,
    /// [`NetworkError::InvalidAttachmentCount`] when the implied attachment
    /// count is zero, and [`NetworkError::SeedExceedsTarget`] when the
    /// implied seed does not fit within `nodes`.
    pub fn with_mean_degree(nodes: usize, mean_degree: f64) -> Result<Self> {
        let attachments = if mean_degree.is_finite() && mean_degree > 0.0 {
            (mean_degree / 2.0) as usize
        } else {
            0
        };
        Self::new(nodes, attachments, attachments.saturating_add(1))
    }

    /// Returns the node count of generated graphs.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> usize { self.nodes }

    /// Returns how many edges each grown node attaches.
    #[must_use]
    #[rustfmt::skip]
    pub fn attachments(&self) -> usize { self.attachments }

    /// Returns the size of the initial clique.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed_nodes(&self) -> usize { self.seed_nodes }
}

impl NetworkModel for ScaleFreeNetwork {
    fn node_count(&self) -> usize {
        self.nodes
    }

    fn name(&self) -> &str {
        "barabasi-albert"
    }

    #[instrument(
        name = "generate.scale_free",
        skip(self),
        fields(
            nodes = self.nodes,
            attachments = self.attachments,
            seed_nodes = self.seed_nodes,
            seed = seed,
        ),
    )]
    fn generate(&self, seed: u64) -> Graph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut graph = Graph::with_node_count(self.seed_nodes);

        // Attachment pool: one entry per endpoint of every edge, so a node's
        // multiplicity equals its degree.
        let mut pool = Vec::with_capacity(2 * self.expected_edges());
        for i in 0..self.seed_nodes {
            for j in (i + 1)..self.seed_nodes {
                graph
                    .add_edge(i, j)
                    .expect("seed clique visits live, distinct endpoints");
                pool.push(i);
                pool.push(j);
            }
        }

        let mut targets = Vec::with_capacity(self.attachments);
        for _ in self.seed_nodes..self.nodes {
            let arrival = graph.add_node();
            pick_targets(&mut rng, &pool, arrival, self.attachments, &mut targets);
            for &target in &targets {
                graph
                    .add_edge(arrival, target)
                    .expect("arrival is fresh and targets are live and distinct");
                pool.push(arrival);
                pool.push(target);
            }
        }

        info!(edges = graph.edge_count(), "generated scale-free network");
        graph
    }
}

impl ScaleFreeNetwork {
    fn expected_edges(&self) -> usize {
        let seed_edges = self.seed_nodes * (self.seed_nodes - 1) / 2;
        seed_edges + self.attachments * (self.nodes - self.seed_nodes)
    }
}

/// Fills `targets` with `count` distinct existing nodes drawn
/// degree-proportionally from `pool`.
///
/// A pool left empty by a single-node seed carries no degree information,
/// so selection falls back to a uniform draw over the `existing` nodes.
/// Re-sampling terminates because `count` never exceeds the number of
/// distinct nodes available.
fn pick_targets(
    rng: &mut SmallRng,
    pool: &[usize],
    existing: usize,
    count: usize,
    targets: &mut Vec<usize>,
) {
    targets.clear();
    while targets.len() < count {
        let candidate = if pool.is_empty() {
            rng.gen_range(0..existing)
        } else {
            pool[rng.gen_range(0..pool.len())]
        };
        if !targets.contains(&candidate) {
            targets.push(candidate);
        }
    }
}
