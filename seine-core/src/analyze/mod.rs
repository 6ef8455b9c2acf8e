//! Robustness analysis: sequential node removal with per-step structural
//! measurement.
//!
//! The analyzer owns the graph exclusively for the duration of a run and
//! mutates it in place; callers that need the pristine graph again clone it
//! before calling [`RobustnessAnalyzer::run`].

mod measure;
mod series;
mod strategy;
mod union_find;

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{info, instrument, warn};

use crate::{
    error::{NetworkError, Result},
    graph::Graph,
};

pub use self::{
    measure::{StructuralSummary, local_clustering, measure_structure},
    series::{
        CLUSTERING_BUCKETS, ClusteringHistogram, ClusteringSnapshot, MetricKind, MetricSample,
        MetricSeries, RobustnessReport,
    },
    strategy::RemovalStrategy,
};

pub(crate) use self::strategy::{highest_degree_node, removal_order};

/// Configures and constructs [`RobustnessAnalyzer`] instances.
///
/// # Examples
/// ```
/// use seine_core::{AnalyzerBuilder, RemovalStrategy};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_strategy(RemovalStrategy::DegreeAdaptive)
///     .with_step_size(5)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(analyzer.strategy(), RemovalStrategy::DegreeAdaptive);
/// assert_eq!(analyzer.step_size().get(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyzerBuilder {
    strategy: RemovalStrategy,
    step_size: usize,
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self {
            strategy: RemovalStrategy::Random,
            step_size: 1,
        }
    }
}

impl AnalyzerBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the removal strategy driving the analysis.
    #[must_use]
    pub fn with_strategy(mut self, strategy: RemovalStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured removal strategy.
    #[must_use]
    pub fn strategy(&self) -> RemovalStrategy {
        self.strategy
    }

    /// Overrides how many nodes fall between consecutive measurements.
    #[must_use]
    pub fn with_step_size(mut self, step_size: usize) -> Self {
        self.step_size = step_size;
        self
    }

    /// Returns the configured step size.
    #[must_use]
    pub fn step_size(&self) -> usize {
        self.step_size
    }

    /// Validates the configuration and constructs a [`RobustnessAnalyzer`].
    ///
    /// # Errors
    /// Returns [`NetworkError::InvalidStepSize`] when the step size is zero.
    pub fn build(self) -> Result<RobustnessAnalyzer> {
        let step_size = NonZeroUsize::new(self.step_size).ok_or(NetworkError::InvalidStepSize {
            got: self.step_size,
        })?;

        Ok(RobustnessAnalyzer {
            strategy: self.strategy,
            step_size,
        })
    }
}

/// Drives a removal sequence over a graph and records structural metrics
/// after every step.
///
/// # Examples
/// ```
/// use seine_core::{AnalyzerBuilder, Graph, MetricKind, RemovalStrategy};
///
/// let mut graph = Graph::with_node_count(5);
/// for i in 1..5 {
///     graph.add_edge(0, i).expect("endpoints are live");
/// }
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_strategy(RemovalStrategy::DegreeAdaptive)
///     .build()
///     .expect("configuration is valid");
/// let report = analyzer.run(&mut graph, 11).expect("run must succeed");
///
/// // Removing the hub first shatters the star immediately.
/// let giant = report
///     .series(MetricKind::GiantComponentSize)
///     .expect("series is recorded");
/// assert_eq!(giant.samples()[0].value(), 5.0);
/// assert_eq!(giant.samples()[1].value(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct RobustnessAnalyzer {
    strategy: RemovalStrategy,
    step_size: NonZeroUsize,
}

impl RobustnessAnalyzer {
    /// Returns the removal strategy used by this analyzer.
    #[must_use]
    pub fn strategy(&self) -> RemovalStrategy {
        self.strategy
    }

    /// Returns how many nodes fall between consecutive measurements.
    #[must_use]
    pub fn step_size(&self) -> NonZeroUsize {
        self.step_size
    }

    /// Removes nodes from `graph` until none remain, measuring after each
    /// step.
    ///
    /// The removal ordering is a deterministic function of `seed`, the
    /// strategy, and the graph, so identical inputs reproduce identical
    /// reports. The baseline state is recorded at `fraction_removed = 0`
    /// before the first removal.
    ///
    /// # Errors
    /// Returns [`NetworkError::EmptyGraph`] when `graph` has no live nodes.
    #[instrument(
        name = "analysis.run",
        err,
        skip(self, graph),
        fields(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            strategy = self.strategy.as_str(),
            step_size = self.step_size.get(),
        ),
    )]
    pub fn run(&self, graph: &mut Graph, seed: u64) -> Result<RobustnessReport> {
        if graph.is_empty() {
            warn!("input graph has no live nodes, returning error");
            return Err(NetworkError::EmptyGraph);
        }

        let initial_nodes = graph.node_count();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut planned = if self.strategy.is_adaptive() {
            Vec::new()
        } else {
            removal_order(graph, self.strategy, &mut rng)
        }
        .into_iter();

        let mut report = RobustnessReport::new();
        let mut removed = 0usize;
        record_step(&mut report, 0.0, graph);

        while !graph.is_empty() {
            let mut fell_this_step = 0usize;
            for _ in 0..self.step_size.get() {
                let victim = if self.strategy.is_adaptive() {
                    highest_degree_node(graph)
                } else {
                    planned.next()
                };
                let Some(victim) = victim else {
                    break;
                };
                graph.remove_node(victim).map_err(NetworkError::from)?;
                removed += 1;
                fell_this_step += 1;
                if graph.is_empty() {
                    break;
                }
            }
            if fell_this_step == 0 {
                break;
            }

            let fraction = removed as f64 / initial_nodes as f64;
            record_step(&mut report, fraction, graph);
        }

        info!(removed, "removal sequence exhausted");
        Ok(report)
    }
}

fn record_step(report: &mut RobustnessReport, fraction: f64, graph: &Graph) {
    let summary = measure_structure(graph);
    report.push_sample(MetricKind::Diameter, fraction, summary.diameter() as f64);
    report.push_sample(
        MetricKind::GiantComponentSize,
        fraction,
        summary.giant_component_size() as f64,
    );
    report.push_sample(
        MetricKind::ComponentCount,
        fraction,
        summary.component_count() as f64,
    );
    report.push_sample(
        MetricKind::MeanFiniteComponentSize,
        fraction,
        summary.mean_finite_component_size(),
    );
    report.push_sample(
        MetricKind::MeanClusteringCoefficient,
        fraction,
        summary.mean_clustering(),
    );
    report.push_clustering(ClusteringSnapshot::new(
        fraction,
        summary.clustering_histogram().clone(),
    ));
}
