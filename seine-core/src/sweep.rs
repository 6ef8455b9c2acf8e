//! Fraction-sweep removal experiments averaged over repeated trials.
//!
//! Mirrors the notebook methodology the robustness figures come from: for
//! each removal fraction on a linspace over `[0, 1]`, generate a fresh
//! network per trial, prune it in strategy order, measure once, and average
//! across trials. Every trial owns its private graph, so trials can run in
//! parallel without sharing mutable state.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument};

use crate::{
    analyze::{
        MetricKind, MetricSeries, RemovalStrategy, StructuralSummary, highest_degree_node,
        measure_structure, removal_order,
    },
    generate::NetworkModel,
    graph::Graph,
    rng::mix_stream_seed,
};

const DEFAULT_FRACTION_STEPS: usize = 30;
const DEFAULT_ITERATIONS: usize = 50;

/// A removal-fraction sweep over freshly generated networks.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use seine_core::{MetricKind, RandomNetwork, RemovalStrategy, RemovalSweep};
///
/// let model = RandomNetwork::new(40, 0.1).expect("parameters are valid");
/// let sweep = RemovalSweep::new(RemovalStrategy::Random)
///     .with_fraction_steps(NonZeroUsize::new(5).expect("non-zero"))
///     .with_iterations(NonZeroUsize::new(3).expect("non-zero"));
/// let report = sweep.run(&model, 42);
///
/// let giant = report
///     .series(MetricKind::GiantComponentSize)
///     .expect("series is recorded");
/// assert_eq!(giant.len(), 5);
/// assert_eq!(giant.samples().last().map(|s| s.value()), Some(0.0));
/// ```
#[derive(Clone, Debug)]
pub struct RemovalSweep {
    strategy: RemovalStrategy,
    fraction_steps: NonZeroUsize,
    iterations: NonZeroUsize,
}

impl RemovalSweep {
    /// Creates a sweep with the notebook defaults: 30 fraction steps and 50
    /// trials per step.
    #[must_use]
    pub fn new(strategy: RemovalStrategy) -> Self {
        Self {
            strategy,
            fraction_steps: NonZeroUsize::new(DEFAULT_FRACTION_STEPS)
                .expect("default fraction steps are non-zero"),
            iterations: NonZeroUsize::new(DEFAULT_ITERATIONS)
                .expect("default iterations are non-zero"),
        }
    }

    /// Overrides how many fractions are sampled across `[0, 1]`.
    #[must_use]
    pub fn with_fraction_steps(mut self, fraction_steps: NonZeroUsize) -> Self {
        self.fraction_steps = fraction_steps;
        self
    }

    /// Overrides how many independent trials are averaged per fraction.
    #[must_use]
    pub fn with_iterations(mut self, iterations: NonZeroUsize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Returns the removal strategy applied to every trial.
    #[must_use]
    pub fn strategy(&self) -> RemovalStrategy {
        self.strategy
    }

    /// Returns the number of sampled fractions.
    #[must_use]
    pub fn fraction_steps(&self) -> NonZeroUsize {
        self.fraction_steps
    }

    /// Returns the number of trials averaged per fraction.
    #[must_use]
    pub fn iterations(&self) -> NonZeroUsize {
        self.iterations
    }

    /// Runs the sweep against `model`, deriving every trial's generation and
    /// ordering seeds from `seed` so repeated runs reproduce the same
    /// curves.
    #[instrument(
        name = "sweep.run",
        skip(self, model),
        fields(
            model = model.name(),
            nodes = model.node_count(),
            strategy = self.strategy.as_str(),
            fraction_steps = self.fraction_steps.get(),
            iterations = self.iterations.get(),
            seed = seed,
        ),
    )]
    pub fn run<M: NetworkModel + Sync>(&self, model: &M, seed: u64) -> SweepReport {
        let steps = self.fraction_steps.get();
        let divisor = steps.saturating_sub(1).max(1);
        let mut report = SweepReport::new();

        for step in 0..steps {
            let fraction = step as f64 / divisor as f64;
            let summaries = self.collect_trials(model, fraction, seed, step);
            report.push_means(fraction, &summaries);
        }

        info!(steps, "sweep completed");
        report
    }

    fn collect_trials<M: NetworkModel + Sync>(
        &self,
        model: &M,
        fraction: f64,
        seed: u64,
        step: usize,
    ) -> Vec<StructuralSummary> {
        let iterations = self.iterations.get();
        let trial = |iteration: usize| {
            let stream = (step * iterations + iteration) as u64;
            self.prune_and_measure(model, fraction, mix_stream_seed(seed, stream))
        };

        #[cfg(feature = "parallel")]
        {
            (0..iterations).into_par_iter().map(trial).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..iterations).map(trial).collect()
        }
    }

    fn prune_and_measure<M: NetworkModel>(
        &self,
        model: &M,
        fraction: f64,
        trial_seed: u64,
    ) -> StructuralSummary {
        let mut graph = model.generate(trial_seed);
        let to_remove = (fraction * graph.node_count() as f64) as usize;
        prune(&mut graph, self.strategy, to_remove, mix_stream_seed(trial_seed, 1));
        measure_structure(&graph)
    }
}

/// Removes `count` nodes from `graph` in strategy order.
fn prune(graph: &mut Graph, strategy: RemovalStrategy, count: usize, order_seed: u64) {
    if strategy.is_adaptive() {
        for _ in 0..count {
            let Some(victim) = highest_degree_node(graph) else {
                break;
            };
            graph
                .remove_node(victim)
                .expect("the ranked victim is live");
        }
        return;
    }

    let mut rng = SmallRng::seed_from_u64(order_seed);
    let order = removal_order(graph, strategy, &mut rng);
    for victim in order.into_iter().take(count) {
        graph
            .remove_node(victim)
            .expect("the planned victim is live");
    }
}

/// Averaged metric curves produced by [`RemovalSweep::run`].
#[derive(Clone, Debug, PartialEq)]
pub struct SweepReport {
    series: BTreeMap<MetricKind, MetricSeries>,
}

impl SweepReport {
    fn new() -> Self {
        let series = MetricKind::ALL
            .into_iter()
            .map(|kind| (kind, MetricSeries::new(kind)))
            .collect();
        Self { series }
    }

    fn push_means(&mut self, fraction: f64, summaries: &[StructuralSummary]) {
        let count = summaries.len().max(1) as f64;
        let mean = |total: f64| total / count;

        let mut diameter = 0.0;
        let mut giant = 0.0;
        let mut components = 0.0;
        let mut finite = 0.0;
        let mut clustering = 0.0;
        for summary in summaries {
            diameter += summary.diameter() as f64;
            giant += summary.giant_component_size() as f64;
            components += summary.component_count() as f64;
            finite += summary.mean_finite_component_size();
            clustering += summary.mean_clustering();
        }

        self.push(MetricKind::Diameter, fraction, mean(diameter));
        self.push(MetricKind::GiantComponentSize, fraction, mean(giant));
        self.push(MetricKind::ComponentCount, fraction, mean(components));
        self.push(MetricKind::MeanFiniteComponentSize, fraction, mean(finite));
        self.push(MetricKind::MeanClusteringCoefficient, fraction, mean(clustering));
    }

    fn push(&mut self, kind: MetricKind, fraction: f64, value: f64) {
        if let Some(series) = self.series.get_mut(&kind) {
            series.push(fraction, value);
        }
    }

    /// Returns the averaged series for a metric.
    #[must_use]
    pub fn series(&self, kind: MetricKind) -> Option<&MetricSeries> {
        self.series.get(&kind)
    }

    /// Iterates over every averaged series in [`MetricKind`] order.
    pub fn all_series(&self) -> impl Iterator<Item = &MetricSeries> {
        self.series.values()
    }
}
