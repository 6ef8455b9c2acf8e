//! Metric carriers produced by robustness analysis.
//!
//! A [`MetricSeries`] is append-only while an analysis runs and read-only
//! afterwards; samples are exposed in insertion order, which is also
//! fraction-removed order. Plotting collaborators consume these directly.

use std::collections::BTreeMap;

/// The structural quantity a series tracks across a removal sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[non_exhaustive]
pub enum MetricKind {
    /// Longest shortest path within the giant component.
    Diameter,
    /// Node count of the largest connected component.
    GiantComponentSize,
    /// Number of connected components among the live nodes.
    ComponentCount,
    /// Mean node count of the components other than the giant one.
    MeanFiniteComponentSize,
    /// Mean local clustering coefficient over all live nodes.
    MeanClusteringCoefficient,
}

impl MetricKind {
    /// Returns the symbolic identifier used for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diameter => "diameter",
            Self::GiantComponentSize => "giant_component_size",
            Self::ComponentCount => "component_count",
            Self::MeanFiniteComponentSize => "mean_finite_component_size",
            Self::MeanClusteringCoefficient => "mean_clustering_coefficient",
        }
    }

    pub(crate) const ALL: [Self; 5] = [
        Self::Diameter,
        Self::GiantComponentSize,
        Self::ComponentCount,
        Self::MeanFiniteComponentSize,
        Self::MeanClusteringCoefficient,
    ];
}

/// One `(fraction removed, metric value)` observation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MetricSample {
    fraction_removed: f64,
    value: f64,
}

impl MetricSample {
    pub(crate) fn new(fraction_removed: f64, value: f64) -> Self {
        Self {
            fraction_removed,
            value,
        }
    }

    /// Returns the fraction of the original node set removed so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn fraction_removed(&self) -> f64 { self.fraction_removed }

    /// Returns the observed metric value.
    #[must_use]
    #[rustfmt::skip]
    pub fn value(&self) -> f64 { self.value }
}

/// Append-only sequence of samples sharing one [`MetricKind`].
///
/// # Examples
/// ```
/// use seine_core::{AnalyzerBuilder, Graph, MetricKind, RemovalStrategy};
///
/// let mut graph = Graph::with_node_count(4);
/// graph.add_edge(0, 1).expect("endpoints are live");
/// let analyzer = AnalyzerBuilder::new()
///     .with_strategy(RemovalStrategy::Random)
///     .build()
///     .expect("configuration is valid");
/// let report = analyzer.run(&mut graph, 7).expect("analysis must succeed");
///
/// let series = report
///     .series(MetricKind::GiantComponentSize)
///     .expect("giant component series is always recorded");
/// assert_eq!(series.samples().first().map(|s| s.value()), Some(2.0));
/// assert_eq!(series.samples().last().map(|s| s.value()), Some(0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MetricSeries {
    kind: MetricKind,
    samples: Vec<MetricSample>,
}

impl MetricSeries {
    pub(crate) fn new(kind: MetricKind) -> Self {
        Self {
            kind,
            samples: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, fraction_removed: f64, value: f64) {
        debug_assert!(
            self.samples
                .last()
                .is_none_or(|last| last.fraction_removed <= fraction_removed),
            "fraction_removed must be non-decreasing"
        );
        self.samples.push(MetricSample::new(fraction_removed, value));
    }

    /// Returns the metric this series tracks.
    #[must_use]
    #[rustfmt::skip]
    pub fn kind(&self) -> MetricKind { self.kind }

    /// Returns the samples in insertion (fraction-removed) order.
    #[must_use]
    #[rustfmt::skip]
    pub fn samples(&self) -> &[MetricSample] { &self.samples }

    /// Returns the number of recorded samples.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.samples.len() }

    /// Returns whether the series holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Number of equal-width buckets a clustering histogram spans over `[0, 1]`.
pub const CLUSTERING_BUCKETS: usize = 10;

/// Histogram of per-node clustering coefficients at one removal step.
///
/// Coefficients fall in `[0, 1]`; a value of exactly 1 is counted in the
/// final bucket.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClusteringHistogram {
    counts: [usize; CLUSTERING_BUCKETS],
}

impl ClusteringHistogram {
    pub(crate) fn record(&mut self, coefficient: f64) {
        let scaled = (coefficient * CLUSTERING_BUCKETS as f64).floor();
        let bucket = (scaled as usize).min(CLUSTERING_BUCKETS - 1);
        self.counts[bucket] += 1;
    }

    /// Returns the per-bucket node counts, lowest bucket first.
    #[must_use]
    #[rustfmt::skip]
    pub fn counts(&self) -> &[usize; CLUSTERING_BUCKETS] { &self.counts }

    /// Returns the half-open value range `[lower, upper)` of a bucket.
    #[must_use]
    pub fn bucket_range(bucket: usize) -> (f64, f64) {
        let width = 1.0 / CLUSTERING_BUCKETS as f64;
        (bucket as f64 * width, (bucket as f64 + 1.0) * width)
    }

    /// Returns the total number of recorded nodes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// The clustering-coefficient distribution observed at one removal step.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusteringSnapshot {
    fraction_removed: f64,
    histogram: ClusteringHistogram,
}

impl ClusteringSnapshot {
    pub(crate) fn new(fraction_removed: f64, histogram: ClusteringHistogram) -> Self {
        Self {
            fraction_removed,
            histogram,
        }
    }

    /// Returns the fraction of the original node set removed so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn fraction_removed(&self) -> f64 { self.fraction_removed }

    /// Returns the bucketed distribution of per-node coefficients.
    #[must_use]
    #[rustfmt::skip]
    pub fn histogram(&self) -> &ClusteringHistogram { &self.histogram }
}

/// The full output of one [`crate::RobustnessAnalyzer::run`] invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct RobustnessReport {
    series: BTreeMap<MetricKind, MetricSeries>,
    clustering: Vec<ClusteringSnapshot>,
}

impl RobustnessReport {
    pub(crate) fn new() -> Self {
        let series = MetricKind::ALL
            .into_iter()
            .map(|kind| (kind, MetricSeries::new(kind)))
            .collect();
        Self {
            series,
            clustering: Vec::new(),
        }
    }

    pub(crate) fn push_sample(&mut self, kind: MetricKind, fraction_removed: f64, value: f64) {
        if let Some(series) = self.series.get_mut(&kind) {
            series.push(fraction_removed, value);
        }
    }

    pub(crate) fn push_clustering(&mut self, snapshot: ClusteringSnapshot) {
        self.clustering.push(snapshot);
    }

    /// Returns the series recorded for a metric, if any samples exist for it.
    #[must_use]
    pub fn series(&self, kind: MetricKind) -> Option<&MetricSeries> {
        self.series.get(&kind)
    }

    /// Iterates over every recorded series in [`MetricKind`] order.
    pub fn all_series(&self) -> impl Iterator<Item = &MetricSeries> {
        self.series.values()
    }

    /// Returns the clustering-distribution snapshots in removal order.
    #[must_use]
    #[rustfmt::skip]
    pub fn clustering_snapshots(&self) -> &[ClusteringSnapshot] { &self.clustering }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_preserves_insertion_order() {
        let mut series = MetricSeries::new(MetricKind::Diameter);
        series.push(0.0, 4.0);
        series.push(0.5, 2.0);
        series.push(1.0, 0.0);

        assert_eq!(series.kind(), MetricKind::Diameter);
        assert_eq!(series.len(), 3);
        let fractions: Vec<f64> = series
            .samples()
            .iter()
            .map(MetricSample::fraction_removed)
            .collect();
        assert_eq!(fractions, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn histogram_places_extremes_in_outer_buckets() {
        let mut histogram = ClusteringHistogram::default();
        histogram.record(0.0);
        histogram.record(1.0);
        histogram.record(0.95);
        histogram.record(0.049);

        assert_eq!(histogram.counts()[0], 2);
        assert_eq!(histogram.counts()[CLUSTERING_BUCKETS - 1], 2);
        assert_eq!(histogram.total(), 4);
    }

    #[test]
    fn bucket_range_tiles_the_unit_interval() {
        let (first_lo, first_hi) = ClusteringHistogram::bucket_range(0);
        let (last_lo, last_hi) = ClusteringHistogram::bucket_range(CLUSTERING_BUCKETS - 1);
        assert_eq!(first_lo, 0.0);
        assert!((first_hi - 0.1).abs() < 1e-12);
        assert!((last_lo - 0.9).abs() < 1e-12);
        assert!((last_hi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn report_records_every_metric_kind() {
        let report = RobustnessReport::new();
        for kind in MetricKind::ALL {
            assert!(report.series(kind).is_some());
        }
        assert!(report.clustering_snapshots().is_empty());
    }
}
