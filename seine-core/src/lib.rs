//! Seine core library.
//!
//! Generates synthetic networks under the Erdős–Rényi and Barabási–Albert
//! models and measures their structural robustness (giant component,
//! diameter, clustering distribution) as nodes are removed by random
//! failure or degree-targeted attack. Plotting and persistence are left to
//! external consumers of the metric series.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyze;
mod error;
mod generate;
mod graph;
mod rng;
pub mod stats;
mod sweep;

pub use crate::{
    analyze::{
        AnalyzerBuilder, CLUSTERING_BUCKETS, ClusteringHistogram, ClusteringSnapshot, MetricKind,
        MetricSample, MetricSeries, RemovalStrategy, RobustnessAnalyzer, RobustnessReport,
        StructuralSummary, local_clustering, measure_structure,
    },
    error::{GraphError, GraphErrorCode, NetworkError, NetworkErrorCode, Result},
    generate::{NetworkModel, RandomNetwork, ScaleFreeNetwork},
    graph::Graph,
    sweep::{RemovalSweep, SweepReport},
};
