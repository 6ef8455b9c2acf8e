//! Benchmark support crate for seine.
//!
//! Provides parameter types and graph fixtures used by the Criterion
//! benchmarks for network generation and robustness analysis.

pub mod params;

use seine_core::{Graph, NetworkModel, Result, ScaleFreeNetwork};

/// Seed used for all synthetic graph generation in the benchmarks.
pub const BENCH_SEED: u64 = 42;

/// Builds the scale-free fixture graph analysed by the robustness
/// benchmarks.
///
/// # Errors
/// Returns an error when the requested node count cannot hold the standard
/// `m = 2`, `m0 = 3` growth parameters.
pub fn scale_free_fixture(node_count: usize) -> Result<Graph> {
    let model = ScaleFreeNetwork::new(node_count, 2, 3)?;
    Ok(model.generate(BENCH_SEED))
}
