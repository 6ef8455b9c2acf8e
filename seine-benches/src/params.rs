//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so Criterion benchmark
//! ids stay readable across report runs.

use std::fmt;

/// Parameters for a generation benchmark run.
#[derive(Clone, Debug)]
pub struct GenerationBenchParams {
    /// Number of nodes in the generated network.
    pub node_count: usize,
}

impl fmt::Display for GenerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}

/// Parameters for a robustness-analysis benchmark run.
#[derive(Clone, Debug)]
pub struct AnalysisBenchParams {
    /// Number of nodes in the analysed network.
    pub node_count: usize,
    /// Strategy label included in the benchmark id.
    pub strategy: &'static str,
}

impl fmt::Display for AnalysisBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},strategy={}", self.node_count, self.strategy)
    }
}
