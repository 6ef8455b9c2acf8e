//! Network generation benchmarks.
//!
//! Measures Erdős–Rényi and Barabási–Albert construction time across the
//! node counts the robustness experiments use.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use seine_benches::{BENCH_SEED, params::GenerationBenchParams};
use seine_core::{NetworkError, NetworkModel, RandomNetwork, ScaleFreeNetwork};

/// Dataset sizes to benchmark.
const NODE_COUNTS: &[usize] = &[100, 500, 1_000];

/// Mean degree shared by both models so the densities are comparable.
const MEAN_DEGREE: f64 = 4.0;

fn generation_impl(c: &mut Criterion) -> Result<(), NetworkError> {
    let mut group = c.benchmark_group("generation");

    for &node_count in NODE_COUNTS {
        let params = GenerationBenchParams { node_count };

        let random = RandomNetwork::with_mean_degree(node_count, MEAN_DEGREE)?;
        group.bench_with_input(
            BenchmarkId::new("erdos_renyi", &params),
            &random,
            |b, model| {
                b.iter(|| model.generate(BENCH_SEED));
            },
        );

        let scale_free = ScaleFreeNetwork::with_mean_degree(node_count, MEAN_DEGREE)?;
        group.bench_with_input(
            BenchmarkId::new("barabasi_albert", &params),
            &scale_free,
            |b, model| {
                b.iter(|| model.generate(BENCH_SEED));
            },
        );
    }

    group.finish();
    Ok(())
}

fn generation(c: &mut Criterion) {
    if let Err(err) = generation_impl(c) {
        panic!("generation benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generation);
criterion_main!(benches);
