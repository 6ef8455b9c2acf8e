//! End-to-end robustness scenarios reproducing the error-and-attack
//! behaviour the library exists to demonstrate.

use std::num::NonZeroUsize;

use seine_core::{
    AnalyzerBuilder, MetricKind, NetworkModel, RandomNetwork, RemovalStrategy, RemovalSweep,
    RobustnessReport, ScaleFreeNetwork,
};

fn giant_series(report: &RobustnessReport) -> Vec<(f64, f64)> {
    report
        .series(MetricKind::GiantComponentSize)
        .expect("giant component series is always recorded")
        .samples()
        .iter()
        .map(|sample| (sample.fraction_removed(), sample.value()))
        .collect()
}

#[test]
fn random_failure_on_a_sparse_random_network_matches_percolation_theory() {
    // After removing half of a G(100, 0.05) network, the 50 survivors keep
    // an effective mean degree of 0.05 * 49 ≈ 2.45, for which the giant
    // component should hold roughly 88% of them. The band below is wide
    // enough to absorb finite-size effects at N = 50.
    let model = RandomNetwork::new(100, 0.05).expect("parameters are valid");
    let sweep = RemovalSweep::new(RemovalStrategy::Random)
        .with_fraction_steps(NonZeroUsize::new(3).expect("non-zero"))
        .with_iterations(NonZeroUsize::new(40).expect("non-zero"));
    let report = sweep.run(&model, 20_000);

    let series = report
        .series(MetricKind::GiantComponentSize)
        .expect("giant component series is always recorded");
    let halfway = series.samples()[1];
    assert_eq!(halfway.fraction_removed(), 0.5);
    assert!(
        (35.0..=49.5).contains(&halfway.value()),
        "mean giant component {} strayed from the ~44-node prediction",
        halfway.value()
    );
}

#[test]
fn attack_fragments_a_scale_free_network_where_failure_does_not() {
    // The Fig. 3 divergence: removing the top 5% of hubs shatters the
    // network, removing a random 5% barely dents it.
    let nodes = 500;
    let model = ScaleFreeNetwork::new(nodes, 2, 3).expect("parameters are valid");
    let pristine = model.generate(33);

    let step = nodes / 20;
    let run = |strategy: RemovalStrategy| {
        let analyzer = AnalyzerBuilder::new()
            .with_strategy(strategy)
            .with_step_size(step)
            .build()
            .expect("configuration is valid");
        let mut graph = pristine.clone();
        analyzer.run(&mut graph, 71).expect("run must succeed")
    };

    let attack = run(RemovalStrategy::DegreeAdaptive);
    let failure = run(RemovalStrategy::Random);

    let attacked_giant = giant_series(&attack)[1];
    let failed_giant = giant_series(&failure)[1];
    assert_eq!(attacked_giant.0, 0.05);

    assert!(
        attacked_giant.1 < 0.5 * nodes as f64,
        "attacking 5% of hubs left a giant component of {}",
        attacked_giant.1
    );
    assert!(
        failed_giant.1 > 0.9 * nodes as f64,
        "random 5% failure shrank the giant component to {}",
        failed_giant.1
    );
}

#[test]
fn attack_degrades_the_giant_component_at_least_as_fast_as_failure() {
    let model = ScaleFreeNetwork::new(300, 2, 3).expect("parameters are valid");
    let pristine = model.generate(8);

    let run = |strategy: RemovalStrategy| {
        let analyzer = AnalyzerBuilder::new()
            .with_strategy(strategy)
            .with_step_size(15)
            .build()
            .expect("configuration is valid");
        let mut graph = pristine.clone();
        analyzer.run(&mut graph, 51).expect("run must succeed")
    };

    let attack = giant_series(&run(RemovalStrategy::DegreeAdaptive));
    let failure = giant_series(&run(RemovalStrategy::Random));

    for (&(fraction, attacked), &(_, failed)) in attack.iter().zip(&failure) {
        if fraction > 0.6 {
            break;
        }
        assert!(
            attacked <= failed,
            "at fraction {fraction} the attack ({attacked}) lagged random failure ({failed})"
        );
    }

    // Early in the sequence the gap is strict, not merely non-negative.
    let early = attack
        .iter()
        .zip(&failure)
        .find(|((fraction, _), _)| *fraction >= 0.15)
        .expect("series reach 15% removal");
    assert!(
        early.0.1 < early.1.1,
        "hub removal should open a strict gap by 15% removal"
    );
}

#[test]
fn exhaustive_removal_terminates_with_sentinel_metrics() {
    let model = ScaleFreeNetwork::new(80, 2, 3).expect("parameters are valid");
    let mut graph = model.generate(4);
    let analyzer = AnalyzerBuilder::new()
        .with_strategy(RemovalStrategy::DegreeAdaptive)
        .build()
        .expect("configuration is valid");
    let report = analyzer.run(&mut graph, 0).expect("run must succeed");

    assert!(graph.is_empty());
    let (last_fraction, last_giant) = *giant_series(&report)
        .last()
        .expect("series is non-empty");
    assert_eq!(last_fraction, 1.0);
    assert_eq!(last_giant, 0.0);

    let diameter = report
        .series(MetricKind::Diameter)
        .expect("diameter series is always recorded");
    assert_eq!(diameter.samples().last().map(|s| s.value()), Some(0.0));
}

#[test]
fn clustering_stays_within_the_unit_interval_throughout_analysis() {
    let model = ScaleFreeNetwork::new(120, 3, 4).expect("parameters are valid");
    let mut graph = model.generate(90);
    let initial_nodes = graph.node_count();
    let analyzer = AnalyzerBuilder::new()
        .with_strategy(RemovalStrategy::Random)
        .build()
        .expect("configuration is valid");
    let report = analyzer.run(&mut graph, 12).expect("run must succeed");

    let clustering = report
        .series(MetricKind::MeanClusteringCoefficient)
        .expect("clustering series is always recorded");
    assert!(
        clustering
            .samples()
            .iter()
            .all(|sample| (0.0..=1.0).contains(&sample.value()))
    );

    for (step, snapshot) in report.clustering_snapshots().iter().enumerate() {
        assert_eq!(
            snapshot.histogram().total(),
            initial_nodes - step,
            "histogram must cover exactly the live nodes"
        );
    }
}
