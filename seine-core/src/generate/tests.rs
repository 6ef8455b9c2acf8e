//! Unit tests for the Erdős–Rényi and Barabási–Albert generators.

use rstest::rstest;

use super::*;
use crate::error::NetworkError;

#[test]
fn random_network_rejects_zero_nodes() {
    let err = RandomNetwork::new(0, 0.5).expect_err("zero nodes must be rejected");
    assert!(matches!(err, NetworkError::InvalidNodeCount { got: 0 }));
}

#[rstest]
#[case::negative(-0.1)]
#[case::above_one(1.1)]
#[case::nan(f64::NAN)]
#[case::infinite(f64::INFINITY)]
fn random_network_rejects_bad_probabilities(#[case] probability: f64) {
    let err = RandomNetwork::new(10, probability).expect_err("probability must be rejected");
    assert!(matches!(err, NetworkError::InvalidEdgeProbability { .. }));
}

#[test]
fn mean_degree_maps_onto_edge_probability() {
    let model = RandomNetwork::with_mean_degree(101, 4.0).expect("parameters are valid");
    assert!((model.probability() - 0.04).abs() < 1e-12);

    let singleton = RandomNetwork::with_mean_degree(1, 4.0).expect("a single node has no pairs");
    assert_eq!(singleton.probability(), 0.0);

    let err = RandomNetwork::with_mean_degree(5, 10.0)
        .expect_err("a mean degree above N - 1 is impossible");
    assert!(matches!(err, NetworkError::InvalidEdgeProbability { .. }));
}

#[rstest]
#[case::one(1)]
#[case::few(7)]
#[case::many(40)]
fn zero_probability_yields_no_edges(#[case] nodes: usize) {
    let model = RandomNetwork::new(nodes, 0.0).expect("parameters are valid");
    let graph = model.generate(99);
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
#[case::one(1)]
#[case::few(7)]
#[case::many(40)]
fn unit_probability_yields_the_complete_graph(#[case] nodes: usize) {
    let model = RandomNetwork::new(nodes, 1.0).expect("parameters are valid");
    let graph = model.generate(99);
    assert_eq!(graph.edge_count(), nodes * (nodes - 1) / 2);
}

#[test]
fn random_generation_is_deterministic_per_seed() {
    let model = RandomNetwork::new(60, 0.08).expect("parameters are valid");
    let first = model.generate(2024);
    let second = model.generate(2024);
    assert_eq!(first, second);

    let other = model.generate(2025);
    assert_ne!(
        first.edges().collect::<Vec<_>>(),
        other.edges().collect::<Vec<_>>()
    );
}

#[rstest]
#[case::zero_nodes(0, 2, 3, NetworkError::InvalidNodeCount { got: 0 })]
#[case::zero_attachments(10, 0, 3, NetworkError::InvalidAttachmentCount { got: 0 })]
#[case::attachments_exceed_seed(
    10,
    4,
    3,
    NetworkError::AttachmentExceedsSeed { attachments: 4, seed_nodes: 3 }
)]
#[case::seed_exceeds_target(
    4,
    2,
    5,
    NetworkError::SeedExceedsTarget { seed_nodes: 5, node_count: 4 }
)]
fn scale_free_network_rejects_inconsistent_parameters(
    #[case] nodes: usize,
    #[case] attachments: usize,
    #[case] seed_nodes: usize,
    #[case] expected: NetworkError,
) {
    let err = ScaleFreeNetwork::new(nodes, attachments, seed_nodes)
        .expect_err("parameters must be rejected");
    assert_eq!(err, expected);
}

#[test]
fn mean_degree_maps_onto_attachments() {
    let model = ScaleFreeNetwork::with_mean_degree(100, 4.0).expect("parameters are valid");
    assert_eq!(model.attachments(), 2);
    assert_eq!(model.seed_nodes(), 3);

    let err =
        ScaleFreeNetwork::with_mean_degree(100, 1.0).expect_err("mean degree below 2 gives m = 0");
    assert!(matches!(err, NetworkError::InvalidAttachmentCount { got: 0 }));
}

#[rstest]
#[case::article_shape(200, 2, 3)]
#[case::clique_heavy(50, 4, 8)]
#[case::minimal_seed(30, 1, 1)]
#[case::seed_is_whole_graph(6, 2, 6)]
fn scale_free_edge_count_matches_the_growth_formula(
    #[case] nodes: usize,
    #[case] attachments: usize,
    #[case] seed_nodes: usize,
) {
    let model =
        ScaleFreeNetwork::new(nodes, attachments, seed_nodes).expect("parameters are valid");
    let graph = model.generate(31);

    let seed_edges = seed_nodes * (seed_nodes - 1) / 2;
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(
        graph.edge_count(),
        seed_edges + attachments * (nodes - seed_nodes)
    );
}

#[test]
fn grown_nodes_attach_at_least_m_edges() {
    let model = ScaleFreeNetwork::new(120, 3, 5).expect("parameters are valid");
    let graph = model.generate(8);

    for node in 5..120 {
        assert!(
            graph.degree(node).expect("node is live") >= 3,
            "node {node} attached fewer than m edges"
        );
    }
}

#[test]
fn scale_free_generation_is_deterministic_per_seed() {
    let model = ScaleFreeNetwork::new(150, 2, 3).expect("parameters are valid");
    assert_eq!(model.generate(5), model.generate(5));
}

#[test]
fn scale_free_graphs_are_simple() {
    let model = ScaleFreeNetwork::new(80, 2, 3).expect("parameters are valid");
    let graph = model.generate(17);

    let edges: Vec<(usize, usize)> = graph.edges().collect();
    let mut deduped = edges.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(edges.len(), deduped.len());
    assert!(edges.iter().all(|&(u, v)| u != v));

    let degree_sum: usize = graph.nodes().filter_map(|n| graph.degree(n)).sum();
    assert_eq!(degree_sum, 2 * graph.edge_count());
}

#[test]
fn hubs_accumulate_degree_under_preferential_attachment() {
    // With preferential attachment the seed-era nodes should end up far
    // better connected than the latest arrivals.
    let model = ScaleFreeNetwork::new(400, 2, 3).expect("parameters are valid");
    let graph = model.generate(12);

    let early_max = (0..10)
        .filter_map(|n| graph.degree(n))
        .max()
        .expect("early nodes are live");
    let late_max = (390..400)
        .filter_map(|n| graph.degree(n))
        .max()
        .expect("late nodes are live");
    assert!(
        early_max > late_max,
        "expected early nodes ({early_max}) to outgrow late arrivals ({late_max})"
    );
}
