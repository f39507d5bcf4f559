// tests/unit_graph_build.rs
//! Tests for link graph construction, scoring and layout.

use std::collections::HashSet;

use wikinet_core::config::CentralityConfig;
use wikinet_core::graph::{
    build, is_candidate, layout, score, ClassifyMode, Dimensions, LinkGraph, MemorySource,
};

fn known(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_classifier_examples() {
    let h = ClassifyMode::Heuristic;
    assert!(is_candidate("Jorge Luis Borges", None, h));
    assert!(!is_candidate("Borges, Jorge", None, h));
    assert!(!is_candidate("surrealism (art)", None, h));
    assert!(!is_candidate("Paris", None, h));
}

#[test]
fn test_cap_takes_first_links_in_source_order() {
    let src = MemorySource::new()
        .with_page("F", ["Ana María", "Bruno Díaz", "Carla Ruiz"])
        .with_page("Carla Ruiz", ["F"]);
    let g = build("F", &src, 2, None, ClassifyMode::Heuristic);
    assert!(g.contains("Ana María"));
    assert!(g.contains("Bruno Díaz"));
    assert!(!g.contains("Carla Ruiz"));
}

#[test]
fn test_incoming_only_detected_within_cap() {
    let people = known(&["A B", "C D"]);
    let src = MemorySource::new()
        .with_page("F", ["A B"])
        .with_page("A B", ["F"])
        .with_page("C D", ["F"]);
    let g = build("F", &src, 10, Some(&people), ClassifyMode::Membership);
    assert!(g.has_edge("A B", "F"));
    assert!(!g.contains("C D"));
}

#[test]
fn test_focal_missing_yields_singleton() {
    let g = build("Nadie", &MemorySource::new(), 100, None, ClassifyMode::Heuristic);
    assert_eq!(g.node_count(), 1);
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn test_scores_sum_to_one() {
    let people = known(&["A B", "C D", "E G"]);
    let src = MemorySource::new()
        .with_page("F", ["A B", "C D", "E G", "Chile"])
        .with_page("A B", ["F"])
        .with_page("C D", Vec::<String>::new())
        .with_page("E G", ["F", "A B"]);
    let g = build("F", &src, 10, Some(&people), ClassifyMode::Membership);
    let scores = score(&g, &CentralityConfig::default());
    assert_eq!(scores.len(), 4);
    let total: f64 = scores.values().sum();
    assert!((total - 1.0).abs() < 1e-6, "total {total}");
}

#[test]
fn test_layout_reproducible_per_seed() {
    let mut g = LinkGraph::new("F");
    for t in ["A", "B", "C"] {
        g.add_edge("F", t);
    }
    let a = layout(&g, Dimensions::Three, 42);
    let b = layout(&g, Dimensions::Three, 42);
    assert_eq!(a, b);
    assert_eq!(a.len(), 4);
}
