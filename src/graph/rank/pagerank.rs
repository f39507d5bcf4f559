// src/graph/rank/pagerank.rs
//! `PageRank` algorithm implementation for link ranking.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::config::CentralityConfig;

/// Computes `PageRank` scores, indexed like the graph's nodes.
///
/// Mass held by dangling nodes is spread uniformly, so scores sum to 1.
/// An empty graph yields an empty vector.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute<N, E>(graph: &DiGraph<N, E>, config: &CentralityConfig) -> Vec<f64> {
    let count = graph.node_count();
    if count == 0 {
        return Vec::new();
    }

    let n = count as f64;
    let out_degrees = out_degrees(graph);
    let mut ranks = vec![1.0 / n; count];

    for _ in 0..config.max_iterations {
        let next = iterate_once(graph, &ranks, &out_degrees, config.damping, n);
        let delta: f64 = next.iter().zip(&ranks).map(|(a, b)| (a - b).abs()).sum();
        ranks = next;
        if delta < n * config.tolerance {
            break;
        }
    }

    normalize(&mut ranks);
    ranks
}

fn out_degrees<N, E>(graph: &DiGraph<N, E>) -> Vec<usize> {
    graph
        .node_indices()
        .map(|idx| graph.edges_directed(idx, Direction::Outgoing).count())
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once<N, E>(
    graph: &DiGraph<N, E>,
    ranks: &[f64],
    out_degrees: &[usize],
    damping: f64,
    n: f64,
) -> Vec<f64> {
    let dangling: f64 = ranks
        .iter()
        .zip(out_degrees)
        .filter(|&(_, &deg)| deg == 0)
        .map(|(r, _)| r)
        .sum();
    let base = (1.0 - damping) / n + damping * dangling / n;

    graph
        .node_indices()
        .map(|idx| base + damping * compute_incoming_rank(graph, idx, ranks, out_degrees))
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank<N, E>(
    graph: &DiGraph<N, E>,
    target: NodeIndex,
    ranks: &[f64],
    out_degrees: &[usize],
) -> f64 {
    graph
        .neighbors_directed(target, Direction::Incoming)
        .map(|source| {
            let i = source.index();
            ranks[i] / out_degrees[i] as f64
        })
        .sum()
}

fn normalize(ranks: &mut [f64]) {
    let total: f64 = ranks.iter().sum();
    if total > 0.0 {
        for rank in ranks.iter_mut() {
            *rank /= total;
        }
    }
}
