// src/graph/rank/mod.rs
pub mod pagerank;

use std::collections::HashMap;

use super::link_graph::LinkGraph;
use crate::config::CentralityConfig;

/// Centrality score per node title. Empty for an empty graph.
#[must_use]
pub fn score(graph: &LinkGraph, config: &CentralityConfig) -> HashMap<String, f64> {
    let pg = graph.as_petgraph();
    pagerank::compute(pg, config)
        .into_iter()
        .zip(pg.node_weights())
        .map(|(rank, title)| (title.clone(), rank))
        .collect()
}
