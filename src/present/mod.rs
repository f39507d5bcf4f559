// src/present/mod.rs
//! Maps graph, scores and dataset attributes into renderable records.
//!
//! Nothing here draws; a [`Scene`] is the data a plotting front end
//! consumes.

pub mod table;

pub use table::{adjacency_matrix, distributions, metrics_table, Distribution, MetricsRow};

use std::collections::HashMap;

use serde::Serialize;

use crate::config::{Palette, PresentationConfig};
use crate::dataset::{Attribute, ReferenceDataset};
use crate::graph::builder::{BuildOutcome, FocalStatus};
use crate::graph::layout::Position;
use crate::graph::link_graph::{LinkGraph, NodeRole};

/// One drawable node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub label: String,
    pub role: NodeRole,
    pub size: f64,
    pub color: String,
    pub tooltip: String,
    pub position: Position,
}

/// One drawable edge, as a segment between node positions.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    pub source: String,
    pub target: String,
    pub from: Position,
    pub to: Position,
}

/// User-visible state of an exploration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum Notice {
    NotFound(String),
    Unreachable(String),
    NoData(String),
    Success(String),
}

impl Notice {
    /// Picks the notice for a build. A graph holding only the focal node
    /// has nothing to show.
    #[must_use]
    pub fn for_outcome(outcome: &BuildOutcome) -> Self {
        let graph = &outcome.graph;
        match &outcome.status {
            FocalStatus::Missing => {
                Self::NotFound(format!("No Wikipedia page found for {}.", graph.focal()))
            }
            FocalStatus::Unreachable(reason) => {
                Self::Unreachable(format!("Could not reach the link source: {reason}"))
            }
            FocalStatus::Found if graph.node_count() <= 1 => Self::NoData(
                "No nodes available after filtering. Try changing filters or person.".into(),
            ),
            FocalStatus::Found => Self::Success(format!(
                "Graph has {} nodes and {} edges.",
                graph.node_count(),
                graph.edge_count()
            )),
        }
    }

    #[must_use]
    pub fn has_data(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Everything a front end needs to render one exploration.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub title: String,
    pub status: FocalStatus,
    pub notice: Notice,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub table: Vec<MetricsRow>,
    pub distributions: Vec<Distribution>,
    /// Row and column order of `adjacency`.
    pub matrix_order: Vec<String>,
    pub adjacency: Vec<Vec<u8>>,
    pub incoming: Vec<String>,
    pub outgoing: Vec<String>,
}

/// Builds the scene for a finished build.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn render(
    outcome: &BuildOutcome,
    scores: &HashMap<String, f64>,
    positions: &HashMap<String, Position>,
    dataset: &ReferenceDataset,
    config: &PresentationConfig,
) -> Scene {
    let graph = &outcome.graph;
    let table = metrics_table(graph, scores, dataset);
    let matrix_order: Vec<String> = table.iter().map(|r| r.name.clone()).collect();
    let adjacency = adjacency_matrix(graph, &matrix_order);

    Scene {
        title: format!("Wikipedia Network: {}", graph.focal()),
        status: outcome.status.clone(),
        notice: Notice::for_outcome(outcome),
        nodes: node_views(graph, scores, positions, dataset, config),
        edges: edge_views(graph, positions),
        distributions: distributions(&table),
        table,
        matrix_order,
        adjacency,
        incoming: outcome.incoming.clone(),
        outgoing: outcome.outgoing.clone(),
    }
}

fn node_views(
    graph: &LinkGraph,
    scores: &HashMap<String, f64>,
    positions: &HashMap<String, Position>,
    dataset: &ReferenceDataset,
    config: &PresentationConfig,
) -> Vec<NodeView> {
    graph
        .nodes()
        .filter_map(|title| {
            let role = graph.role(title)?;
            let position = *positions.get(title)?;
            let score = scores.get(title).copied().unwrap_or(0.0);
            Some(NodeView {
                label: title.to_string(),
                role,
                size: score * config.size_scale + config.base_size,
                color: color_for(role, &config.palette).to_string(),
                tooltip: tooltip(title, score, dataset),
                position,
            })
        })
        .collect()
}

fn edge_views(graph: &LinkGraph, positions: &HashMap<String, Position>) -> Vec<EdgeView> {
    graph
        .edges()
        .filter_map(|(a, b)| {
            Some(EdgeView {
                source: a.to_string(),
                target: b.to_string(),
                from: *positions.get(a)?,
                to: *positions.get(b)?,
            })
        })
        .collect()
}

#[must_use]
pub fn color_for(role: NodeRole, palette: &Palette) -> &str {
    match role {
        NodeRole::Focal => &palette.focal,
        NodeRole::IncomingOnly => &palette.incoming,
        NodeRole::OutgoingOnly => &palette.outgoing,
        NodeRole::Both => &palette.both,
        NodeRole::Unrelated => &palette.unrelated,
    }
}

fn tooltip(title: &str, score: f64, dataset: &ReferenceDataset) -> String {
    let mut text = format!("{title}<br>PageRank: {score:.4}");
    if let Some(record) = dataset.get(title) {
        for attribute in [Attribute::Gender, Attribute::Occupation, Attribute::Nationality] {
            text.push_str(&format!("<br>{}: {}", attribute.column(), record.display(attribute)));
        }
    }
    text
}
