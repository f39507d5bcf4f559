// src/present/table.rs
//! Tabular views: node metrics, attribute distributions, adjacency.

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::{Attribute, ReferenceDataset};
use crate::graph::link_graph::LinkGraph;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub name: String,
    pub in_degree: usize,
    pub out_degree: usize,
    pub centrality: f64,
    pub gender: String,
    pub occupation: String,
    pub nationality: String,
    pub birthdate: String,
    pub prize: String,
}

/// One row per node, sorted by descending centrality then name.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn metrics_table(
    graph: &LinkGraph,
    scores: &HashMap<String, f64>,
    dataset: &ReferenceDataset,
) -> Vec<MetricsRow> {
    let mut rows: Vec<MetricsRow> = graph
        .nodes()
        .map(|name| {
            let record = dataset.get(name);
            let attr = |a: Attribute| {
                record
                    .map_or(crate::dataset::UNKNOWN, |r| r.display(a))
                    .to_string()
            };
            MetricsRow {
                name: name.to_string(),
                in_degree: graph.in_degree(name),
                out_degree: graph.out_degree(name),
                centrality: scores.get(name).copied().unwrap_or(0.0),
                gender: attr(Attribute::Gender),
                occupation: attr(Attribute::Occupation),
                nationality: attr(Attribute::Nationality),
                birthdate: attr(Attribute::Birthdate),
                prize: attr(Attribute::Prize),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.centrality
            .partial_cmp(&a.centrality)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

/// Value counts for one attribute, largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Distribution {
    pub attribute: Attribute,
    pub counts: Vec<(String, usize)>,
}

/// Gender, occupation and nationality counts over the table's rows.
#[must_use]
pub fn distributions(rows: &[MetricsRow]) -> Vec<Distribution> {
    let columns: [(Attribute, fn(&MetricsRow) -> &str); 3] = [
        (Attribute::Gender, |r| r.gender.as_str()),
        (Attribute::Occupation, |r| r.occupation.as_str()),
        (Attribute::Nationality, |r| r.nationality.as_str()),
    ];
    columns
        .into_iter()
        .map(|(attribute, value)| Distribution {
            attribute,
            counts: count_values(rows.iter().map(value)),
        })
        .collect()
}

fn count_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> =
        counts.into_iter().map(|(v, c)| (v.to_string(), c)).collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// `matrix[i][j]` is 1 when `order[i]` links to `order[j]`.
#[must_use]
pub fn adjacency_matrix(graph: &LinkGraph, order: &[String]) -> Vec<Vec<u8>> {
    order
        .iter()
        .map(|a| order.iter().map(|b| u8::from(graph.has_edge(a, b))).collect())
        .collect()
}
