// src/graph/builder.rs
//! Graph construction: outgoing links, back-link detection, restriction.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::classify::{Classifier, ClassifyMode};
use super::link_graph::LinkGraph;
use super::source::LinkSource;
use crate::dataset::{AttributeFilter, ReferenceDataset};

/// What happened when the focal page was looked up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum FocalStatus {
    Found,
    Missing,
    Unreachable(String),
}

/// Result of one build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub graph: LinkGraph,
    pub status: FocalStatus,
    /// Capped outgoing titles, before restriction.
    pub outgoing: Vec<String>,
    /// Surviving titles whose page links back to the focal page.
    pub incoming: Vec<String>,
    /// Back-link lookups that failed and were counted as "no link".
    pub skipped: usize,
}

impl BuildOutcome {
    fn singleton(focal: &str, status: FocalStatus) -> Self {
        Self {
            graph: LinkGraph::new(focal),
            status,
            outgoing: Vec::new(),
            incoming: Vec::new(),
            skipped: 0,
        }
    }
}

/// Builds focal-centered link graphs from a [`LinkSource`].
pub struct GraphBuilder<'a, S: LinkSource + ?Sized> {
    source: &'a S,
    classifier: Classifier<'a>,
    dataset: Option<&'a ReferenceDataset>,
    max_outgoing: usize,
    parallel: bool,
}

impl<'a, S: LinkSource + ?Sized> GraphBuilder<'a, S> {
    #[must_use]
    pub fn new(source: &'a S, classifier: Classifier<'a>, max_outgoing: usize) -> Self {
        Self {
            source,
            classifier,
            dataset: None,
            max_outgoing,
            parallel: false,
        }
    }

    /// Attaches the dataset consulted by attribute filters.
    #[must_use]
    pub fn with_dataset(mut self, dataset: &'a ReferenceDataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Runs back-link lookups on the rayon pool.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the graph around `focal`. Never fails: every error degrades
    /// to a smaller graph.
    #[must_use]
    pub fn build(&self, focal: &str, filter: &AttributeFilter) -> BuildOutcome {
        match self.source.exists(focal) {
            Ok(true) => {}
            Ok(false) => {
                info!(focal, "focal page does not exist");
                return BuildOutcome::singleton(focal, FocalStatus::Missing);
            }
            Err(e) => {
                warn!(focal, error = %e, "focal page lookup failed");
                return BuildOutcome::singleton(focal, FocalStatus::Unreachable(e.to_string()));
            }
        }

        let raw = match self.source.links(focal) {
            Ok(links) => links,
            Err(e) => {
                warn!(focal, error = %e, "focal link lookup failed");
                return BuildOutcome::singleton(focal, FocalStatus::Unreachable(e.to_string()));
            }
        };
        let outgoing = cap_outgoing(raw, focal, self.max_outgoing);

        let mut graph = LinkGraph::new(focal);
        for title in &outgoing {
            graph.add_edge(focal, title);
        }

        let keep = |title: &str| self.keeps(title, filter);
        let candidates: Vec<&String> = outgoing.iter().filter(|t| keep(t.as_str())).collect();
        let checks = self.check_backlinks(&candidates, focal);

        let mut incoming = Vec::new();
        let mut skipped = 0;
        for (title, check) in candidates.iter().zip(checks) {
            match check {
                Some(true) => {
                    graph.add_edge(title.as_str(), focal);
                    incoming.push((*title).clone());
                }
                Some(false) => {}
                None => skipped += 1,
            }
        }

        let graph = graph.retain(keep);
        info!(
            focal,
            outgoing = outgoing.len(),
            incoming = incoming.len(),
            skipped,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );

        BuildOutcome {
            graph,
            status: FocalStatus::Found,
            outgoing,
            incoming,
            skipped,
        }
    }

    fn keeps(&self, title: &str, filter: &AttributeFilter) -> bool {
        self.classifier.is_candidate(title)
            && filter.accepts(self.dataset.and_then(|d| d.get(title)))
    }

    /// `Some(linked)` per candidate, `None` where the lookup failed.
    fn check_backlinks(&self, candidates: &[&String], focal: &str) -> Vec<Option<bool>> {
        if self.parallel {
            candidates
                .par_iter()
                .map(|title| links_back(self.source, title, focal))
                .collect()
        } else {
            candidates
                .iter()
                .map(|title| links_back(self.source, title, focal))
                .collect()
        }
    }
}

fn links_back<S: LinkSource + ?Sized>(source: &S, title: &str, focal: &str) -> Option<bool> {
    match source.links(title) {
        Ok(links) => Some(links.iter().any(|l| l == focal)),
        Err(e) => {
            debug!(title, error = %e, "back-link lookup skipped");
            None
        }
    }
}

/// De-duplicates in first-seen order, drops self links, keeps the first `max`.
fn cap_outgoing(links: Vec<String>, focal: &str, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    links
        .into_iter()
        .filter(|l| l != focal && seen.insert(l.clone()))
        .take(max)
        .collect()
}

/// Builds with default settings and no attribute filter.
#[must_use]
pub fn build<S: LinkSource + ?Sized>(
    focal: &str,
    source: &S,
    max_outgoing: usize,
    known_people: Option<&HashSet<String>>,
    mode: ClassifyMode,
) -> LinkGraph {
    GraphBuilder::new(source, Classifier::new(mode, known_people), max_outgoing)
        .build(focal, &AttributeFilter::default())
        .graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::source::MemorySource;

    fn known(names: &[&str]) -> HashSet<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_cap_outgoing() {
        let links = ["A", "B", "A", "F", "C", "D"].map(String::from).to_vec();
        assert_eq!(cap_outgoing(links.clone(), "F", 3), vec!["A", "B", "C"]);
        assert!(cap_outgoing(links, "F", 0).is_empty());
    }

    #[test]
    fn test_missing_focal() {
        let src = MemorySource::new();
        let g = build("Nobody", &src, 10, None, ClassifyMode::Heuristic);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.focal(), "Nobody");
    }

    #[test]
    fn test_unreachable_focal_degrades() {
        let src = MemorySource::new().with_page("F", ["A"]).with_failure("F");
        let out = GraphBuilder::new(&src, Classifier::Heuristic, 10)
            .build("F", &AttributeFilter::default());
        assert!(matches!(out.status, FocalStatus::Unreachable(_)));
        assert_eq!(out.graph.node_count(), 1);
    }

    #[test]
    fn test_failed_backlink_is_skipped() {
        let people = known(&["A", "B"]);
        let src = MemorySource::new()
            .with_page("F", ["A", "B"])
            .with_page("B", ["F"])
            .with_failure("A");
        let out = GraphBuilder::new(&src, Classifier::Membership(&people), 10)
            .build("F", &AttributeFilter::default());
        assert_eq!(out.skipped, 1);
        assert_eq!(out.incoming, vec!["B"]);
        assert!(out.graph.has_edge("F", "A"));
        assert!(!out.graph.has_edge("A", "F"));
        assert!(out.graph.has_edge("B", "F"));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let people = known(&["A", "B", "C", "D"]);
        let src = MemorySource::new()
            .with_page("F", ["A", "B", "C", "D"])
            .with_page("A", ["F"])
            .with_page("B", ["X"])
            .with_page("C", ["F", "A"])
            .with_page("D", Vec::<String>::new());
        let seq = GraphBuilder::new(&src, Classifier::Membership(&people), 10)
            .build("F", &AttributeFilter::default());
        let par = GraphBuilder::new(&src, Classifier::Membership(&people), 10)
            .parallel(true)
            .build("F", &AttributeFilter::default());
        assert_eq!(seq.incoming, par.incoming);
        assert_eq!(seq.incoming, vec!["A", "C"]);
        assert_eq!(seq.graph.edge_count(), par.graph.edge_count());
    }

    #[test]
    fn test_focal_survives_failing_classifier() {
        let people = known(&["A"]);
        let src = MemorySource::new().with_page("f lowercase", ["A"]);
        let g = build("f lowercase", &src, 10, Some(&people), ClassifyMode::Membership);
        assert!(g.contains("f lowercase"));
        assert!(g.contains("A"));
    }
}
