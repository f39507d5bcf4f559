// src/explore.rs
//! One user interaction: build, score, lay out, present.

use std::collections::HashMap;

use crate::config::Config;
use crate::dataset::{AttributeFilter, ReferenceDataset};
use crate::error::{Result, WikinetError};
use crate::graph::builder::{BuildOutcome, GraphBuilder};
use crate::graph::classify::{ClassifyMode, Classifier};
use crate::graph::layout::{self, Position};
use crate::graph::rank;
use crate::graph::source::LinkSource;
use crate::present::{self, Scene};

/// Runs explorations against a fixed dataset and configuration.
pub struct Explorer<'a, S: LinkSource + ?Sized> {
    dataset: &'a ReferenceDataset,
    source: &'a S,
    config: &'a Config,
}

/// Everything produced by one exploration. Discarded after rendering.
#[derive(Debug, Clone)]
pub struct Exploration {
    pub outcome: BuildOutcome,
    pub scores: HashMap<String, f64>,
    pub positions: HashMap<String, Position>,
    pub scene: Scene,
}

impl<'a, S: LinkSource + ?Sized> Explorer<'a, S> {
    #[must_use]
    pub fn new(dataset: &'a ReferenceDataset, source: &'a S, config: &'a Config) -> Self {
        Self {
            dataset,
            source,
            config,
        }
    }

    /// Explores the network around `person`.
    ///
    /// # Errors
    /// Returns error if membership mode is active and `person` is not
    /// catalogued. Link-source failures never error; they shrink the graph.
    pub fn explore(&self, person: &str, filter: &AttributeFilter) -> Result<Exploration> {
        let explore = &self.config.explore;
        if explore.classify == ClassifyMode::Membership && !self.dataset.contains(person) {
            return Err(WikinetError::UnknownPerson(person.to_string()));
        }

        let classifier = Classifier::new(explore.classify, Some(self.dataset.known_people()));
        let outcome = GraphBuilder::new(self.source, classifier, explore.max_links)
            .with_dataset(self.dataset)
            .parallel(self.config.source.parallel_backlinks)
            .build(person, filter);

        let scores = rank::score(&outcome.graph, &self.config.centrality);
        let positions = layout::layout(&outcome.graph, explore.dims, explore.seed);
        let scene = present::render(
            &outcome,
            &scores,
            &positions,
            self.dataset,
            &self.config.presentation,
        );

        Ok(Exploration {
            outcome,
            scores,
            positions,
            scene,
        })
    }
}
