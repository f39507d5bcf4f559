// src/graph/mod.rs
pub mod builder;
pub mod classify;
pub mod layout;
pub mod link_graph;
pub mod rank;
pub mod source;
pub mod wiki;

pub use builder::{build, BuildOutcome, FocalStatus, GraphBuilder};
pub use classify::{is_candidate, Classifier, ClassifyMode};
pub use layout::{layout, Dimensions, Position};
pub use link_graph::{LinkGraph, NodeRole};
pub use rank::score;
pub use source::{LinkSource, MemorySource};
pub use wiki::WikipediaSource;
