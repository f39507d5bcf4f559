pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod explore;
pub mod graph;
pub mod present;
pub mod reporting;
