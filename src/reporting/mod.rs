// src/reporting/mod.rs
//! Output rendering for explorations.

pub mod console;
pub mod json;
pub mod shared;

pub use console::{print_options, print_people, print_scene, Toggles};
pub use json::print_json;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}
