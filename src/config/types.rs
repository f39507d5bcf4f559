use serde::{Deserialize, Serialize};

use crate::graph::classify::ClassifyMode;
use crate::graph::layout::Dimensions;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    #[serde(default = "default_max_links")]
    pub max_links: usize,
    #[serde(default)]
    pub classify: ClassifyMode,
    #[serde(default)]
    pub dims: Dimensions,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            max_links: default_max_links(),
            classify: ClassifyMode::default(),
            dims: Dimensions::default(),
            seed: default_seed(),
        }
    }
}

const fn default_max_links() -> usize { 1000 }
const fn default_seed() -> u64 { 42 }

/// Damped random-walk parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CentralityConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Convergence tolerance on the L1 change between iterations.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

const fn default_damping() -> f64 { 0.85 }
const fn default_max_iterations() -> usize { 100 }
const fn default_tolerance() -> f64 { 1e-6 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub parallel_backlinks: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            parallel_backlinks: false,
        }
    }
}

fn default_language() -> String { "en".to_string() }
fn default_user_agent() -> String { "WikiNetworkExplorer/1.0 (https://github.com/junovhs/wikinet)".to_string() }
const fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    #[serde(default = "default_focal_color")]
    pub focal: String,
    #[serde(default = "default_incoming_color")]
    pub incoming: String,
    #[serde(default = "default_outgoing_color")]
    pub outgoing: String,
    #[serde(default = "default_both_color")]
    pub both: String,
    #[serde(default = "default_unrelated_color")]
    pub unrelated: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            focal: default_focal_color(),
            incoming: default_incoming_color(),
            outgoing: default_outgoing_color(),
            both: default_both_color(),
            unrelated: default_unrelated_color(),
        }
    }
}

fn default_focal_color() -> String { "gold".to_string() }
fn default_incoming_color() -> String { "tomato".to_string() }
fn default_outgoing_color() -> String { "skyblue".to_string() }
fn default_both_color() -> String { "mediumpurple".to_string() }
fn default_unrelated_color() -> String { "lightgray".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationConfig {
    #[serde(default = "default_size_scale")]
    pub size_scale: f64,
    #[serde(default = "default_base_size")]
    pub base_size: f64,
    #[serde(default)]
    pub palette: Palette,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            size_scale: default_size_scale(),
            base_size: default_base_size(),
            palette: Palette::default(),
        }
    }
}

const fn default_size_scale() -> f64 { 50.0 }
const fn default_base_size() -> f64 { 5.0 }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: default_dataset_path() }
    }
}

fn default_dataset_path() -> String { "latin_american_intellectuals.csv".to_string() }

/// Top-level shape of `wikinet.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub explore: ExploreConfig,
    #[serde(default)]
    pub centrality: CentralityConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
}
