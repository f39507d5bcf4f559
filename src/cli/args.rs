use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::dataset::AttributeFilter;
use crate::graph::classify::ClassifyMode;
use crate::graph::layout::Dimensions;
use crate::reporting::OutputFormat;

#[derive(Parser)]
#[command(name = "wikinet", version, about = "Wikipedia person network explorer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Config file (defaults to ./wikinet.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Reference dataset CSV, overriding the config
    #[arg(long, global = true, value_name = "FILE")]
    pub dataset: Option<PathBuf>,
    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build and rank the link network around a person
    Explore(ExploreArgs),
    /// List people in the reference dataset
    People(PeopleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExploreArgs {
    /// Focal person (exact page title)
    pub person: String,
    /// Maximum outgoing links to explore
    #[arg(long, value_name = "N")]
    pub max_links: Option<usize>,
    #[arg(long, value_enum)]
    pub mode: Option<ClassifyMode>,
    #[arg(long, value_enum)]
    pub dims: Option<Dimensions>,
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long = "gender", value_name = "GENDER")]
    pub genders: Vec<String>,
    #[arg(long = "occupation", value_name = "OCCUPATION")]
    pub occupations: Vec<String>,
    #[arg(long = "nationality", value_name = "NATIONALITY")]
    pub nationalities: Vec<String>,
    /// Look back-links up concurrently
    #[arg(long)]
    pub parallel: bool,
    /// Read links from a JSON file instead of Wikipedia
    #[arg(long, value_name = "FILE")]
    pub links_file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Terminal)]
    pub format: OutputFormat,
    #[arg(long)]
    pub show_incoming: bool,
    #[arg(long)]
    pub show_outgoing: bool,
}

impl ExploreArgs {
    #[must_use]
    pub fn filter(&self) -> AttributeFilter {
        AttributeFilter {
            genders: self.genders.clone(),
            occupations: self.occupations.clone(),
            nationalities: self.nationalities.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct PeopleArgs {
    /// Only names matching this regular expression
    #[arg(long, value_name = "REGEX")]
    pub matching: Option<String>,
    #[arg(long = "gender", value_name = "GENDER")]
    pub genders: Vec<String>,
    /// List the filter values per attribute instead of names
    #[arg(long)]
    pub values: bool,
}
