// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{
    CentralityConfig, Config, DatasetConfig, ExploreConfig, Palette, PresentationConfig,
    SourceConfig,
};

use crate::error::Result;
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `wikinet.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load() -> Result<Self> {
        io::load_toml_config(Path::new(CONFIG_FILE))
    }

    /// Loads config from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_toml_config(path)
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    /// Returns error on malformed TOML.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse_toml(content)
    }
}
