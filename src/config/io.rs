// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::Config;
use crate::error::{Result, WikinetError};

pub const CONFIG_FILE: &str = "wikinet.toml";

/// Reads `path` if it exists; a missing file yields defaults.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_toml_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path).map_err(|e| WikinetError::io(e, path))?;
    parse_toml(&content)
}

/// Parses config text.
///
/// # Errors
/// Returns error on malformed TOML or mistyped keys.
pub fn parse_toml(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}
