// src/graph/source.rs
//! Page-link retrieval collaborators.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{Result, WikinetError};

/// Retrieves forward links for page titles.
///
/// `links` returns titles in the source's own enumeration order; callers
/// must not assume that order is stable across calls.
pub trait LinkSource: Sync {
    /// Returns true if a page with this title exists.
    ///
    /// # Errors
    /// Returns error if the source could not be reached.
    fn exists(&self, title: &str) -> Result<bool>;

    /// Returns the titles linked from `title`.
    ///
    /// # Errors
    /// Returns error if the page is missing or the source could not be reached.
    fn links(&self, title: &str) -> Result<Vec<String>>;
}

/// A link source held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a page.
    #[must_use]
    pub fn with_page<I, S>(mut self, title: &str, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(title, links);
        self
    }

    pub fn insert<I, S>(&mut self, title: &str, links: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pages
            .insert(title.to_string(), links.into_iter().map(Into::into).collect());
    }

    /// Makes every lookup of `title` fail.
    #[must_use]
    pub fn with_failure(mut self, title: &str) -> Self {
        self.failing.insert(title.to_string());
        self
    }

    /// Loads a JSON object mapping page titles to arrays of linked titles.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not such an object.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| WikinetError::io(e, path))?;
        Self::from_json(&content)
    }

    /// # Errors
    /// Returns error if `content` is not a JSON object of string arrays.
    pub fn from_json(content: &str) -> Result<Self> {
        let pages: HashMap<String, Vec<String>> = serde_json::from_str(content)?;
        Ok(Self {
            pages,
            failing: HashSet::new(),
        })
    }

    fn check(&self, title: &str) -> Result<()> {
        if self.failing.contains(title) {
            return Err(WikinetError::Api(format!("lookup of `{title}` failed")));
        }
        Ok(())
    }
}

impl LinkSource for MemorySource {
    fn exists(&self, title: &str) -> Result<bool> {
        self.check(title)?;
        Ok(self.pages.contains_key(title))
    }

    fn links(&self, title: &str) -> Result<Vec<String>> {
        self.check(title)?;
        self.pages
            .get(title)
            .cloned()
            .ok_or_else(|| WikinetError::Api(format!("page `{title}` does not exist")))
    }
}
