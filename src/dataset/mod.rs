// src/dataset/mod.rs
//! The curated reference dataset of known people.
//!
//! Loaded once, then shared read-only with the graph builder and the
//! presentation adapter.

pub mod filter;
pub mod record;

pub use filter::AttributeFilter;
pub use record::{Attribute, PersonRecord, UNKNOWN};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, WikinetError};

/// Read-only handle over the reference dataset.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    records: Vec<PersonRecord>,
    index: HashMap<String, usize>,
    known: HashSet<String>,
    duplicates: usize,
}

impl ReferenceDataset {
    /// Loads a headered CSV file.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened, is malformed, or lacks
    /// a required column.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| WikinetError::io(e, path))?;
        let dataset = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            people = dataset.len(),
            duplicates = dataset.duplicates,
            "reference dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses CSV from any reader.
    ///
    /// # Errors
    /// Returns error on malformed CSV or a missing required column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        check_columns(reader.headers()?)?;

        let mut rows = Vec::new();
        for result in reader.deserialize::<PersonRecord>() {
            rows.push(result?);
        }
        Ok(Self::from_records(rows))
    }

    /// Builds the dataset from records in file order. Empty names are
    /// dropped; for duplicate names the first occurrence wins.
    #[must_use]
    pub fn from_records(rows: impl IntoIterator<Item = PersonRecord>) -> Self {
        let mut dataset = Self::default();
        for row in rows {
            if row.name.is_empty() {
                continue;
            }
            if dataset.index.contains_key(&row.name) {
                warn!(name = %row.name, "duplicate name in reference dataset, keeping first");
                dataset.duplicates += 1;
                continue;
            }
            dataset.index.insert(row.name.clone(), dataset.records.len());
            dataset.known.insert(row.name.clone());
            dataset.records.push(row);
        }
        dataset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of rows dropped because their name was already present.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PersonRecord> {
        self.index.get(name).map(|&i| &self.records[i])
    }

    /// The set of catalogued names, for membership classification.
    #[must_use]
    pub fn known_people(&self) -> &HashSet<String> {
        &self.known
    }

    /// All names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Distinct non-empty values of `attribute` with their counts, sorted by value.
    #[must_use]
    pub fn distinct(&self, attribute: Attribute) -> BTreeMap<&str, usize> {
        let mut values = BTreeMap::new();
        for value in self.records.iter().filter_map(|r| r.get(attribute)) {
            *values.entry(value).or_default() += 1;
        }
        values
    }
}

fn check_columns(headers: &csv::StringRecord) -> Result<()> {
    let present: HashSet<&str> = headers.iter().collect();
    if !present.contains("Name") {
        return Err(WikinetError::MissingColumn("Name".into()));
    }
    for attribute in Attribute::ALL.into_iter().filter(|a| a.is_required()) {
        if !present.contains(attribute.column()) {
            return Err(WikinetError::MissingColumn(attribute.column().into()));
        }
    }
    Ok(())
}
