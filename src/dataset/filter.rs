// src/dataset/filter.rs
//! Multi-select attribute filters applied to graph nodes.

use serde::{Deserialize, Serialize};

use super::record::{Attribute, PersonRecord};

/// Selected values per attribute. An empty list places no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeFilter {
    #[serde(default)]
    pub genders: Vec<String>,
    #[serde(default)]
    pub occupations: Vec<String>,
    #[serde(default)]
    pub nationalities: Vec<String>,
}

impl AttributeFilter {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !(self.genders.is_empty() && self.occupations.is_empty() && self.nationalities.is_empty())
    }

    /// Returns true if `record` satisfies every non-empty selection.
    /// A node without a record only passes an inactive filter.
    #[must_use]
    pub fn accepts(&self, record: Option<&PersonRecord>) -> bool {
        if !self.is_active() {
            return true;
        }
        let Some(record) = record else {
            return false;
        };
        selected(&self.genders, record.get(Attribute::Gender))
            && selected(&self.occupations, record.get(Attribute::Occupation))
            && selected(&self.nationalities, record.get(Attribute::Nationality))
    }
}

fn selected(choices: &[String], value: Option<&str>) -> bool {
    if choices.is_empty() {
        return true;
    }
    value.is_some_and(|v| choices.iter().any(|c| c == v))
}
