// src/dataset/record.rs
use serde::{Deserialize, Serialize};

/// Rendered in place of a missing attribute.
pub const UNKNOWN: &str = "Unknown";

/// One catalogued person. Identity is the exact `name` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Occupation", default)]
    pub occupation: Option<String>,
    #[serde(rename = "Nationality", default)]
    pub nationality: Option<String>,
    #[serde(rename = "Birthdate", default)]
    pub birthdate: Option<String>,
    #[serde(rename = "Prize", default)]
    pub prize: Option<String>,
}

impl PersonRecord {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender: None,
            occupation: None,
            nationality: None,
            birthdate: None,
            prize: None,
        }
    }

    #[must_use]
    pub fn get(&self, attribute: Attribute) -> Option<&str> {
        let value = match attribute {
            Attribute::Gender => &self.gender,
            Attribute::Occupation => &self.occupation,
            Attribute::Nationality => &self.nationality,
            Attribute::Birthdate => &self.birthdate,
            Attribute::Prize => &self.prize,
        };
        value.as_deref()
    }

    /// Attribute value, or [`UNKNOWN`] when absent.
    #[must_use]
    pub fn display(&self, attribute: Attribute) -> &str {
        self.get(attribute).unwrap_or(UNKNOWN)
    }
}

/// Annotating columns of the reference dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Gender,
    Occupation,
    Nationality,
    Birthdate,
    Prize,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Self::Gender,
        Self::Occupation,
        Self::Nationality,
        Self::Birthdate,
        Self::Prize,
    ];

    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Occupation => "Occupation",
            Self::Nationality => "Nationality",
            Self::Birthdate => "Birthdate",
            Self::Prize => "Prize",
        }
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        matches!(self, Self::Gender | Self::Occupation | Self::Nationality)
    }
}
