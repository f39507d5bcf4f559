// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WikinetError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Reference dataset is missing required column `{0}`")]
    MissingColumn(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Link source error: {0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{0}` is not in the reference dataset")]
    UnknownPerson(String),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, WikinetError>;

// Allow `?` on std::io::Error by converting to WikinetError::Io with unknown path.
impl From<std::io::Error> for WikinetError {
    fn from(source: std::io::Error) -> Self {
        WikinetError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl WikinetError {
    /// Attaches a path to an I/O failure.
    #[must_use]
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        WikinetError::Io {
            source,
            path: path.into(),
        }
    }
}
