// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Reasons a catalog can be rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("catalog entry #{index} has an empty phrase")]
    EmptyPhrase { index: usize },

    #[error("catalog entry '{phrase}' has an empty category")]
    EmptyCategory { phrase: String },

    #[error("phrase '{phrase}' appears twice in the catalog (entries #{first} and #{second})")]
    DuplicatePhrase {
        phrase: String,
        first: usize,
        second: usize,
    },

    #[error("generic fallback '{phrase}' is empty or repeated")]
    InvalidFallback { phrase: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid ranking config: {0}")]
    Invalid(String),
}
