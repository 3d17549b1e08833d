// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Category assigned to entries taken from the generic fallback list.
pub const GENERIC_CATEGORY: &str = "general";

/// One service intent in the catalog, e.g. ("Destapar mi baño", "plomeria").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub phrase: String,
    pub category: String,
}

impl CatalogEntry {
    pub fn new(phrase: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            phrase: phrase.into(),
            category: category.into(),
        }
    }
}

/// A catalog entry together with its relevance for one query.
/// Scores are only comparable within a single ranking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredEntry {
    pub phrase: String,
    pub category: String,
    pub score: u32,
}

/// Public output element of a suggestion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub phrase: String,
    pub category: String,
}

impl From<&CatalogEntry> for Suggestion {
    fn from(entry: &CatalogEntry) -> Self {
        Self {
            phrase: entry.phrase.clone(),
            category: entry.category.clone(),
        }
    }
}

impl From<ScoredEntry> for Suggestion {
    fn from(scored: ScoredEntry) -> Self {
        Self {
            phrase: scored.phrase,
            category: scored.category,
        }
    }
}
