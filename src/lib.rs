// src/lib.rs
//! Search-suggestion ranking for service intents.
//!
//! A [`Catalog`] of short phrases is ranked against free-text queries by a
//! [`SuggestionEngine`]: exact prefix and substring matches first, then
//! per-word prefix, containment and typo-tolerant (edit distance) matches,
//! with same-category and generic backfill when matches are sparse.

pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;

pub use crate::config::RankingConfig;
pub use crate::core::catalog::Catalog;
pub use crate::core::engine::SuggestionEngine;
pub use crate::core::normalize::normalize;
pub use crate::core::types::{CatalogEntry, ScoredEntry, Suggestion, GENERIC_CATEGORY};
pub use crate::error::{CatalogError, ConfigError};
pub use crate::fuzzy::{levenshtein, similarity};
