use crate::config::RankingConfig;
use crate::core::catalog::Catalog;
use crate::core::normalize::{normalize, words};
use crate::core::types::{CatalogEntry, ScoredEntry, Suggestion, GENERIC_CATEGORY};
use crate::fuzzy::similarity;
use std::cmp::Reverse;

/// Ranks catalog phrases against free-text queries.
///
/// The engine borrows an immutable [`Catalog`] and keeps no state between
/// calls, so one instance can serve any number of threads.
pub struct SuggestionEngine<'a> {
    catalog: &'a Catalog,
    config: RankingConfig,
}

/// A query folded once per call: the normalized text plus its words.
struct PreparedQuery {
    text: String,
    words: Vec<String>,
}

impl PreparedQuery {
    fn new(raw: &str) -> Self {
        let text = normalize(raw);
        let words = words(&text);
        Self { text, words }
    }
}

impl<'a> SuggestionEngine<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, RankingConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, config: RankingConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Relevance of a single entry for `query`; 0 means no match.
    pub fn score(&self, query: &str, entry: &CatalogEntry) -> u32 {
        let query = PreparedQuery::new(query);
        let phrase = normalize(&entry.phrase);
        let phrase_words = words(&phrase);
        self.score_prepared(&query, &phrase, &phrase_words)
    }

    /// Every entry with a nonzero score, best first. Equal scores keep
    /// catalog order.
    pub fn rank(&self, query: &str) -> Vec<ScoredEntry> {
        if !self.is_long_enough(query) {
            return Vec::new();
        }
        let query = PreparedQuery::new(query);

        let mut scored: Vec<ScoredEntry> = self
            .catalog
            .indexed()
            .iter()
            .filter_map(|indexed| {
                let score = self.score_prepared(&query, &indexed.normalized, &indexed.words);
                if score == 0 {
                    return None;
                }
                log::trace!("'{}' => {} ({})", query.text, indexed.entry.phrase, score);
                Some(ScoredEntry {
                    phrase: indexed.entry.phrase.clone(),
                    category: indexed.entry.category.clone(),
                    score,
                })
            })
            .collect();

        // Stable: ties must stay in declaration order.
        scored.sort_by_key(|entry| Reverse(entry.score));
        scored
    }

    /// Up to `limit` suggestions for `query`: scored matches first, then the
    /// rest of the best match's category, then generic fallbacks.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<Suggestion> {
        if !self.is_long_enough(query) {
            return Vec::new();
        }

        let ranked = self.rank(query);
        let best_category = ranked.first().map(|best| best.category.clone());
        let mut results: Vec<Suggestion> = ranked
            .into_iter()
            .take(limit)
            .map(Suggestion::from)
            .collect();
        let primary = results.len();

        if let Some(category) = best_category {
            for entry in self.catalog.entries_in_category(&category) {
                if results.len() >= limit {
                    break;
                }
                if !contains_phrase(&results, &entry.phrase) {
                    results.push(Suggestion::from(entry));
                }
            }
        }
        let from_category = results.len() - primary;

        for phrase in self.catalog.fallbacks() {
            if results.len() >= self.config.generic_floor {
                break;
            }
            if !contains_phrase(&results, phrase) {
                results.push(Suggestion {
                    phrase: phrase.clone(),
                    category: GENERIC_CATEGORY.to_string(),
                });
            }
        }

        results.truncate(limit);
        log::debug!(
            "suggest('{}', {}): {} scored, {} from category, {} returned",
            query,
            limit,
            primary,
            from_category,
            results.len()
        );
        results
    }

    /// [`suggest`](Self::suggest) with the configured default limit.
    pub fn suggest_default(&self, query: &str) -> Vec<Suggestion> {
        self.suggest(query, self.config.default_limit)
    }

    fn is_long_enough(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_query_chars
    }

    fn score_prepared(&self, query: &PreparedQuery, phrase: &str, phrase_words: &[String]) -> u32 {
        // A query made only of marks or spaces carries no signal.
        if query.text.is_empty() {
            return 0;
        }
        let cfg = &self.config;
        // Saturates so oversized weights cap the score instead of overflowing.
        let mut score: u32 = 0;

        if phrase.starts_with(&query.text) {
            score = score.saturating_add(cfg.prefix_weight);
        }
        if phrase.contains(&query.text) {
            score = score.saturating_add(cfg.substring_weight);
        }

        for word in &query.words {
            if word.chars().count() < cfg.min_query_word_chars {
                continue;
            }
            if phrase_words.iter().any(|pw| pw.starts_with(word.as_str())) {
                score = score.saturating_add(cfg.word_prefix_weight);
            }
            if phrase.contains(word.as_str()) {
                score = score.saturating_add(cfg.word_contains_weight);
            }
            for pw in phrase_words {
                if pw.chars().count() < cfg.min_fuzzy_word_chars {
                    continue;
                }
                let sim = similarity(word, pw);
                if sim >= cfg.fuzzy_threshold {
                    score = score.saturating_add((sim * f64::from(cfg.fuzzy_weight)).round() as u32);
                }
            }
        }

        score
    }
}

fn contains_phrase(results: &[Suggestion], phrase: &str) -> bool {
    results.iter().any(|s| s.phrase == phrase)
}
