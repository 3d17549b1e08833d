// --- File: src/core/catalog.rs
use crate::core::normalize::{normalize, words};
use crate::core::types::CatalogEntry;
use crate::error::CatalogError;
use std::collections::{HashMap, HashSet};

/// A catalog entry with its comparison forms computed once up front.
#[derive(Debug, Clone)]
pub(crate) struct IndexedEntry {
    pub entry: CatalogEntry,
    pub normalized: String,
    pub words: Vec<String>,
}

impl IndexedEntry {
    fn new(entry: CatalogEntry) -> Self {
        let normalized = normalize(&entry.phrase);
        let words = words(&normalized);
        Self {
            entry,
            normalized,
            words,
        }
    }
}

/// The immutable, ordered set of service intents the engine ranks.
///
/// Declaration order is significant: it breaks ties between equal scores and
/// drives the order of category backfill. Phrases are unique; that is checked
/// here once instead of on every ranking call.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<IndexedEntry>,
    fallbacks: Vec<String>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>, fallbacks: Vec<String>) -> Result<Self, CatalogError> {
        {
            let mut seen: HashMap<&str, usize> = HashMap::new();
            for (index, entry) in entries.iter().enumerate() {
                if entry.phrase.trim().is_empty() {
                    return Err(CatalogError::EmptyPhrase { index });
                }
                if entry.category.trim().is_empty() {
                    return Err(CatalogError::EmptyCategory {
                        phrase: entry.phrase.clone(),
                    });
                }
                if let Some(&first) = seen.get(entry.phrase.as_str()) {
                    return Err(CatalogError::DuplicatePhrase {
                        phrase: entry.phrase.clone(),
                        first,
                        second: index,
                    });
                }
                seen.insert(&entry.phrase, index);
            }
        }

        for (i, phrase) in fallbacks.iter().enumerate() {
            if phrase.trim().is_empty() || fallbacks[..i].contains(phrase) {
                return Err(CatalogError::InvalidFallback {
                    phrase: phrase.clone(),
                });
            }
        }

        let catalog = Self {
            entries: entries.into_iter().map(IndexedEntry::new).collect(),
            fallbacks,
        };
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Catalog built: {} entries in {} categories, {} generic fallbacks",
                catalog.len(),
                catalog.categories().len(),
                catalog.fallbacks.len()
            );
        }
        Ok(catalog)
    }

    /// A catalog with no entries; only the generic fallbacks can ever surface.
    pub fn empty_with_fallbacks(fallbacks: Vec<String>) -> Result<Self, CatalogError> {
        Self::new(Vec::new(), fallbacks)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().map(|indexed| &indexed.entry)
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.entries
            .iter()
            .map(|indexed| indexed.entry.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    pub fn entries_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a CatalogEntry> + 'a {
        self.entries().filter(move |entry| entry.category == category)
    }

    pub(crate) fn indexed(&self) -> &[IndexedEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(phrase: &str, category: &str) -> CatalogEntry {
        CatalogEntry::new(phrase, category)
    }

    #[test]
    fn precomputes_comparison_forms() {
        let catalog = Catalog::new(vec![entry("Reparar Tubería ", "plomeria")], vec![]).unwrap();
        let indexed = &catalog.indexed()[0];
        assert_eq!(indexed.normalized, "reparar tuberia");
        assert_eq!(indexed.words, vec!["reparar", "tuberia"]);
        assert_eq!(indexed.entry.phrase, "Reparar Tubería ");
    }

    #[test]
    fn rejects_duplicate_phrase() {
        let err = Catalog::new(
            vec![
                entry("Pintar fachada", "pintura"),
                entry("Instalar apagador", "electricidad"),
                entry("Pintar fachada", "albanileria"),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicatePhrase {
                phrase: "Pintar fachada".to_string(),
                first: 0,
                second: 2,
            }
        );
    }

    #[test]
    fn rejects_blank_fields() {
        assert_eq!(
            Catalog::new(vec![entry("  ", "pintura")], vec![]).unwrap_err(),
            CatalogError::EmptyPhrase { index: 0 }
        );
        assert!(matches!(
            Catalog::new(vec![entry("Pintar reja", "")], vec![]),
            Err(CatalogError::EmptyCategory { .. })
        ));
        assert!(matches!(
            Catalog::new(vec![], vec!["Ayuda".into(), "Ayuda".into()]),
            Err(CatalogError::InvalidFallback { .. })
        ));
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let catalog = Catalog::new(
            vec![
                entry("Pintar reja", "pintura"),
                entry("Cambiar chapa", "cerrajeria"),
                entry("Pintar puerta", "pintura"),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.categories(), vec!["pintura", "cerrajeria"]);
        let painting: Vec<&str> = catalog
            .entries_in_category("pintura")
            .map(|e| e.phrase.as_str())
            .collect();
        assert_eq!(painting, vec!["Pintar reja", "Pintar puerta"]);
    }

    #[test]
    fn categories_are_distinct_with_interleaving() {
        let catalog = Catalog::new(
            vec![
                entry("Cortar pasto", "jardineria"),
                entry("Pintar reja", "pintura"),
                entry("Podar árboles", "jardineria"),
                entry("Cambiar chapa", "cerrajeria"),
                entry("Pintar puerta", "pintura"),
            ],
            vec![],
        )
        .unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["jardineria", "pintura", "cerrajeria"]
        );
    }
}
