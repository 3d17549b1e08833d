// File: src/core/normalize.rs
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds text into its comparison form: lower-cased, canonically decomposed
/// with every combining mark dropped, and trimmed.
///
/// "  Destapar mi BAÑO " => "destapar mi bano"
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Splits an already normalized string into whitespace-separated words.
pub fn words(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Lávabo"), "lavabo");
        assert_eq!(normalize("TUBERÍA"), "tuberia");
        assert_eq!(normalize("Destapar mi baño"), "destapar mi bano");
        assert_eq!(normalize("pingüino"), "pinguino");
    }

    #[test]
    fn trims_but_keeps_inner_spacing() {
        assert_eq!(normalize("  pintar   casa \t"), "pintar   casa");
        assert_eq!(words("pintar   casa"), vec!["pintar", "casa"]);
    }

    #[test]
    fn total_on_odd_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\u{0301}\u{0301}"), "");
        assert_eq!(normalize("水道"), "水道");
    }
}
