//! Duplicate detection for claims
//!
//! Two claims are duplicates when their normalized text matches exactly, or
//! when token-set similarity exceeds the configured threshold. Token-set
//! Jaccard was chosen over edit distance: it is cheap, order-insensitive,
//! and fully deterministic.

use std::collections::BTreeSet;

/// Normalize claim text for comparison: lowercase, whitespace collapsed
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jaccard similarity over normalized token sets, in [0.0, 1.0]
pub fn token_similarity(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<String> = normalize(a)
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect();
    let tokens_b: BTreeSet<String> = normalize(b)
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 1.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a.intersection(&tokens_b).count();
    let union = tokens_a.union(&tokens_b).count();
    intersection as f64 / union as f64
}

/// Whether two claim texts should be considered duplicates
pub fn is_duplicate(a: &str, b: &str, similarity_threshold: f64) -> bool {
    if normalize(a) == normalize(b) {
        return true;
    }
    token_similarity(a, b) >= similarity_threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace_and_case() {
        assert_eq!(
            normalize("  The   System\tCrashes\nUnder Load "),
            "the system crashes under load"
        );
    }

    #[test]
    fn test_exact_normalized_match_is_duplicate() {
        assert!(is_duplicate(
            "The system crashes under load.",
            "the  system CRASHES under load.",
            0.99
        ));
    }

    #[test]
    fn test_near_identical_texts_are_duplicates() {
        // one-word difference over a shared token set
        assert!(is_duplicate(
            "The system crashes under heavy load conditions",
            "The system crashes under heavy load situations",
            0.7
        ));
    }

    #[test]
    fn test_unrelated_texts_are_not_duplicates() {
        assert!(!is_duplicate(
            "The argument equivocates on the word load",
            "Sample size is too small for significance",
            0.7
        ));
    }

    #[test]
    fn test_similarity_bounds() {
        assert_eq!(token_similarity("a b c", "a b c"), 1.0);
        assert_eq!(token_similarity("a b", "c d"), 0.0);
        assert_eq!(token_similarity("", ""), 1.0);
        assert_eq!(token_similarity("a", ""), 0.0);
    }

    #[test]
    fn test_punctuation_ignored() {
        assert!(token_similarity("crashes, under load!", "crashes under load") > 0.99);
    }
}
