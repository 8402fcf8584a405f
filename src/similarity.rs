// 📏 Field Matcher - Normalized edit-distance similarity
// One extracted field vs one reference field, scored 0-100

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD SIMILARITY
// ============================================================================

/// FieldSimilarity - Result of comparing one field pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSimilarity {
    /// Similarity score (0.0 - 100.0)
    pub score: f64,

    /// True when the strings are identical (edit distance 0)
    pub exact: bool,
}

/// Compare one extracted field against one reference field
///
/// Score = (1 - distance / max(len_extracted, len_reference, 1)) * 100,
/// with the Levenshtein distance over chars. Symmetric and deterministic.
pub fn field_similarity(extracted: &str, reference: &str) -> FieldSimilarity {
    let distance = strsim::levenshtein(extracted, reference);

    // strsim counts edits over chars, so lengths must be char counts too
    let max_len = extracted
        .chars()
        .count()
        .max(reference.chars().count())
        .max(1);

    // Distance never exceeds max_len for valid strings; clamp anyway
    let score = ((1.0 - distance as f64 / max_len as f64) * 100.0).clamp(0.0, 100.0);

    FieldSimilarity {
        score,
        exact: distance == 0,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        for s in ["", "AISHA", "880101-14-5566", "12 JALAN AMPANG"] {
            let sim = field_similarity(s, s);
            assert_eq!(sim.score, 100.0);
            assert!(sim.exact);
        }
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("AISHA", "AISYA"),
            ("kitten", "sitting"),
            ("", "MALAYSIA"),
            ("880101-14-5566", "Not Found"),
        ];

        for (a, b) in pairs {
            assert_eq!(field_similarity(a, b).score, field_similarity(b, a).score);
        }
    }

    #[test]
    fn test_known_distance() {
        // levenshtein("kitten", "sitting") = 3, max_len = 7
        let sim = field_similarity("kitten", "sitting");

        assert!((sim.score - (1.0 - 3.0 / 7.0) * 100.0).abs() < 1e-9);
        assert!(!sim.exact);
    }

    #[test]
    fn test_completely_different_scores_zero() {
        let sim = field_similarity("abc", "xyz");

        assert_eq!(sim.score, 0.0);
        assert!(!sim.exact);
    }

    #[test]
    fn test_empty_vs_nonempty() {
        // distance = len(other), so score is 0
        let sim = field_similarity("", "AISHA");

        assert_eq!(sim.score, 0.0);
        assert!(!sim.exact);
    }

    #[test]
    fn test_multibyte_chars_use_char_counts() {
        // One substitution over two chars, not over byte lengths
        let sim = field_similarity("ña", "na");

        assert_eq!(sim.score, 50.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let cases = [("a", "bcdefgh"), ("aaaa", ""), ("xy", "yx")];

        for (a, b) in cases {
            let sim = field_similarity(a, b);
            assert!((0.0..=100.0).contains(&sim.score));
        }
    }
}
