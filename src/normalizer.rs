// 🧹 Field Normalizer - Repair systematic OCR misreads
// Ordered literal corrections + canonical identifier extraction

use crate::fields::ExtractedFields;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Identifier pattern: six digits, hyphen, two digits, hyphen, four digits
pub const ID_PATTERN: &str = r"\d{6}-\d{2}-\d{4}";

/// Sentinel written into the identifier field when no pattern match exists.
/// A valid, expected output, not an error.
pub const ID_NOT_FOUND: &str = "Not Found";

// ============================================================================
// CORRECTION RULES
// ============================================================================

/// CorrectionRule - One literal substring correction for a known OCR misread
///
/// Rules are applied in list order, each as a single left-to-right replace
/// pass. No fixed-point iteration: a rule's output is not re-scanned by the
/// same rule, but IS visible to later rules. Overlapping rules can therefore
/// cascade (e.g. "LAY" re-firing inside an already-corrected "MALAYSIA").
/// That cascade matches the deployed correction table and is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionRule {
    /// Known-bad OCR substring
    pub wrong: String,

    /// Replacement text
    pub correct: String,
}

impl CorrectionRule {
    pub fn new(wrong: &str, correct: &str) -> Self {
        CorrectionRule {
            wrong: wrong.to_string(),
            correct: correct.to_string(),
        }
    }

    /// Apply this rule to one string: single left-to-right replace pass
    pub fn apply(&self, text: &str) -> String {
        text.replace(&self.wrong, &self.correct)
    }
}

/// Default correction table for Malaysian identity card headers
fn default_rules() -> Vec<CorrectionRule> {
    vec![
        CorrectionRule::new("KAN", "KAD"),
        CorrectionRule::new("PENGENAI", "PENGENALAN"),
        CorrectionRule::new("MEAN", "MALAYSIA"),
        CorrectionRule::new("LAY", "MALAYSIA"),
        CorrectionRule::new("NTIFV", "IDENTITY"),
        CorrectionRule::new("Cari", "CARD"),
    ]
}

// ============================================================================
// FIELD NORMALIZER
// ============================================================================

/// FieldNormalizer - Rewrites raw OCR fields into their canonical form
///
/// Three passes:
/// 1. Ordered correction rules over every field
/// 2. Embedded line breaks in Address collapsed to single spaces
/// 3. Identifier extraction from IDNumber (or the "Not Found" sentinel)
pub struct FieldNormalizer {
    rules: Vec<CorrectionRule>,
    id_pattern: Regex,
}

impl FieldNormalizer {
    /// Create a normalizer with the default correction table
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a normalizer with an explicit, ordered rule list
    pub fn with_rules(rules: Vec<CorrectionRule>) -> Self {
        FieldNormalizer {
            rules,
            // Pattern is a compile-time constant; failure is a defect
            id_pattern: Regex::new(ID_PATTERN).expect("identifier pattern is valid"),
        }
    }

    /// The active correction rules, in application order
    pub fn rules(&self) -> &[CorrectionRule] {
        &self.rules
    }

    /// Normalize all four fields. Pure; no I/O.
    pub fn normalize(&self, raw: ExtractedFields) -> ExtractedFields {
        let mut fields = ExtractedFields {
            title: self.correct(&raw.title),
            id_number: self.correct(&raw.id_number),
            name: self.correct(&raw.name),
            address: self.correct(&raw.address),
        };

        // Address can span multiple OCR lines
        fields.address = fields.address.replace('\n', " ");

        fields.id_number = self.extract_identifier(&fields.id_number);

        fields
    }

    /// Run the full rule list over one string, in order
    fn correct(&self, text: &str) -> String {
        let mut value = text.to_string();
        for rule in &self.rules {
            value = rule.apply(&value);
        }
        value
    }

    /// First identifier-pattern match, or the sentinel
    fn extract_identifier(&self, text: &str) -> String {
        match self.id_pattern.find(text) {
            Some(m) => m.as_str().to_string(),
            None => ID_NOT_FOUND.to_string(),
        }
    }
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(title: &str, id_number: &str, name: &str, address: &str) -> ExtractedFields {
        ExtractedFields::new(title, id_number, name, address)
    }

    #[test]
    fn test_rule_applies_single_pass() {
        let rule = CorrectionRule::new("KAN", "KAD");

        assert_eq!(rule.apply("KAN PENGENALAN"), "KAD PENGENALAN");
        // Every occurrence in one left-to-right pass
        assert_eq!(rule.apply("KAN KAN"), "KAD KAD");
        // Output is not re-scanned by the same rule
        assert_eq!(CorrectionRule::new("AB", "AAB").apply("AB"), "AAB");
    }

    #[test]
    fn test_default_rules_in_isolation() {
        let cases = [
            ("KAN", "KAD"),
            ("PENGENAI", "PENGENALAN"),
            ("MEAN", "MALAYSIA"),
            ("LAY", "MALAYSIA"),
            ("NTIFV", "IDENTITY"),
            ("Cari", "CARD"),
        ];

        let normalizer = FieldNormalizer::new();
        for (i, (wrong, correct)) in cases.iter().enumerate() {
            let rule = &normalizer.rules()[i];
            assert_eq!(rule.wrong, *wrong);
            assert_eq!(rule.apply(wrong), *correct);
        }
    }

    #[test]
    fn test_overlapping_rules_cascade() {
        // "MEAN" -> "MALAYSIA", then the later "LAY" rule re-fires inside
        // the corrected word. Deployed behavior, deliberately preserved.
        let normalizer = FieldNormalizer::new();
        let fields = normalizer.normalize(raw("MEAN", "", "", ""));

        assert_eq!(fields.title, "MAMALAYSIASIA");
    }

    #[test]
    fn test_title_header_repair() {
        let normalizer = FieldNormalizer::new();
        let fields = normalizer.normalize(raw("KAN PENGENAI", "", "", ""));

        assert_eq!(fields.title, "KAD PENGENALAN");
    }

    #[test]
    fn test_address_line_breaks_collapse() {
        let normalizer = FieldNormalizer::new();
        let fields = normalizer.normalize(raw("", "", "", "12 JALAN AMPANG\nKUALA LUMPUR"));

        assert_eq!(fields.address, "12 JALAN AMPANG KUALA LUMPUR");
    }

    #[test]
    fn test_identifier_extracted_from_surrounding_text() {
        let normalizer = FieldNormalizer::new();
        let fields = normalizer.normalize(raw("", "123456-78-9012 extra", "", ""));

        assert_eq!(fields.id_number, "123456-78-9012");
    }

    #[test]
    fn test_identifier_sentinel_when_absent() {
        let normalizer = FieldNormalizer::new();
        let fields = normalizer.normalize(raw("", "no digits here", "", ""));

        assert_eq!(fields.id_number, ID_NOT_FOUND);
    }

    #[test]
    fn test_first_identifier_wins() {
        let normalizer = FieldNormalizer::new();
        let fields = normalizer.normalize(raw("", "880101-14-5566 990202-10-1122", "", ""));

        assert_eq!(fields.id_number, "880101-14-5566");
    }

    #[test]
    fn test_custom_rule_list() {
        let normalizer = FieldNormalizer::with_rules(vec![CorrectionRule::new("0", "O")]);
        let fields = normalizer.normalize(raw("C0UNTRY", "", "", ""));

        assert_eq!(fields.title, "COUNTRY");
    }
}
