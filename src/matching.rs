// 🔍 Record Matcher - Score extracted fields against the reference store
// Linear scan, mean of per-field similarities, first-encountered tie-break

use crate::fields::{ExtractedFields, FieldName, ReferenceRecord};
use crate::similarity::field_similarity;
use serde::{Deserialize, Serialize};

// ============================================================================
// MATCH RESULT
// ============================================================================

/// MatchResult - Best-scoring reference record for one verification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Winning record, or None when no candidate scored above zero
    pub record: Option<ReferenceRecord>,

    /// Aggregate score (0.0 - 100.0): mean of the per-field similarities
    pub score: f64,

    /// Per-field breakdown for the winning record
    pub field_scores: Vec<(FieldName, f64)>,
}

impl MatchResult {
    /// Result for an empty store or an all-zero scan
    pub fn no_match() -> Self {
        MatchResult {
            record: None,
            score: 0.0,
            field_scores: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.record.is_some()
    }
}

// ============================================================================
// RECORD MATCHER
// ============================================================================

/// RecordMatcher - Finds the best reference record for a field set
///
/// Every candidate is scored against every field: O(candidates × fields ×
/// edit distance). Fine for stores of hundreds to low thousands of records;
/// for larger stores an exact-IDNumber pre-filter could be layered in front
/// of the scan without changing this contract.
pub struct RecordMatcher;

impl RecordMatcher {
    pub fn new() -> Self {
        RecordMatcher
    }

    /// Aggregate score for one candidate, with the per-field breakdown
    pub fn score_candidate(
        &self,
        extracted: &ExtractedFields,
        candidate: &ReferenceRecord,
    ) -> (f64, Vec<(FieldName, f64)>) {
        let mut field_scores = Vec::with_capacity(FieldName::ALL.len());
        let mut total = 0.0;

        for field in FieldName::ALL {
            let sim = field_similarity(extracted.get(field), candidate.get(field));
            total += sim.score;
            field_scores.push((field, sim.score));
        }

        (total / FieldName::ALL.len() as f64, field_scores)
    }

    /// Scan all candidates and keep the strictly-highest scorer
    ///
    /// Ties go to the first-encountered candidate; callers must preserve
    /// the store's row order. Empty candidate list yields (None, 0.0).
    pub fn find_best_match(
        &self,
        extracted: &ExtractedFields,
        candidates: &[ReferenceRecord],
    ) -> MatchResult {
        let mut best = MatchResult::no_match();

        for candidate in candidates {
            let (score, field_scores) = self.score_candidate(extracted, candidate);
            if score > best.score {
                best = MatchResult {
                    record: Some(candidate.clone()),
                    score,
                    field_scores,
                };
            }
        }

        best
    }
}

impl Default for RecordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
