// ⚖️ Verdict Engine - Fuse text and face scores into one decision
// Independent thresholds, ordered failure reasons

use serde::{Deserialize, Serialize};

/// Default minimum aggregate text-match score (percentage scale)
pub const DEFAULT_TEXT_THRESHOLD: f64 = 85.0;

/// Default minimum face similarity (raw cosine scale)
pub const DEFAULT_FACE_THRESHOLD: f64 = 0.6;

// ============================================================================
// FAILURE REASONS
// ============================================================================

/// FailureReason - Why a verification was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    /// Text-match score below the text threshold
    TextMismatch,

    /// Face score below the face threshold, or no face detected.
    /// Both collapse into one reason; callers that need to tell them
    /// apart can inspect the report's face_score option.
    FaceMismatchOrUndetected,
}

impl FailureReason {
    /// Human-readable description for display
    pub fn description(&self) -> &'static str {
        match self {
            FailureReason::TextMismatch => "OCR data mismatch or low similarity",
            FailureReason::FaceMismatchOrUndetected => "Face mismatch or undetected",
        }
    }
}

// ============================================================================
// VERDICT
// ============================================================================

/// Verdict - Terminal accept/reject output of one verification run
///
/// `reasons` is empty iff accepted, and lists failures in a fixed order:
/// TextMismatch first, then FaceMismatchOrUndetected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub accepted: bool,
    pub reasons: Vec<FailureReason>,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}

// ============================================================================
// VERDICT ENGINE
// ============================================================================

/// VerdictEngine - Policy thresholds for the final decision
///
/// Thresholds are tunable per deployment; the defaults match the
/// calibrated production values.
pub struct VerdictEngine {
    /// Text pass condition: aggregate match score >= this (0-100 scale)
    pub text_threshold: f64,

    /// Face pass condition: cosine similarity >= this (raw [-1,1] scale)
    pub face_threshold: f64,
}

impl VerdictEngine {
    /// Create engine with default thresholds
    pub fn new() -> Self {
        VerdictEngine {
            text_threshold: DEFAULT_TEXT_THRESHOLD,
            face_threshold: DEFAULT_FACE_THRESHOLD,
        }
    }

    pub fn with_thresholds(text_threshold: f64, face_threshold: f64) -> Self {
        VerdictEngine {
            text_threshold,
            face_threshold,
        }
    }

    /// Fuse the two signals. Accepted iff both pass; an absent face score
    /// always fails the face condition.
    pub fn decide(&self, text_score: f64, face_score: Option<f64>) -> Verdict {
        let text_pass = text_score >= self.text_threshold;
        let face_pass = matches!(face_score, Some(s) if s >= self.face_threshold);

        let mut reasons = Vec::new();
        if !text_pass {
            reasons.push(FailureReason::TextMismatch);
        }
        if !face_pass {
            reasons.push(FailureReason::FaceMismatchOrUndetected);
        }

        Verdict {
            accepted: text_pass && face_pass,
            reasons,
        }
    }
}

impl Default for VerdictEngine {
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

    #[test]
    fn test_both_signals_pass() {
        let engine = VerdictEngine::new();
        let verdict = engine.decide(90.0, Some(0.7));

        assert!(verdict.accepted);
        assert!(verdict.reasons.is_empty());
    }

    #[test]
    fn test_low_text_score_rejects() {
        let engine = VerdictEngine::new();
        let verdict = engine.decide(80.0, Some(0.7));

        assert!(!verdict.accepted);
        assert_eq!(verdict.reasons, vec![FailureReason::TextMismatch]);
    }

    #[test]
    fn test_undetected_face_rejects() {
        let engine = VerdictEngine::new();
        let verdict = engine.decide(90.0, None);

        assert!(!verdict.accepted);
        assert_eq!(verdict.reasons, vec![FailureReason::FaceMismatchOrUndetected]);
    }

    #[test]
    fn test_low_face_score_rejects() {
        let engine = VerdictEngine::new();
        let verdict = engine.decide(90.0, Some(0.59));

        assert!(!verdict.accepted);
        assert_eq!(verdict.reasons, vec![FailureReason::FaceMismatchOrUndetected]);
    }

    #[test]
    fn test_both_fail_reasons_in_fixed_order() {
        let engine = VerdictEngine::new();
        let verdict = engine.decide(10.0, None);

        assert!(!verdict.accepted);
        assert_eq!(
            verdict.reasons,
            vec![
                FailureReason::TextMismatch,
                FailureReason::FaceMismatchOrUndetected,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let engine = VerdictEngine::new();
        let verdict = engine.decide(85.0, Some(0.6));

        assert!(verdict.accepted);
    }

    #[test]
    fn test_custom_thresholds() {
        let engine = VerdictEngine::with_thresholds(50.0, 0.0);
        let verdict = engine.decide(60.0, Some(0.1));

        assert!(verdict.accepted);
    }

    #[test]
    fn test_reasons_empty_iff_accepted() {
        let engine = VerdictEngine::new();
        let cases = [
            (90.0, Some(0.7)),
            (80.0, Some(0.7)),
            (90.0, Some(0.5)),
            (90.0, None),
            (0.0, None),
        ];

        for (text, face) in cases {
            let verdict = engine.decide(text, face);
            assert_eq!(verdict.accepted, verdict.reasons.is_empty());
        }
    }
}
