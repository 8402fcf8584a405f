// 🔗 Verification Pipeline - Normalize, match, score, decide in one call
// Mirrors the unified flow: OCR fields + face score -> report with verdict

use crate::face::{detect_and_score, FaceEmbedder};
use crate::fields::{ExtractedFields, FieldName, ReferenceRecord};
use crate::matching::{MatchResult, RecordMatcher};
use crate::normalizer::FieldNormalizer;
use crate::verdict::{Verdict, VerdictEngine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// VERIFICATION REPORT
// ============================================================================

/// VerificationReport - Everything one run produced, verdict included
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Identity of this run (not of the person)
    pub run_id: String,

    /// Fields after normalization
    pub fields: ExtractedFields,

    /// Best reference-store match, or None
    pub best_match: Option<ReferenceRecord>,

    /// Aggregate text-match score (0-100)
    pub text_score: f64,

    /// Per-field breakdown for the winning record
    pub field_scores: Vec<(FieldName, f64)>,

    /// Raw face similarity; None when no face was detected on either side
    pub face_score: Option<f64>,

    /// Final decision with ordered failure reasons
    pub verdict: Verdict,

    pub verified_at: DateTime<Utc>,
}

impl VerificationReport {
    pub fn is_accepted(&self) -> bool {
        self.verdict.accepted
    }

    pub fn summary(&self) -> String {
        let face = match self.face_score {
            Some(s) => format!("{:.2}", s),
            None => "undetected".to_string(),
        };
        format!(
            "Verification {}: text {:.1}%, face {}, {}",
            self.run_id,
            self.text_score,
            face,
            if self.verdict.accepted {
                "ACCEPTED"
            } else {
                "REJECTED"
            }
        )
    }
}

// ============================================================================
// VERIFICATION PIPELINE
// ============================================================================

/// VerificationPipeline - Owns the three decision components
///
/// Each component is pure and stateless, so one pipeline can serve any
/// number of concurrent callers without coordination.
pub struct VerificationPipeline {
    pub normalizer: FieldNormalizer,
    pub matcher: RecordMatcher,
    pub engine: VerdictEngine,
}

impl VerificationPipeline {
    /// Pipeline with default corrections and thresholds
    pub fn new() -> Self {
        VerificationPipeline {
            normalizer: FieldNormalizer::new(),
            matcher: RecordMatcher::new(),
            engine: VerdictEngine::new(),
        }
    }

    /// Run one verification with a pre-computed face score
    pub fn verify(
        &self,
        raw: ExtractedFields,
        candidates: &[ReferenceRecord],
        face_score: Option<f64>,
    ) -> VerificationReport {
        let fields = self.normalizer.normalize(raw);
        let MatchResult {
            record,
            score,
            field_scores,
        } = self.matcher.find_best_match(&fields, candidates);
        let verdict = self.engine.decide(score, face_score);

        VerificationReport {
            run_id: uuid::Uuid::new_v4().to_string(),
            fields,
            best_match: record,
            text_score: score,
            field_scores,
            face_score,
            verdict,
            verified_at: Utc::now(),
        }
    }

    /// Run one verification from raw images, using the embedder collaborator
    /// for the face channel
    pub fn verify_with_images(
        &self,
        raw: ExtractedFields,
        candidates: &[ReferenceRecord],
        document_photo: &[u8],
        selfie: &[u8],
        embedder: &dyn FaceEmbedder,
    ) -> VerificationReport {
        let face_score = detect_and_score(document_photo, selfie, embedder);
        self.verify(raw, candidates, face_score)
    }
}

impl Default for VerificationPipeline {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
