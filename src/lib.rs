// Identity Verification Decision Engine - Core Library
// Exposes all modules for use in the CLI binary and tests

pub mod fields;
pub mod normalizer;
pub mod similarity;
pub mod matching;
pub mod face;
pub mod verdict;
pub mod pipeline;

// Re-export commonly used types
pub use fields::{load_reference_csv, ExtractedFields, FieldName, ReferenceRecord};
pub use normalizer::{CorrectionRule, FieldNormalizer, ID_NOT_FOUND, ID_PATTERN};
pub use similarity::{field_similarity, FieldSimilarity};
pub use matching::{MatchResult, RecordMatcher};
pub use face::{detect_and_score, face_similarity, FaceEmbedder, FaceEmbedding};
pub use verdict::{
    FailureReason, Verdict, VerdictEngine, DEFAULT_FACE_THRESHOLD, DEFAULT_TEXT_THRESHOLD,
};
pub use pipeline::{VerificationPipeline, VerificationReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
