// 🧑 Face Similarity Scorer - Cosine similarity between face embeddings
// Embedding extraction is an external collaborator behind the FaceEmbedder seam

use serde::{Deserialize, Serialize};

// ============================================================================
// FACE EMBEDDING
// ============================================================================

/// FaceEmbedding - Fixed-length vector for one detected face
///
/// An undetected face is represented by the ABSENCE of an embedding
/// (Option::None upstream), never by a zero vector or a sentinel score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceEmbedding(Vec<f64>);

impl FaceEmbedding {
    pub fn new(values: Vec<f64>) -> Self {
        FaceEmbedding(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

// ============================================================================
// SIMILARITY
// ============================================================================

/// Cosine similarity between two embeddings, in [-1.0, 1.0]
///
/// Used downstream without rescaling; the verdict face threshold is
/// calibrated against this raw range. Mismatched lengths are a contract
/// violation in the calling code and fail immediately.
pub fn face_similarity(a: &FaceEmbedding, b: &FaceEmbedding) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "embedding length mismatch: {} vs {}",
        a.len(),
        b.len()
    );

    let dot: f64 = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .map(|(x, y)| x * y)
        .sum();
    let norm_a: f64 = a.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.as_slice().iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

// ============================================================================
// EMBEDDER SEAM
// ============================================================================

/// FaceEmbedder - External face-detection/embedding collaborator
///
/// Implementations receive raw image bytes and return the embedding of the
/// FIRST detected face, or None when no face is found. When an image holds
/// several faces only the first is used; a deliberate simplification.
pub trait FaceEmbedder {
    fn embed(&self, image: &[u8]) -> Option<FaceEmbedding>;
}

/// Embed both images and score them
///
/// None propagates whenever either image has no detectable face. The
/// absence is first-class: it never collapses into a low numeric score.
pub fn detect_and_score(
    image_a: &[u8],
    image_b: &[u8],
    embedder: &dyn FaceEmbedder,
) -> Option<f64> {
    let a = embedder.embed(image_a)?;
    let b = embedder.embed(image_b)?;
    Some(face_similarity(&a, &b))
}

// ============================================================================
// TESTS
// ============================================================================
