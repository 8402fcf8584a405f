// 🪪 Field Model - Document fields + reference store
// Fixed four-field schema shared by OCR output and reference records

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// FIELD NAMES
// ============================================================================

/// FieldName - The fixed set of fields read off an identity document
///
/// The schema is deliberately small and closed. Alternate document layouts
/// would plug in here without touching the matcher or the verdict engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldName {
    Title,
    IdNumber,
    Name,
    Address,
}

impl FieldName {
    /// All fields, in the order they are scored and reported
    pub const ALL: [FieldName; 4] = [
        FieldName::Title,
        FieldName::IdNumber,
        FieldName::Name,
        FieldName::Address,
    ];

    /// Human-readable name for display
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Title => "Title",
            FieldName::IdNumber => "ID Number",
            FieldName::Name => "Name",
            FieldName::Address => "Address",
        }
    }
}

// ============================================================================
// EXTRACTED FIELDS (OCR side)
// ============================================================================

/// ExtractedFields - Text read off one document by the external OCR step
///
/// All four fields are always present; missing text is the empty string,
/// never an absent key. Immutable after normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "IDNumber", default)]
    pub id_number: String,

    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Address", default)]
    pub address: String,
}

impl ExtractedFields {
    pub fn new(title: &str, id_number: &str, name: &str, address: &str) -> Self {
        ExtractedFields {
            title: title.to_string(),
            id_number: id_number.to_string(),
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    /// Field value by name
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::IdNumber => &self.id_number,
            FieldName::Name => &self.name,
            FieldName::Address => &self.address,
        }
    }
}

// ============================================================================
// REFERENCE RECORD (store side)
// ============================================================================

/// ReferenceRecord - One known identity from the reference store
///
/// Same four-field shape as ExtractedFields. `id_number` uniquely
/// identifies a record within the store for the duration of a lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "IDNumber")]
    pub id_number: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Address")]
    pub address: String,
}

impl ReferenceRecord {
    pub fn new(title: &str, id_number: &str, name: &str, address: &str) -> Self {
        ReferenceRecord {
            title: title.to_string(),
            id_number: id_number.to_string(),
            name: name.to_string(),
            address: address.to_string(),
        }
    }

    /// Field value by name
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Title => &self.title,
            FieldName::IdNumber => &self.id_number,
            FieldName::Name => &self.name,
            FieldName::Address => &self.address,
        }
    }
}

// ============================================================================
// REFERENCE STORE LOADING
// ============================================================================

/// Load reference records from a CSV file
///
/// Columns: Title, IDNumber, Name, Address. Row order is preserved;
/// the matcher's tie-break rule depends on it.
pub fn load_reference_csv(path: &Path) -> Result<Vec<ReferenceRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open reference CSV: {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: ReferenceRecord = result
            .with_context(|| format!("Failed to parse reference CSV row in {}", path.display()))?;
        records.push(record);
    }

    Ok(records)
}

// ============================================================================
// TESTS
// ============================================================================
