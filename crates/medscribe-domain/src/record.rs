//! Record types produced by the extraction pipeline
//!
//! `ExtractionResult` is the exact shape the extraction collaborator is
//! constrained to; `MedicalRecord` extends it with provenance metadata
//! added after extraction. Optional fields serialize as explicit `null`
//! (never skipped) so the on-disk contract is stable for downstream tools.

use crate::document_type::DocumentType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Healthcare provider information, always nested inside a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    /// Full name of the healthcare provider
    pub name: String,
    /// Medical specialty (e.g., Internal Medicine, Cardiology)
    pub specialty: Option<String>,
    /// Name of the medical facility or practice
    pub facility: Option<String>,
}

/// A medical diagnosis mentioned in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    /// Description of the diagnosis
    pub description: String,
    /// ICD-10 code, only if explicitly mentioned in the document
    pub icd_code: Option<String>,
}

/// A prescribed or mentioned medication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    /// Name of the medication
    pub name: String,
    /// Dosage amount (e.g., 500mg, 10ml)
    pub dosage: Option<String>,
    /// How often to take (e.g., twice daily, as needed)
    pub frequency: Option<String>,
    /// Additional instructions (e.g., take with food)
    pub instructions: Option<String>,
}

/// Extracted medical information from a document.
///
/// Contains only fields that come out of the document text itself; field
/// values are taken verbatim from the collaborator's payload with
/// shape validation only, no medical-domain validation.
///
/// `diagnoses` and `medications` default to empty sequences, never null,
/// preserving insertion order from the extraction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Type of medical document; always exactly one of the seven
    /// enumerated values
    pub document_type: DocumentType,
    /// Date of the visit or document, if stated
    pub document_date: Option<NaiveDate>,
    /// Healthcare provider information, if stated
    pub provider: Option<Provider>,
    /// Primary reason for the visit or main concern
    pub chief_complaint: Option<String>,
    /// Provider's assessment or clinical impression
    pub assessment: Option<String>,
    /// Diagnoses mentioned, in response order
    #[serde(default)]
    pub diagnoses: Vec<Diagnosis>,
    /// Medications prescribed or mentioned, in response order
    #[serde(default)]
    pub medications: Vec<Medication>,
    /// Follow-up care instructions
    pub follow_up_instructions: Option<String>,
}

/// Complete medical record: extraction output plus provenance metadata.
///
/// Created once, atomically, after the extraction payload passes
/// validation; immutable thereafter. Its terminal state is serialization
/// to the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    /// The validated extraction output
    #[serde(flatten)]
    pub extraction: ExtractionResult,
    /// Full acquired document text
    pub raw_text: String,
    /// Original filename only, not the full path
    pub source_file: String,
    /// Timestamp of extraction (not the document date)
    pub extracted_at: DateTime<Utc>,
}
