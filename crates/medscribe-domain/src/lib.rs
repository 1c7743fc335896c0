//! Medscribe Domain Layer
//!
//! This crate defines the structured-record schema shared by every other
//! layer: the record types the pipeline produces, the machine-readable
//! schema descriptor handed to the extraction collaborator, and the
//! validation gate that turns the collaborator's untyped payload into a
//! typed record.
//!
//! ## Key Concepts
//!
//! - **ExtractionResult**: the schema the LLM is constrained to — only the
//!   fields that come out of the document itself
//! - **MedicalRecord**: ExtractionResult plus provenance metadata
//!   (raw_text, source_file, extracted_at); constructed once, immutable
//! - **Validation gate**: no untyped payload crosses this crate's boundary
//!   without being checked field by field
//!
//! ## Architecture
//!
//! - Pure data definition and validation, no I/O
//! - Trait definitions for the extraction collaborator; implementations
//!   live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document_type;
pub mod record;
pub mod schema;
pub mod traits;
pub mod validate;

// Re-exports for convenience
pub use document_type::DocumentType;
pub use record::{Diagnosis, ExtractionResult, MedicalRecord, Medication, Provider};
pub use schema::{extraction_schema, TOOL_DESCRIPTION, TOOL_NAME};
pub use traits::{ToolCallProvider, ToolCallRequest};
pub use validate::SchemaValidationError;
