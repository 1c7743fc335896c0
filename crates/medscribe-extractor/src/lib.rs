//! Medscribe Structured Extraction
//!
//! Transforms acquired document text into a validated [`MedicalRecord`]
//! using the extraction collaborator in forced-tool-call mode.
//!
//! # Architecture
//!
//! ```text
//! Text → Prompt → ToolCallProvider → payload → validation gate → MedicalRecord
//! ```
//!
//! The collaborator's untyped payload never leaves this crate unvalidated:
//! it is reconstructed as a typed `ExtractionResult` at the boundary and
//! merged with provenance metadata (raw_text, source_file, extracted_at)
//! to build the immutable record. No retries happen here; every
//! collaborator failure is surfaced as an [`ExtractorError`].
//!
//! # Example Usage
//!
//! ```
//! use medscribe_extractor::{Extractor, ExtractorConfig};
//! use medscribe_llm::MockProvider;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = MockProvider::new(json!({"document_type": "visit_note"}));
//! let extractor = Extractor::new(provider, ExtractorConfig::default());
//!
//! let record = extractor
//!     .extract("Patient presents with hypertension.", "note.txt")
//!     .await?;
//!
//! println!("Document type: {}", record.extraction.document_type);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
pub mod prompt;

pub use config::ExtractorConfig;
pub use error::ExtractorError;
pub use extractor::Extractor;

// Re-exported for example and doc-test convenience.
pub use medscribe_domain::MedicalRecord;
