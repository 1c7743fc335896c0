//! Error types for structured extraction

use medscribe_domain::SchemaValidationError;
use thiserror::Error;

/// Errors that can occur during extraction
///
/// Every variant is a hard failure for the invocation; there is no retry
/// path at this layer.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Collaborator-reported failure: network, auth, rate limit, quota,
    /// or a response without the expected structured payload
    #[error("LLM error: {0}")]
    Provider(String),

    /// Structured payload present but fails schema conformance
    #[error("schema validation failed: {0}")]
    Validation(#[from] SchemaValidationError),
}
