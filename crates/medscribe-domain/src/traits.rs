//! Trait definitions for external collaborators
//!
//! These traits define the boundary between the pipeline and the
//! extraction collaborator. Infrastructure implementations live in other
//! crates (`medscribe-llm`).

use serde_json::Value;
use std::future::Future;

/// One forced-tool-call request to the extraction collaborator.
///
/// The collaborator must answer with exactly one structured tool
/// invocation matching `input_schema`; free-text responses are a protocol
/// violation.
#[derive(Debug, Clone)]
pub struct ToolCallRequest {
    /// Fixed system instruction constraining extraction behavior
    pub system: String,

    /// User-turn content embedding the document text
    pub user: String,

    /// Name the tool invocation must carry
    pub tool_name: String,

    /// Description attached to the tool definition
    pub tool_description: String,

    /// JSON-Schema object constraining the tool input
    pub input_schema: Value,

    /// Response token budget
    pub max_tokens: u32,
}

/// Trait for the LLM collaborator driven in forced-tool-call mode.
///
/// Implemented by the infrastructure layer (`medscribe-llm`).
pub trait ToolCallProvider {
    /// Error type for collaborator operations
    type Error: std::fmt::Display;

    /// Send one request and return the single tool invocation's input
    /// payload, untyped. Callers validate it at the schema boundary before
    /// letting it travel any further.
    fn invoke(
        &self,
        request: &ToolCallRequest,
    ) -> impl Future<Output = Result<Value, Self::Error>> + Send;
}
