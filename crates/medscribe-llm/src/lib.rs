//! Medscribe LLM Provider Layer
//!
//! Implementations of the `ToolCallProvider` trait from
//! `medscribe-domain`: the extraction collaborator driven in
//! forced-tool-call mode.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing, no network
//! - `ClaudeProvider`: Anthropic Messages API integration

#![warn(missing_docs)]

pub mod claude;

use medscribe_domain::{ToolCallProvider, ToolCallRequest};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use claude::ClaudeProvider;

/// Errors that can occur while talking to the extraction collaborator
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or transport failure before an HTTP status was received
    #[error("communication error: {0}")]
    Communication(String),

    /// The API rejected the credential
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Rate limit or quota exceeded
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    /// Any other non-success HTTP status from the API
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the API error body, or the raw body
        message: String,
    },

    /// The response body could not be parsed
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The collaborator answered without the forced tool invocation.
    /// Protocol violation; never retried.
    #[error("response contained no '{0}' tool invocation")]
    MissingToolUse(String),
}

/// Mock provider for deterministic testing
///
/// Returns a pre-configured payload (or error) without any network call,
/// and records every request it receives so tests can assert on prompt
/// content and call counts.
#[derive(Debug, Clone)]
pub struct MockProvider {
    payload: Value,
    error: Option<String>,
    requests: Arc<Mutex<Vec<ToolCallRequest>>>,
}

impl MockProvider {
    /// Create a provider that answers every request with `payload`
    pub fn new(payload: Value) -> Self {
        Self {
            payload,
            error: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a provider that fails every request with a communication error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            payload: Value::Null,
            error: Some(message.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of invoke calls made so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Copies of every request received, in order
    pub fn requests(&self) -> Vec<ToolCallRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ToolCallProvider for MockProvider {
    type Error = LlmError;

    async fn invoke(&self, request: &ToolCallRequest) -> Result<Value, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.error {
            Some(message) => Err(LlmError::Communication(message.clone())),
            None => Ok(self.payload.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> ToolCallRequest {
        ToolCallRequest {
            system: "system".to_string(),
            user: "user".to_string(),
            tool_name: "extract_medical_info".to_string(),
            tool_description: "desc".to_string(),
            input_schema: json!({"type": "object"}),
            max_tokens: 1024,
        }
    }

    #[tokio::test]
    async fn test_mock_returns_payload() {
        let provider = MockProvider::new(json!({"document_type": "other"}));
        let payload = provider.invoke(&request()).await.unwrap();
        assert_eq!(payload["document_type"], "other");
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let provider = MockProvider::new(Value::Null);
        assert_eq!(provider.call_count(), 0);

        provider.invoke(&request()).await.unwrap();
        provider.invoke(&request()).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.requests()[0].tool_name, "extract_medical_info");
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let provider = MockProvider::failing("connection reset");
        let err = provider.invoke(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Communication(_)));
        // still counted: the request reached the (mock) collaborator
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_clone_shares_request_log() {
        let provider = MockProvider::new(Value::Null);
        let clone = provider.clone();
        provider.invoke(&request()).await.unwrap();
        assert_eq!(clone.call_count(), 1);
    }
}
