//! Anthropic Messages API provider
//!
//! Drives the extraction collaborator in forced-tool-call mode: one tool
//! definition, `tool_choice` pinned to it, one user message. The provider
//! performs exactly one request per invocation; every failure, including
//! rate limits, is surfaced to the caller rather than retried.

use crate::LlmError;
use medscribe_domain::{ToolCallProvider, ToolCallRequest};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Messages API endpoint
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client-side timeout for one request (120 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Anthropic Messages API provider
pub struct ClaudeProvider {
    api_url: String,
    api_key: String,
    model: String,
    client: reqwest::Client,
}

/// Request body for the Messages API
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
    tools: [ToolDefinition<'a>; 1],
    tool_choice: ToolChoice<'a>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ToolDefinition<'a> {
    name: &'a str,
    description: &'a str,
    input_schema: &'a Value,
}

#[derive(Serialize)]
struct ToolChoice<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
}

/// Response body from the Messages API
#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentBlock {
    ToolUse {
        name: String,
        input: Value,
    },
    Text {
        #[allow(dead_code)]
        text: String,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl ClaudeProvider {
    /// Create a new provider for the given credential and model
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_api_url(DEFAULT_API_URL, api_key, model)
    }

    /// Create a provider pointed at a non-default endpoint (for testing)
    pub fn with_api_url(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            client,
        }
    }

    /// Replace the client-side request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder().timeout(timeout).build().unwrap();
        self
    }

    /// Model identifier this provider sends
    pub fn model(&self) -> &str {
        &self.model
    }

    async fn send(&self, request: &ToolCallRequest) -> Result<Value, LlmError> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: request.max_tokens,
            system: &request.system,
            messages: [Message {
                role: "user",
                content: &request.user,
            }],
            tools: [ToolDefinition {
                name: &request.tool_name,
                description: &request.tool_description,
                input_schema: &request.input_schema,
            }],
            tool_choice: ToolChoice {
                kind: "tool",
                name: &request.tool_name,
            },
        };

        debug!("POST {} (model {})", self.api_url, self.model);

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = serde_json::from_str::<ApiErrorResponse>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);

            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Auth(message),
                StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
                _ => LlmError::Api {
                    status: status.as_u16(),
                    message,
                },
            });
        }

        let parsed: MessagesResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("failed to parse response: {}", e)))?;

        parsed
            .content
            .into_iter()
            .find_map(|block| match block {
                ContentBlock::ToolUse { name, input } if name == request.tool_name => Some(input),
                _ => None,
            })
            .ok_or_else(|| LlmError::MissingToolUse(request.tool_name.clone()))
    }
}

impl ToolCallProvider for ClaudeProvider {
    type Error = LlmError;

    async fn invoke(&self, request: &ToolCallRequest) -> Result<Value, LlmError> {
        self.send(request).await
    }
}
