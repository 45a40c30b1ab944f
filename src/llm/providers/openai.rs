//! OpenAI-compatible chat completion provider (`/v1/chat/completions`).
//!
//! Exposes a single `complete(&str, Option<&str>) -> String` surface matching
//! the `LlmProvider` abstraction. All OpenAI wire types are private to this
//! module — callers never see them. Every request asks the model to respond
//! with a single JSON object (`response_format: json_object`); interpreting
//! that object is the scheme pipeline's job, not this provider's.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, trace};

use crate::llm::ProviderError;

// ── Public provider ───────────────────────────────────────────────────────────

/// Adapter for any HTTP endpoint implementing `/v1/chat/completions`.
///
/// Covers OpenAI and OpenAI-compatible local servers. Constructed once at
/// startup, then cheaply cloned because `reqwest::Client` is an `Arc`
/// internally.
#[derive(Debug, Clone)]
pub struct OpenAiProvider {
    client: Client,
    api_base_url: String,
    model: String,
    temperature: f32,
    api_key: Option<String>,
}

impl OpenAiProvider {
    /// Build a provider from config values and an optional API key.
    ///
    /// `api_key` is `None` when no credential is configured. The request is
    /// then sent without an `Authorization` header and the upstream's 401 is
    /// surfaced at call time — startup never fails on a missing key.
    pub fn new(
        api_base_url: String,
        model: String,
        temperature: f32,
        timeout_seconds: u64,
        api_key: Option<String>,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, api_base_url, model, temperature, api_key })
    }

    /// Send `content` as the user message and optionally `system` as the
    /// system prompt. One round trip, no caching, no retry.
    ///
    /// Returns the first choice's message content, trimmed. An empty reply is
    /// returned as an empty string, not an error — the interpreter downstream
    /// decides what to do with it.
    pub async fn complete(&self, content: &str, system: Option<&str>) -> Result<String, ProviderError> {
        // Some models (gpt-5 family) do not accept a temperature parameter.
        let temperature = if self.model.starts_with("gpt-5") {
            None
        } else {
            Some(self.temperature)
        };

        let mut messages = Vec::new();
        if let Some(sys) = system {
            messages.push(Message { role: "system".to_string(), content: sys.to_string() });
        }
        messages.push(Message { role: "user".to_string(), content: content.to_string() });

        let payload = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            temperature,
            response_format: json!({ "type": "json_object" }),
        };

        debug!(
            model = %payload.model,
            temperature = ?payload.temperature,
            content_len = content.len(),
            "sending generation request"
        );

        let mut req = self.client.post(&self.api_base_url).json(&payload);
        if let Some(key) = &self.api_key {
            req = req.bearer_auth(key);
        }

        let response = req.send().await.map_err(|e| {
            error!(url = %self.api_base_url, error = %e, "generation HTTP request failed (transport)");
            ProviderError::Request(e.to_string())
        })?;

        let response = check_status(response).await?;

        let parsed = response.json::<ChatCompletionResponse>().await.map_err(|e| {
            error!(error = %e, "failed to deserialize generation response");
            ProviderError::Request(format!("failed to parse response body: {e}"))
        })?;

        debug!(choices = parsed.choices.len(), "received generation response");
        if tracing::enabled!(tracing::Level::TRACE) {
            let body = serde_json::to_string_pretty(&parsed)
                .unwrap_or_else(|e| format!("<serialization failed: {e}>"));
            trace!(response = %body, "full generation response payload");
        }

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        Ok(text)
    }
}

// ── Status handling ───────────────────────────────────────────────────────────

/// Convert a non-2xx response into a `ProviderError`, extracting the API
/// error message when the body carries the standard error envelope.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<failed to read error body>".to_string());

    let message = if let Ok(env) = serde_json::from_str::<ErrorEnvelope>(&body) {
        format!("HTTP {status}: {}", env.error.message)
    } else {
        format!("HTTP {status}: {body}")
    };

    error!(url_status = %status, "generation request rejected upstream");
    Err(ProviderError::Request(message))
}

// ── Private wire types ────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    response_format: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: String,
}
