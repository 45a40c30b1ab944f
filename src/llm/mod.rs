//! LLM provider abstraction — the generation capability behind the
//! color-scheme pipeline.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency;
//! adding a backend = new module in `providers/` + new variant + new
//! `complete` arm.
//!
//! Provider instances are shared immutable capabilities — clone them freely.
//! The handle is built once at startup; a missing API key never fails
//! construction, only the upstream call.

pub mod providers;

use thiserror::Error;

use crate::config::LlmConfig;

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    OpenAi(providers::openai::OpenAiProvider),
    Scripted(providers::scripted::ScriptedProvider),
}

impl LlmProvider {
    /// Build the provider named by `config.provider`.
    ///
    /// `api_key` comes from the `OPENAI_API_KEY` env — never TOML. `None` is
    /// accepted; the request is sent without an `Authorization` header and
    /// the upstream rejects it at call time.
    pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<Self, ProviderError> {
        match config.provider.as_str() {
            "openai" => Ok(LlmProvider::OpenAi(providers::openai::OpenAiProvider::new(
                config.openai.api_base_url.clone(),
                config.openai.model.clone(),
                config.openai.temperature,
                config.openai.timeout_seconds,
                api_key,
            )?)),
            "scripted" => Ok(LlmProvider::Scripted(
                providers::scripted::ScriptedProvider::new(),
            )),
            other => Err(ProviderError::UnknownProvider(other.to_string())),
        }
    }

    /// Send `content` (plus an optional system prompt) to the provider and
    /// return the text of its first completion choice. May be empty.
    pub async fn complete(
        &self,
        content: &str,
        system: Option<&str>,
    ) -> Result<String, ProviderError> {
        match self {
            LlmProvider::OpenAi(p) => p.complete(content, system).await,
            LlmProvider::Scripted(p) => p.complete(content, system).await,
        }
    }
}
