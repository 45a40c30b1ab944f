//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs that the rest of the crate
//! consumes. Raw TOML deserialization types live in `raw.rs`.

use std::path::PathBuf;

// ── Server ───────────────────────────────────────────────────────────────────

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the axum listener to.
    pub bind: String,
}

// ── Storage ──────────────────────────────────────────────────────────────────

/// SQLite storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the database file.
    pub db_path: PathBuf,
}

// ── LLM ──────────────────────────────────────────────────────────────────────

/// OpenAI / OpenAI-compatible provider configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full URL of the chat-completions endpoint.
    pub api_base_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

/// LLM subsystem configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider backend to use: `"openai"` or `"scripted"`.
    pub provider: String,
    pub openai: OpenAiConfig,
}

// ── Scheme pipeline ──────────────────────────────────────────────────────────

/// Color-scheme pipeline configuration.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    /// When true, model output must carry all five required colors in valid
    /// hex form or the request fails with a typed error. When false, malformed
    /// output degrades to an empty scheme (the historical behavior).
    pub strict: bool,
}

// ── Top-level ────────────────────────────────────────────────────────────────

/// Fully resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub llm: LlmConfig,
    pub scheme: SchemeConfig,
    /// API key for the LLM provider. Comes from the `OPENAI_API_KEY` env var
    /// only, never from TOML. `None` is valid — the provider is constructed
    /// without a credential and the upstream rejects at call time.
    pub llm_api_key: Option<String>,
}
