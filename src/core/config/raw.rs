//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults.
//! The `load` module converts them into the public `types` structs.

use serde::Deserialize;

// ── Top-level ────────────────────────────────────────────────────────────────

/// Raw TOML shape — serde target before resolution.
#[derive(Deserialize)]
pub(super) struct RawConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub server: RawServer,
    #[serde(default)]
    pub storage: RawStorage,
    #[serde(default)]
    pub llm: RawLlm,
    #[serde(default)]
    pub scheme: RawScheme,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: RawServer::default(),
            storage: RawStorage::default(),
            llm: RawLlm::default(),
            scheme: RawScheme::default(),
        }
    }
}

// ── Server ───────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawServer {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for RawServer {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

// ── Storage ──────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawStorage {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for RawStorage {
    fn default() -> Self {
        Self { db_path: default_db_path() }
    }
}

// ── LLM ──────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub(super) struct RawLlm {
    #[serde(rename = "default", default = "default_llm_provider")]
    pub provider: String,
    #[serde(default)]
    pub openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            openai: RawOpenAiConfig::default(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_temperature")]
    pub temperature: f32,
    #[serde(default = "default_openai_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            temperature: default_openai_temperature(),
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

// ── Scheme pipeline ──────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub(super) struct RawScheme {
    #[serde(default)]
    pub strict: bool,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

pub(super) fn default_db_path() -> String {
    "brandforge.db".to_string()
}

pub(super) fn default_llm_provider() -> String {
    "openai".to_string()
}

pub(super) fn default_openai_api_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

pub(super) fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

pub(super) fn default_openai_temperature() -> f32 {
    0.7
}

pub(super) fn default_openai_timeout_seconds() -> u64 {
    60
}
