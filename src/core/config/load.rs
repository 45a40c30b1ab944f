//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` (or an explicit path), then applies
//! `BRANDFORGE_LOG_LEVEL` and `BRANDFORGE_DB_PATH` env overrides. The LLM
//! credential is read from `OPENAI_API_KEY` only — it never appears in TOML,
//! and its absence is not an error (startup must succeed without one).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AppError;

use super::raw::RawConfig;
use super::types::*;

/// Load config from the given path, or `config/default.toml`, then apply
/// env-var overrides. If no path is given and the default file does not
/// exist, built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<Config, AppError> {
    let raw = match config_path {
        Some(path) => read_raw(Path::new(path))?,
        None => {
            let default_path = Path::new("config/default.toml");
            if default_path.exists() {
                read_raw(default_path)?
            } else {
                RawConfig::default()
            }
        }
    };
    Ok(resolve(raw))
}

/// Load config from an explicit file path. Missing file is an error here,
/// unlike [`load`] with no path.
pub fn load_from(path: &Path) -> Result<Config, AppError> {
    Ok(resolve(read_raw(path)?))
}

fn read_raw(path: &Path) -> Result<RawConfig, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&text)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))
}

/// Convert the raw TOML shape into the resolved [`Config`], applying env
/// overrides on top of file values.
fn resolve(raw: RawConfig) -> Config {
    let log_level = env::var("BRANDFORGE_LOG_LEVEL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or(raw.log_level);

    let db_path = env::var("BRANDFORGE_DB_PATH")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(raw.storage.db_path));

    Config {
        log_level,
        server: ServerConfig { bind: raw.server.bind },
        storage: StorageConfig { db_path },
        llm: LlmConfig {
            provider: raw.llm.provider,
            openai: OpenAiConfig {
                api_base_url: raw.llm.openai.api_base_url,
                model: raw.llm.openai.model,
                temperature: raw.llm.openai.temperature,
                timeout_seconds: raw.llm.openai.timeout_seconds,
            },
        },
        scheme: SchemeConfig { strict: raw.scheme.strict },
        llm_api_key: env::var("OPENAI_API_KEY").ok().filter(|v| !v.is_empty()),
    }
}
