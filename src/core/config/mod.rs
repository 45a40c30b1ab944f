//! Configuration loading with env-var overrides.
//!
//! # Module layout
//!
//! - **types** — Public configuration structs (`Config`, `LlmConfig`, …).
//! - **raw** — Raw TOML deserialization types (`RawConfig`, `RawLlm`, …).
//!   These mirror the file shape and use serde defaults; kept private.
//! - **load** — Loading logic: `load`, `load_from`, env overrides.

mod load;
mod raw;
mod types;

pub use load::{load, load_from};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MINIMAL_TOML: &str = r#"
log_level = "debug"

[server]
bind = "0.0.0.0:9090"

[llm]
default = "openai"

[llm.openai]
model = "gpt-4o"
temperature = 0.3
"#;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn minimal_toml_resolves() {
        let f = write_config(MINIMAL_TOML);
        let config = load_from(f.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.bind, "0.0.0.0:9090");
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.openai.model, "gpt-4o");
        assert!((config.llm.openai.temperature - 0.3).abs() < f32::EPSILON);
        // unspecified sections fall back to defaults
        assert_eq!(config.llm.openai.timeout_seconds, 60);
        assert!(!config.scheme.strict);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let f = write_config("");
        let config = load_from(f.path()).unwrap();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(
            config.llm.openai.api_base_url,
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn strict_flag_parses() {
        let f = write_config("[scheme]\nstrict = true\n");
        let config = load_from(f.path()).unwrap();
        assert!(config.scheme.strict);
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = load_from(std::path::Path::new("/nonexistent/brandforge.toml")).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let f = write_config("log_level = [broken");
        let err = load_from(f.path()).unwrap_err();
        assert!(err.to_string().contains("parse error"));
    }
}
