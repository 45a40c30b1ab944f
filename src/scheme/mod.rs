//! Color-scheme generation pipeline.
//!
//! Three composed steps per request:
//! 1. **prompt** — render a deterministic text prompt from a brand and
//!    optional preferences.
//! 2. provider round trip — one outbound call, no caching, no retry
//!    (see [`crate::llm`]).
//! 3. **interpret** — parse the raw reply into a [`ColorScheme`] envelope.
//!
//! A `ColorScheme` is constructed fresh per request and never persisted here;
//! saving one onto a project is the caller's business.

pub mod interpret;
pub mod prompt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Brand;
use crate::llm::{LlmProvider, ProviderError};

// ── Error ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum SchemeError {
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("invalid color scheme: {0}")]
    Invalid(String),
}

// ── Types ─────────────────────────────────────────────────────────────────────

/// Optional caller-supplied hints steering generation. Free text, no
/// validation beyond "string or absent".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}

/// The structured output of the generation step.
///
/// All fields are optional on the wire: the lenient interpreter takes
/// whatever the model returned and leaves the rest absent. Absent fields are
/// omitted from serialized output, so a fully-empty scheme round-trips as
/// `{}`. [`ColorScheme::validate`] is the strict gate for callers that want
/// the five required colors guaranteed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_colors: Option<Vec<String>>,
}

impl ColorScheme {
    /// Strict shape check: the five required colors must be present and
    /// `#rgb`/`#rrggbb` hex strings; `additionalColors`, when present, must
    /// be hex too. Returns a typed error instead of default-filling.
    pub fn validate(&self) -> Result<(), SchemeError> {
        let required = [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
        ];
        for (name, value) in required {
            match value.as_deref() {
                Some(v) if is_hex_color(v) => {}
                Some(v) => {
                    return Err(SchemeError::Invalid(format!(
                        "field '{name}' is not a hex color: '{v}'"
                    )));
                }
                None => {
                    return Err(SchemeError::Invalid(format!(
                        "missing required color '{name}'"
                    )));
                }
            }
        }
        if let Some(extra) = &self.additional_colors {
            for v in extra {
                if !is_hex_color(v) {
                    return Err(SchemeError::Invalid(format!(
                        "additionalColors entry is not a hex color: '{v}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Response envelope for a generation request.
///
/// `success` is true whenever the pipeline ran to completion without a
/// provider error — it says nothing about whether `data` actually carries a
/// well-formed scheme. Strict mode (see [`generate`]) closes that gap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemeEnvelope {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ColorScheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Run the full generation pipeline for one brand.
///
/// Exactly one provider round trip. With `strict` set, malformed model
/// output becomes a [`SchemeError::Invalid`] instead of an empty scheme.
pub async fn generate(
    provider: &LlmProvider,
    brand: &Brand,
    preferences: &Preferences,
    strict: bool,
) -> Result<SchemeEnvelope, SchemeError> {
    let prompt = prompt::build_prompt(brand, preferences);
    let raw = provider.complete(&prompt, Some(prompt::SYSTEM_PROMPT)).await?;
    let envelope = interpret::interpret(&raw);
    if strict {
        if let Some(scheme) = &envelope.data {
            scheme.validate()?;
        }
    }
    Ok(envelope)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `#rgb` or `#rrggbb`, case-insensitive.
fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_scheme() -> ColorScheme {
        ColorScheme {
            primary: Some("#111".into()),
            secondary: Some("#222".into()),
            accent: Some("#333".into()),
            background: Some("#fff".into()),
            text: Some("#000".into()),
            additional_colors: None,
        }
    }

    #[test]
    fn hex_color_shapes() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#A1B2C3"));
        assert!(!is_hex_color("fff"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("#ggg"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn validate_accepts_complete_scheme() {
        assert!(full_scheme().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_field() {
        let mut scheme = full_scheme();
        scheme.accent = None;
        let err = scheme.validate().unwrap_err();
        assert!(err.to_string().contains("accent"));
    }

    #[test]
    fn validate_rejects_non_hex_value() {
        let mut scheme = full_scheme();
        scheme.primary = Some("blue".into());
        let err = scheme.validate().unwrap_err();
        assert!(err.to_string().contains("primary"));
    }

    #[test]
    fn validate_rejects_bad_additional_color() {
        let mut scheme = full_scheme();
        scheme.additional_colors = Some(vec!["#abc".into(), "nope".into()]);
        assert!(scheme.validate().is_err());
    }

    #[test]
    fn empty_scheme_serializes_to_empty_object() {
        let json = serde_json::to_string(&ColorScheme::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn additional_colors_uses_camel_case_key() {
        let scheme = ColorScheme {
            additional_colors: Some(vec!["#abc".into()]),
            ..Default::default()
        };
        let json = serde_json::to_string(&scheme).unwrap();
        assert!(json.contains("additionalColors"));
    }

    #[tokio::test]
    async fn generate_is_one_provider_call() {
        let scripted = crate::llm::providers::scripted::ScriptedProvider::new();
        let provider = LlmProvider::Scripted(scripted.clone());
        let brand = crate::catalog::Brand::sample();
        let envelope = generate(&provider, &brand, &Preferences::default(), false)
            .await
            .unwrap();
        assert!(envelope.success);
        assert_eq!(scripted.call_count(), 1);
    }

    #[tokio::test]
    async fn generate_strict_rejects_garbage_output() {
        let scripted = crate::llm::providers::scripted::ScriptedProvider::new();
        scripted.push_reply("not json");
        let provider = LlmProvider::Scripted(scripted);
        let brand = crate::catalog::Brand::sample();
        let err = generate(&provider, &brand, &Preferences::default(), true)
            .await
            .unwrap_err();
        assert!(matches!(err, SchemeError::Invalid(_)));
    }

    #[tokio::test]
    async fn generate_lenient_swallows_garbage_output() {
        let scripted = crate::llm::providers::scripted::ScriptedProvider::new();
        scripted.push_reply("not json");
        let provider = LlmProvider::Scripted(scripted);
        let brand = crate::catalog::Brand::sample();
        let envelope = generate(&provider, &brand, &Preferences::default(), false)
            .await
            .unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.data, Some(ColorScheme::default()));
    }
}
