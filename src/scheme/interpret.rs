//! Response interpretation for color-scheme generation.
//!
//! The model is asked for a single JSON object; this module turns its raw
//! reply into a [`SchemeEnvelope`]. Parse failures and empty replies degrade
//! to an empty scheme with `success: true` rather than raising — the
//! "never crash on bad model output" policy inherited from the original
//! service. Callers that want malformed output rejected run
//! [`ColorScheme::validate`] on the result (strict mode).

use tracing::warn;

use super::{ColorScheme, SchemeEnvelope};

/// Parse `raw` as a JSON color scheme.
///
/// No field-by-field validation and no default-filling beyond absent fields
/// staying absent. Anything that fails to parse as a `ColorScheme` object —
/// empty text, prose, arrays, wrongly-typed fields — yields an empty scheme.
pub fn interpret(raw: &str) -> SchemeEnvelope {
    let data = match serde_json::from_str::<ColorScheme>(raw) {
        Ok(scheme) => scheme,
        Err(e) => {
            warn!(error = %e, raw_len = raw.len(), "model reply is not a color-scheme object; substituting empty scheme");
            ColorScheme::default()
        }
    };
    SchemeEnvelope { success: true, data: Some(data), message: None }
}
