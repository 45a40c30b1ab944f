//! Prompt construction for color-scheme generation.
//!
//! Pure string assembly: identical `(Brand, Preferences)` inputs always yield
//! the identical prompt. Optional preference clauses are appended only when
//! present — an omitted style or mood leaves no trace in the output.

use crate::catalog::Brand;

use super::Preferences;

/// System instruction sent alongside every generation request.
pub const SYSTEM_PROMPT: &str =
    "You are a design expert specializing in brand color schemes.";

/// Placeholder used when the brand has no recorded primary color.
const UNKNOWN_COLOR: &str = "unknown";

/// Render the user prompt for one brand.
pub fn build_prompt(brand: &Brand, preferences: &Preferences) -> String {
    let original_color = brand.primary_color.as_deref().unwrap_or(UNKNOWN_COLOR);

    let mut prompt = format!(
        "Generate a modern rebranding color scheme for the following brand.\n\
         Brand name: {}\n\
         Industry: {}\n\
         Original primary color: {}\n",
        brand.name, brand.industry, original_color
    );

    if let Some(style) = preferences.style.as_deref().filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("Preferred style: {style}\n"));
    }
    if let Some(mood) = preferences.mood.as_deref().filter(|m| !m.is_empty()) {
        prompt.push_str(&format!("Desired mood: {mood}\n"));
    }

    prompt.push_str(
        "Respond with a single JSON object with the keys \"primary\", \
         \"secondary\", \"accent\", \"background\", \"text\" and \
         \"additionalColors\" (an array of extra hex colors). \
         Every color value must be a hex string.",
    );

    prompt
}
