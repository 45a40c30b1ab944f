//! Catalog data types.
//!
//! JSON field names are camelCase to match the web client's contract.

use serde::{Deserialize, Serialize};

/// A catalog entry representing a company/product to be rebranded.
///
/// Immutable reference data — created by the seed, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub industry: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[cfg(test)]
impl Brand {
    /// Fixed brand for unit tests.
    pub fn sample() -> Self {
        Self {
            id: 1,
            name: "Acme Rockets".into(),
            industry: "Aerospace".into(),
            website: Some("https://acme.example".into()),
            category: Some("technology".into()),
            primary_color: Some("#ff0000".into()),
            background_color: Some("#ffffff".into()),
        }
    }
}

/// A persisted rebranding project — the user's in-progress work on a brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub brand_id: i64,
    pub name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// Caller-supplied fields for creating a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub brand_id: i64,
    pub name: String,
    #[serde(default)]
    pub color_scheme: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_serializes_camel_case() {
        let json = serde_json::to_string(&Brand::sample()).unwrap();
        assert!(json.contains("primaryColor"));
        assert!(json.contains("backgroundColor"));
        assert!(!json.contains("primary_color"));
    }

    #[test]
    fn brand_optional_fields_are_omitted_when_absent() {
        let mut brand = Brand::sample();
        brand.website = None;
        brand.primary_color = None;
        let json = serde_json::to_string(&brand).unwrap();
        assert!(!json.contains("website"));
        assert!(!json.contains("primaryColor"));
    }

    #[test]
    fn new_project_deserializes_without_scheme() {
        let p: NewProject =
            serde_json::from_str(r#"{"brandId":3,"name":"refresh"}"#).unwrap();
        assert_eq!(p.brand_id, 3);
        assert!(p.color_scheme.is_none());
    }
}
