//! Variation axes, their options, and the category-variation link

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CategoryRef;

/// A variation axis (e.g. Size, Color) as returned by `/variation`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Shallow variation reference used in populated fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationRef {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariation {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub is_active: bool,
}

/// Patch payload for a variation; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A concrete option of a variation axis (e.g. Size = 42)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationOption {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub value: String,

    #[serde(
        rename = "variationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub variation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVariationOption {
    #[serde(rename = "variationId")]
    pub variation_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVariationOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Link assigning a variation axis to a category.
///
/// Listed with `populate=variationId,categoryId`, so both sides arrive as
/// shallow references rather than bare ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryVariation {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "variationId")]
    pub variation: VariationRef,

    #[serde(rename = "categoryId")]
    pub category: CategoryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryVariation {
    #[serde(rename = "variationId")]
    pub variation_id: String,

    #[serde(rename = "categoryId")]
    pub category_id: String,
}

/// Patch payload re-pointing a category-variation link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCategoryVariation {
    #[serde(
        rename = "variationId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub variation_id: Option<String>,

    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variation_wire_names() {
        let json = r#"{"_id": "v-1", "name": "Size", "isActive": true}"#;
        let variation: Variation = serde_json::from_str(json).unwrap();
        assert_eq!(variation.name, "Size");
        assert!(variation.is_active);
    }

    #[test]
    fn test_update_variation_skips_absent_fields() {
        let patch = UpdateVariation {
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"isActive":false}"#);
    }

    #[test]
    fn test_category_variation_populated_link() {
        let json = r#"{
            "_id": "cv-1",
            "variationId": {"_id": "v-1", "name": "Size"},
            "categoryId": {"_id": "c-1", "categoryName": "Shoes"}
        }"#;
        let link: CategoryVariation = serde_json::from_str(json).unwrap();
        assert_eq!(link.variation.name, "Size");
        assert_eq!(link.category.category_name, "Shoes");
    }
}
