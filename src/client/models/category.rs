//! Product category resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product category as returned by `/product-category`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "categoryName")]
    pub category_name: String,

    /// Populated parent category, `null` for root categories
    #[serde(
        rename = "parentCategory",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent_category: Option<CategoryRef>,

    /// `true` = active, `false` = pending
    pub status: bool,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Shallow category reference used in populated fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "categoryName")]
    pub category_name: String,
}

/// Creation payload for a category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategory {
    pub category_name: String,

    /// Parent category id, omitted for root categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_category: Option<String>,

    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        let json = r#"{
            "_id": "c-1",
            "categoryName": "Shoes",
            "parentCategory": {"_id": "c-0", "categoryName": "Apparel"},
            "status": true
        }"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert_eq!(cat.id, "c-1");
        assert_eq!(cat.category_name, "Shoes");
        assert_eq!(
            cat.parent_category.as_ref().map(|p| p.category_name.as_str()),
            Some("Apparel")
        );
        assert!(cat.status);
    }

    #[test]
    fn test_category_without_parent() {
        let json = r#"{"_id": "c-2", "categoryName": "Sale", "status": false}"#;
        let cat: Category = serde_json::from_str(json).unwrap();
        assert!(cat.parent_category.is_none());
    }

    #[test]
    fn test_create_category_serializes_camel_case() {
        let payload = CreateCategory {
            category_name: "Shoes".to_string(),
            parent_category: None,
            status: true,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"categoryName\":\"Shoes\""));
        assert!(!json.contains("parentCategory"));
    }
}
