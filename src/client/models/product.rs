//! Product resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CategoryRef;

/// A product as returned by `/product`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "productName")]
    pub product_name: String,

    /// Populated owning category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,

    /// Thumbnail image URLs
    #[serde(default)]
    pub thumbnails: Vec<String>,

    /// Rich-text description, HTML
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Shallow product reference used in populated fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRef {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "productName")]
    pub product_name: String,
}

/// Creation payload for a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub product_name: String,

    /// Owning category id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thumbnails: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_names() {
        let json = r#"{
            "_id": "p-1",
            "productName": "Runner",
            "category": {"_id": "c-1", "categoryName": "Shoes"},
            "thumbnails": ["https://cdn/p1.jpg"]
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.product_name, "Runner");
        assert_eq!(product.thumbnails.len(), 1);
        assert!(product.content.is_none());
    }
}
