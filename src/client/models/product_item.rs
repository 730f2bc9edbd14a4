//! Product item (sellable variation of a product)

use serde::{Deserialize, Serialize};

/// A concrete sellable item of a product: one SKU with its own price,
/// stock level and images.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductItem {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "SKU")]
    pub sku: String,

    pub price: f64,

    #[serde(rename = "qtyInStock", default)]
    pub qty_in_stock: i64,

    #[serde(default)]
    pub images: Vec<String>,

    /// Owning product id
    #[serde(rename = "productId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Creation payload for a product item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductItem {
    #[serde(rename = "productId")]
    pub product_id: String,

    #[serde(rename = "SKU")]
    pub sku: String,

    pub price: f64,

    #[serde(rename = "qtyInStock")]
    pub qty_in_stock: i64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_item_wire_names() {
        let json = r#"{
            "_id": "i-1",
            "SKU": "RUN-42-BLK",
            "price": 89.9,
            "qtyInStock": 12,
            "images": [],
            "productId": "p-1"
        }"#;
        let item: ProductItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.sku, "RUN-42-BLK");
        assert_eq!(item.qty_in_stock, 12);
        assert_eq!(item.product_id.as_deref(), Some("p-1"));
    }

    #[test]
    fn test_create_product_item_serializes_sku_uppercase() {
        let payload = CreateProductItem {
            product_id: "p-1".to_string(),
            sku: "RUN-42-BLK".to_string(),
            price: 89.9,
            qty_in_stock: 5,
            images: vec![],
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"SKU\""));
        assert!(json.contains("\"productId\""));
    }
}
