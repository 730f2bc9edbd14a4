//! Promotions and their category/product links

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::category::CategoryRef;
use super::product::ProductRef;

/// How a promotion's discount is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A promotion as returned by `/promotion`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub discount_type: DiscountType,

    /// Percent (0-100) for `Percentage`, absolute amount for `Fixed`
    pub discount_value: f64,

    /// Cap on the discount amount for percentage promotions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<f64>,

    #[serde(default)]
    pub min_order_value: f64,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[serde(default)]
    pub usage_limit: u64,

    #[serde(default)]
    pub used_count: u64,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromotion {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub discount_type: DiscountType,

    pub discount_value: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<f64>,

    #[serde(default)]
    pub min_order_value: f64,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[serde(default)]
    pub usage_limit: u64,

    pub is_active: bool,
}

/// Patch payload for a promotion; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromotion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_discount_amount: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_order_value: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Shallow promotion reference used in populated fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionRef {
    #[serde(rename = "_id")]
    pub id: String,

    pub name: String,
}

/// Link applying a promotion to a whole category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionCategory {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "promotionId")]
    pub promotion: PromotionRef,

    #[serde(rename = "categoryId")]
    pub category: CategoryRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePromotionCategory {
    #[serde(rename = "promotionId")]
    pub promotion_id: String,

    #[serde(rename = "categoryId")]
    pub category_id: String,
}

/// Patch payload re-pointing a promotion-category link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePromotionCategory {
    #[serde(
        rename = "promotionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub promotion_id: Option<String>,

    #[serde(rename = "categoryId", default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

/// Link applying a promotion to a single product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionProduct {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "promotionId")]
    pub promotion: PromotionRef,

    #[serde(rename = "productId")]
    pub product: ProductRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePromotionProduct {
    #[serde(rename = "promotionId")]
    pub promotion_id: String,

    #[serde(rename = "productId")]
    pub product_id: String,
}

/// Patch payload re-pointing a promotion-product link
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePromotionProduct {
    #[serde(
        rename = "promotionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub promotion_id: Option<String>,

    #[serde(rename = "productId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}
