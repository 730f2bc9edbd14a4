//! Promotion management commands

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, DiscountTypeArg, ListArgs};
use crate::client::models::{CreatePromotion, DiscountType, Promotion, UpdatePromotion};
use crate::error::Result;

/// Display format for promotions in table view
#[derive(Tabled, Serialize)]
struct PromotionDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "DISCOUNT")]
    discount: String,

    #[tabled(rename = "WINDOW")]
    window: String,

    #[tabled(rename = "USED")]
    used: String,

    #[tabled(rename = "ACTIVE")]
    active: bool,
}

impl From<Promotion> for PromotionDisplay {
    fn from(promotion: Promotion) -> Self {
        let discount = match promotion.discount_type {
            DiscountType::Percentage => format!("{}%", promotion.discount_value),
            DiscountType::Fixed => format!("{:.2}", promotion.discount_value),
        };

        Self {
            id: promotion.id,
            name: promotion.name,
            discount,
            window: format!(
                "{} → {}",
                promotion.start_date.format("%Y-%m-%d"),
                promotion.end_date.format("%Y-%m-%d")
            ),
            used: format!("{}/{}", promotion.used_count, promotion.usage_limit),
            active: promotion.is_active,
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.promotions().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<PromotionDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    ctx: &CommandContext,
    name: String,
    description: Option<String>,
    discount_type: DiscountTypeArg,
    discount_value: f64,
    max_discount: Option<f64>,
    min_order: f64,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    usage_limit: u64,
    inactive: bool,
) -> Result<()> {
    let payload = CreatePromotion {
        name,
        description,
        discount_type: discount_type.into(),
        discount_value,
        max_discount_amount: max_discount,
        min_order_value: min_order,
        start_date: start,
        end_date: end,
        usage_limit,
        is_active: !inactive,
    };

    let outcome = ctx.promotions().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn update(
    ctx: &CommandContext,
    id: String,
    name: Option<String>,
    description: Option<String>,
    discount_type: Option<DiscountTypeArg>,
    discount_value: Option<f64>,
    max_discount: Option<f64>,
    min_order: Option<f64>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    usage_limit: Option<u64>,
    active: Option<bool>,
) -> Result<()> {
    let patch = UpdatePromotion {
        name,
        description,
        discount_type: discount_type.map(Into::into),
        discount_value,
        max_discount_amount: max_discount,
        min_order_value: min_order,
        start_date: start,
        end_date: end,
        usage_limit,
        is_active: active,
    };

    let outcome = ctx.promotions().update(&id, &patch).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn delete(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.promotions().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
