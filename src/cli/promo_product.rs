//! Promotion-product link commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{CreatePromotionProduct, PromotionProduct, UpdatePromotionProduct};
use crate::error::Result;

/// Display format for promotion-product links in table view
#[derive(Tabled, Serialize)]
struct LinkDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "PROMOTION")]
    promotion: String,

    #[tabled(rename = "PRODUCT")]
    product: String,
}

impl From<PromotionProduct> for LinkDisplay {
    fn from(link: PromotionProduct) -> Self {
        Self {
            id: link.id,
            promotion: link.promotion.name,
            product: link.product.product_name,
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.promotion_products().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<LinkDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn add(ctx: &CommandContext, promotion: String, product: String) -> Result<()> {
    let payload = CreatePromotionProduct {
        promotion_id: promotion,
        product_id: product,
    };

    let outcome = ctx.promotion_products().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn update(
    ctx: &CommandContext,
    id: String,
    promotion: Option<String>,
    product: Option<String>,
) -> Result<()> {
    let patch = UpdatePromotionProduct {
        promotion_id: promotion,
        product_id: product,
    };

    let outcome = ctx.promotion_products().update(&id, &patch).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn remove(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.promotion_products().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
