//! Promotion-category link commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{
    CreatePromotionCategory, PromotionCategory, UpdatePromotionCategory,
};
use crate::error::Result;

/// Display format for promotion-category links in table view
#[derive(Tabled, Serialize)]
struct LinkDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "PROMOTION")]
    promotion: String,

    #[tabled(rename = "CATEGORY")]
    category: String,
}

impl From<PromotionCategory> for LinkDisplay {
    fn from(link: PromotionCategory) -> Self {
        Self {
            id: link.id,
            promotion: link.promotion.name,
            category: link.category.category_name,
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.promotion_categories().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<LinkDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn add(ctx: &CommandContext, promotion: String, category: String) -> Result<()> {
    let payload = CreatePromotionCategory {
        promotion_id: promotion,
        category_id: category,
    };

    let outcome = ctx.promotion_categories().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn update(
    ctx: &CommandContext,
    id: String,
    promotion: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let patch = UpdatePromotionCategory {
        promotion_id: promotion,
        category_id: category,
    };

    let outcome = ctx.promotion_categories().update(&id, &patch).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn remove(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.promotion_categories().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
