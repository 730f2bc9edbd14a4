//! Category-variation link commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{CategoryVariation, CreateCategoryVariation, UpdateCategoryVariation};
use crate::error::Result;

/// Display format for category-variation links in table view
#[derive(Tabled, Serialize)]
struct LinkDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "CATEGORY")]
    category: String,

    #[tabled(rename = "VARIATION")]
    variation: String,
}

impl From<CategoryVariation> for LinkDisplay {
    fn from(link: CategoryVariation) -> Self {
        Self {
            id: link.id,
            category: link.category.category_name,
            variation: link.variation.name,
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.category_variations().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<LinkDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn add(ctx: &CommandContext, category: String, variation: String) -> Result<()> {
    let payload = CreateCategoryVariation {
        variation_id: variation,
        category_id: category,
    };

    let outcome = ctx.category_variations().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn update(
    ctx: &CommandContext,
    id: String,
    category: Option<String>,
    variation: Option<String>,
) -> Result<()> {
    let patch = UpdateCategoryVariation {
        variation_id: variation,
        category_id: category,
    };

    let outcome = ctx.category_variations().update(&id, &patch).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn remove(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.category_variations().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
