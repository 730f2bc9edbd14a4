//! Variation option management commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{CreateVariationOption, UpdateVariationOption, VariationOption};
use crate::error::Result;

/// Display format for variation options in table view
#[derive(Tabled, Serialize)]
struct OptionDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "VALUE")]
    value: String,

    #[tabled(rename = "VARIATION")]
    variation: String,
}

impl From<VariationOption> for OptionDisplay {
    fn from(option: VariationOption) -> Self {
        Self {
            id: option.id,
            name: option.name.unwrap_or_else(|| "-".to_string()),
            value: option.value,
            variation: option.variation_id.unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs, variation: Option<String>) -> Result<()> {
    let mut query = ctx.list_query(args);
    if let Some(variation) = variation {
        query = query.with("variationId", variation);
    }

    let page = ctx.variation_options().fetch_list(&query).await?;
    let rows: Vec<OptionDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn by_category(ctx: &CommandContext, category: String) -> Result<()> {
    let repo = ctx.variation_options();
    let page = repo.service().get_by_category(&category).await?;
    let rows: Vec<OptionDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn create(
    ctx: &CommandContext,
    variation: String,
    name: Option<String>,
    value: String,
) -> Result<()> {
    let payload = CreateVariationOption {
        variation_id: variation,
        name,
        value,
    };

    let outcome = ctx.variation_options().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn update(
    ctx: &CommandContext,
    id: String,
    name: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let patch = UpdateVariationOption { name, value };

    let outcome = ctx.variation_options().update(&id, &patch).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn delete(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.variation_options().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
