//! Variation axis management commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{CreateVariation, UpdateVariation, Variation};
use crate::error::Result;

/// Display format for variations in table view
#[derive(Tabled, Serialize)]
struct VariationDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "DESCRIPTION")]
    description: String,

    #[tabled(rename = "ACTIVE")]
    active: bool,
}

impl From<Variation> for VariationDisplay {
    fn from(variation: Variation) -> Self {
        Self {
            id: variation.id,
            name: variation.name,
            description: variation.description.unwrap_or_else(|| "-".to_string()),
            active: variation.is_active,
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.variations().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<VariationDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn create(
    ctx: &CommandContext,
    name: String,
    description: Option<String>,
    inactive: bool,
) -> Result<()> {
    let payload = CreateVariation {
        name,
        description,
        is_active: !inactive,
    };

    let outcome = ctx.variations().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn update(
    ctx: &CommandContext,
    id: String,
    name: Option<String>,
    description: Option<String>,
    active: Option<bool>,
) -> Result<()> {
    let patch = UpdateVariation {
        name,
        description,
        is_active: active,
    };

    let outcome = ctx.variations().update(&id, &patch).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn delete(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.variations().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
