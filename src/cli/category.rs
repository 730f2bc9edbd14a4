//! Category management commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{Category, CreateCategory};
use crate::error::Result;

/// Display format for categories in table view
#[derive(Tabled, Serialize)]
struct CategoryDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "PARENT")]
    parent: String,

    #[tabled(rename = "STATUS")]
    status: String,
}

impl From<Category> for CategoryDisplay {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.category_name,
            parent: category
                .parent_category
                .map(|p| p.category_name)
                .unwrap_or_else(|| "-".to_string()),
            status: if category.status { "active" } else { "pending" }.to_string(),
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.categories().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<CategoryDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn create(
    ctx: &CommandContext,
    name: String,
    parent: Option<String>,
    pending: bool,
) -> Result<()> {
    let payload = CreateCategory {
        category_name: name,
        parent_category: parent,
        status: !pending,
    };

    let outcome = ctx.categories().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
