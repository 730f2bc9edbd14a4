//! Product management commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{CreateProduct, Product};
use crate::error::Result;

/// Display format for products in table view
#[derive(Tabled, Serialize)]
struct ProductDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "NAME")]
    name: String,

    #[tabled(rename = "CATEGORY")]
    category: String,

    #[tabled(rename = "THUMBNAILS")]
    thumbnails: usize,
}

impl From<Product> for ProductDisplay {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.product_name,
            category: product
                .category
                .map(|c| c.category_name)
                .unwrap_or_else(|| "-".to_string()),
            thumbnails: product.thumbnails.len(),
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let page = ctx.products().fetch_list(&ctx.list_query(args)).await?;
    let rows: Vec<ProductDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn create(
    ctx: &CommandContext,
    name: String,
    category: Option<String>,
    thumbnails: Vec<String>,
    content: Option<String>,
) -> Result<()> {
    let payload = CreateProduct {
        product_name: name,
        category,
        thumbnails,
        content,
    };

    let outcome = ctx.products().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn delete(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.products().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
