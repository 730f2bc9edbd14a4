//! Product item (SKU) management commands

use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, ListArgs};
use crate::client::models::{CreateProductItem, ProductItem};
use crate::error::Result;

/// Display format for product items in table view
#[derive(Tabled, Serialize)]
struct ItemDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "SKU")]
    sku: String,

    #[tabled(rename = "PRICE")]
    price: String,

    #[tabled(rename = "IN STOCK")]
    qty: i64,

    #[tabled(rename = "PRODUCT")]
    product: String,
}

impl From<ProductItem> for ItemDisplay {
    fn from(item: ProductItem) -> Self {
        Self {
            id: item.id,
            sku: item.sku,
            price: format!("{:.2}", item.price),
            qty: item.qty_in_stock,
            product: item.product_id.unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn list(ctx: &CommandContext, args: &ListArgs, product: Option<String>) -> Result<()> {
    let mut query = ctx.list_query(args);
    if let Some(product) = product {
        query = query.with("productId", product);
    }

    let page = ctx.product_items().fetch_list(&query).await?;
    let rows: Vec<ItemDisplay> = page.data.into_iter().map(Into::into).collect();
    ctx.print(&rows)
}

pub async fn create(
    ctx: &CommandContext,
    product: String,
    sku: String,
    price: f64,
    qty: i64,
    images: Vec<String>,
) -> Result<()> {
    let payload = CreateProductItem {
        product_id: product,
        sku,
        price,
        qty_in_stock: qty,
        images,
    };

    let outcome = ctx.product_items().create(&payload).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

pub async fn delete(ctx: &CommandContext, id: String) -> Result<()> {
    let outcome = ctx.product_items().delete(&id).await;
    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
