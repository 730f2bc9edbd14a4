//! Product item endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint};
use crate::client::models::{CreateProductItem, ListQuery, Page, ProductItem};
use crate::client::HttpClient;
use crate::error::Result;

/// List/create/delete for sellable product items. Listing is usually
/// narrowed with a `productId` query parameter.
pub struct ProductItemService {
    http: Arc<HttpClient>,
}

impl ProductItemService {
    pub const PATH: &'static str = "/product-item";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for ProductItemService {
    type Item = ProductItem;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<ProductItem>> {
        self.http.get(Self::PATH, &query.to_params()).await
    }
}

#[async_trait]
impl CreateEndpoint for ProductItemService {
    type Item = ProductItem;
    type Payload = CreateProductItem;

    async fn create_one(&self, payload: &CreateProductItem) -> Result<ProductItem> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl DeleteEndpoint for ProductItemService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
