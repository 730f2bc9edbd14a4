//! Category endpoint service
//!
//! Categories are list/create only: the backend exposes no update or delete
//! route for them, so those capabilities are absent here by construction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, ListEndpoint};
use crate::client::models::{Category, CreateCategory, ListQuery, Page};
use crate::client::HttpClient;
use crate::error::Result;

pub struct CategoryService {
    http: Arc<HttpClient>,
}

impl CategoryService {
    pub const PATH: &'static str = "/product-category";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for CategoryService {
    type Item = Category;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<Category>> {
        self.http.get(Self::PATH, &query.to_params()).await
    }
}

#[async_trait]
impl CreateEndpoint for CategoryService {
    type Item = Category;
    type Payload = CreateCategory;

    async fn create_one(&self, payload: &CreateCategory) -> Result<Category> {
        self.http.post(Self::PATH, payload).await
    }
}
