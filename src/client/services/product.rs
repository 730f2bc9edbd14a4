//! Product endpoint service
//!
//! Products support list, create and delete; edits happen through the
//! product-item endpoint.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint};
use crate::client::models::{CreateProduct, ListQuery, Page, Product};
use crate::client::HttpClient;
use crate::error::Result;

pub struct ProductService {
    http: Arc<HttpClient>,
}

impl ProductService {
    pub const PATH: &'static str = "/product";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for ProductService {
    type Item = Product;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<Product>> {
        self.http.get(Self::PATH, &query.to_params()).await
    }
}

#[async_trait]
impl CreateEndpoint for ProductService {
    type Item = Product;
    type Payload = CreateProduct;

    async fn create_one(&self, payload: &CreateProduct) -> Result<Product> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl DeleteEndpoint for ProductService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
