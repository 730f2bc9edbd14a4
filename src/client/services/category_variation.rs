//! Category-variation link endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{
    CategoryVariation, CreateCategoryVariation, ListQuery, Page, UpdateCategoryVariation,
};
use crate::client::HttpClient;
use crate::error::Result;

/// Links between categories and the variation axes that apply to them.
/// Listings are populated on both sides so callers get names, not bare ids.
pub struct CategoryVariationService {
    http: Arc<HttpClient>,
}

impl CategoryVariationService {
    pub const PATH: &'static str = "/category-variation";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for CategoryVariationService {
    type Item = CategoryVariation;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<CategoryVariation>> {
        let mut params = query.to_params();
        if !params.iter().any(|(k, _)| k == "populate") {
            params.push(("populate".to_string(), "variationId,categoryId".to_string()));
        }
        self.http.get(Self::PATH, &params).await
    }
}

#[async_trait]
impl CreateEndpoint for CategoryVariationService {
    type Item = CategoryVariation;
    type Payload = CreateCategoryVariation;

    async fn create_one(&self, payload: &CreateCategoryVariation) -> Result<CategoryVariation> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl UpdateEndpoint for CategoryVariationService {
    type Item = CategoryVariation;
    type Patch = UpdateCategoryVariation;

    async fn update_one(&self, id: &str, patch: &UpdateCategoryVariation) -> Result<CategoryVariation> {
        self.http
            .patch(&format!("{}/{}", Self::PATH, id), patch)
            .await
    }
}

#[async_trait]
impl DeleteEndpoint for CategoryVariationService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
