//! Variation option endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{
    CreateVariationOption, ListQuery, Page, UpdateVariationOption, VariationOption,
};
use crate::client::HttpClient;
use crate::error::Result;

/// Full CRUD for variation options, plus the category-scoped listing the
/// storefront uses when rendering filters.
pub struct VariationOptionService {
    http: Arc<HttpClient>,
}

impl VariationOptionService {
    // The backend routes this one with an underscore, unlike its siblings.
    pub const PATH: &'static str = "/variation_option";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Options applicable to a category, via the category's variation axes.
    pub async fn get_by_category(&self, category_id: &str) -> Result<Page<VariationOption>> {
        self.http
            .get(&format!("{}/by_category/{}", Self::PATH, category_id), &[])
            .await
    }
}

#[async_trait]
impl ListEndpoint for VariationOptionService {
    type Item = VariationOption;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<VariationOption>> {
        self.http.get(Self::PATH, &query.to_params()).await
    }
}

#[async_trait]
impl CreateEndpoint for VariationOptionService {
    type Item = VariationOption;
    type Payload = CreateVariationOption;

    async fn create_one(&self, payload: &CreateVariationOption) -> Result<VariationOption> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl UpdateEndpoint for VariationOptionService {
    type Item = VariationOption;
    type Patch = UpdateVariationOption;

    async fn update_one(&self, id: &str, patch: &UpdateVariationOption) -> Result<VariationOption> {
        self.http
            .patch(&format!("{}/{}", Self::PATH, id), patch)
            .await
    }
}

#[async_trait]
impl DeleteEndpoint for VariationOptionService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
