//! Promotion-category link endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{
    CreatePromotionCategory, ListQuery, Page, PromotionCategory, UpdatePromotionCategory,
};
use crate::client::HttpClient;
use crate::error::Result;

/// Links applying a promotion to whole categories; listings arrive populated
/// on both sides.
pub struct PromotionCategoryService {
    http: Arc<HttpClient>,
}

impl PromotionCategoryService {
    pub const PATH: &'static str = "/promotion-category";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for PromotionCategoryService {
    type Item = PromotionCategory;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<PromotionCategory>> {
        let mut params = query.to_params();
        if !params.iter().any(|(k, _)| k == "populate") {
            params.push(("populate".to_string(), "promotionId,categoryId".to_string()));
        }
        self.http.get(Self::PATH, &params).await
    }
}

#[async_trait]
impl CreateEndpoint for PromotionCategoryService {
    type Item = PromotionCategory;
    type Payload = CreatePromotionCategory;

    async fn create_one(&self, payload: &CreatePromotionCategory) -> Result<PromotionCategory> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl UpdateEndpoint for PromotionCategoryService {
    type Item = PromotionCategory;
    type Patch = UpdatePromotionCategory;

    async fn update_one(
        &self,
        id: &str,
        patch: &UpdatePromotionCategory,
    ) -> Result<PromotionCategory> {
        self.http
            .patch(&format!("{}/{}", Self::PATH, id), patch)
            .await
    }
}

#[async_trait]
impl DeleteEndpoint for PromotionCategoryService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
