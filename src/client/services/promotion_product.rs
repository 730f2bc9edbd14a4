//! Promotion-product link endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{
    CreatePromotionProduct, ListQuery, Page, PromotionProduct, UpdatePromotionProduct,
};
use crate::client::HttpClient;
use crate::error::Result;

/// Links applying a promotion to individual products.
pub struct PromotionProductService {
    http: Arc<HttpClient>,
}

impl PromotionProductService {
    pub const PATH: &'static str = "/promotion-product";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for PromotionProductService {
    type Item = PromotionProduct;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<PromotionProduct>> {
        let mut params = query.to_params();
        if !params.iter().any(|(k, _)| k == "populate") {
            params.push(("populate".to_string(), "promotionId,productId".to_string()));
        }
        self.http.get(Self::PATH, &params).await
    }
}

#[async_trait]
impl CreateEndpoint for PromotionProductService {
    type Item = PromotionProduct;
    type Payload = CreatePromotionProduct;

    async fn create_one(&self, payload: &CreatePromotionProduct) -> Result<PromotionProduct> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl UpdateEndpoint for PromotionProductService {
    type Item = PromotionProduct;
    type Patch = UpdatePromotionProduct;

    async fn update_one(
        &self,
        id: &str,
        patch: &UpdatePromotionProduct,
    ) -> Result<PromotionProduct> {
        self.http
            .patch(&format!("{}/{}", Self::PATH, id), patch)
            .await
    }
}

#[async_trait]
impl DeleteEndpoint for PromotionProductService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
