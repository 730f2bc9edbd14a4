//! Promotion endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{CreatePromotion, ListQuery, Page, Promotion, UpdatePromotion};
use crate::client::HttpClient;
use crate::error::Result;

pub struct PromotionService {
    http: Arc<HttpClient>,
}

impl PromotionService {
    pub const PATH: &'static str = "/promotion";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for PromotionService {
    type Item = Promotion;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<Promotion>> {
        self.http.get(Self::PATH, &query.to_params()).await
    }
}

#[async_trait]
impl CreateEndpoint for PromotionService {
    type Item = Promotion;
    type Payload = CreatePromotion;

    async fn create_one(&self, payload: &CreatePromotion) -> Result<Promotion> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl UpdateEndpoint for PromotionService {
    type Item = Promotion;
    type Patch = UpdatePromotion;

    async fn update_one(&self, id: &str, patch: &UpdatePromotion) -> Result<Promotion> {
        self.http
            .patch(&format!("{}/{}", Self::PATH, id), patch)
            .await
    }
}

#[async_trait]
impl DeleteEndpoint for PromotionService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
