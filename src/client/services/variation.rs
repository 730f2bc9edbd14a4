//! Variation endpoint service

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::{CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
use crate::client::models::{CreateVariation, ListQuery, Page, UpdateVariation, Variation};
use crate::client::HttpClient;
use crate::error::Result;

pub struct VariationService {
    http: Arc<HttpClient>,
}

impl VariationService {
    pub const PATH: &'static str = "/variation";

    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ListEndpoint for VariationService {
    type Item = Variation;

    async fn get_all(&self, query: &ListQuery) -> Result<Page<Variation>> {
        self.http.get(Self::PATH, &query.to_params()).await
    }
}

#[async_trait]
impl CreateEndpoint for VariationService {
    type Item = Variation;
    type Payload = CreateVariation;

    async fn create_one(&self, payload: &CreateVariation) -> Result<Variation> {
        self.http.post(Self::PATH, payload).await
    }
}

#[async_trait]
impl UpdateEndpoint for VariationService {
    type Item = Variation;
    type Patch = UpdateVariation;

    async fn update_one(&self, id: &str, patch: &UpdateVariation) -> Result<Variation> {
        self.http
            .patch(&format!("{}/{}", Self::PATH, id), patch)
            .await
    }
}

#[async_trait]
impl DeleteEndpoint for VariationService {
    async fn delete_one(&self, id: &str) -> Result<()> {
        self.http.delete(&format!("{}/{}", Self::PATH, id)).await
    }
}
