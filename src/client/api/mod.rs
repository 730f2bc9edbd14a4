//! API capability traits
//!
//! Each resource service implements only the capabilities its endpoint
//! supports; a missing operation is a missing trait bound, caught at compile
//! time. [`Repository`](crate::repo::Repository) gates its operations on
//! these bounds.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::models::{CredentialBundle, ListQuery, Page, User};
use crate::error::Result;

/// Collection listing
#[async_trait]
pub trait ListEndpoint: Send + Sync {
    type Item: Serialize + DeserializeOwned + Send + Sync;

    /// Fetch one page of the collection.
    async fn get_all(&self, query: &ListQuery) -> Result<Page<Self::Item>>;
}

/// Entity creation
#[async_trait]
pub trait CreateEndpoint: Send + Sync {
    type Item: Send;
    type Payload: Serialize + Send + Sync;

    async fn create_one(&self, payload: &Self::Payload) -> Result<Self::Item>;
}

/// Entity update
#[async_trait]
pub trait UpdateEndpoint: Send + Sync {
    type Item: Send;
    type Patch: Serialize + Send + Sync;

    async fn update_one(&self, id: &str, patch: &Self::Patch) -> Result<Self::Item>;
}

/// Entity deletion
#[async_trait]
pub trait DeleteEndpoint: Send + Sync {
    async fn delete_one(&self, id: &str) -> Result<()>;
}

/// Authentication operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange username/password for a credential bundle.
    async fn login(&self, username: &str, password: &str) -> Result<CredentialBundle>;

    /// Fetch the signed-in user; credentials come from the store.
    async fn current_user(&self) -> Result<User>;
}
