//! Storefront platform API client

pub mod api;
mod auth;
mod http;
pub mod models;
pub mod services;

pub use api::{AuthApi, CreateEndpoint, DeleteEndpoint, ListEndpoint, UpdateEndpoint};
pub use auth::{AuthService, Session};
pub use http::HttpClient;
