//! Authenticated HTTP client
//!
//! Every outbound request is decorated with the persisted credential bundle
//! and JSON content headers. Authorization failures run a small state
//! machine: `Unsent → Sent → {Success | AuthFailure-FirstAttempt →
//! Retried-Sent → {Success | AuthFailure-Final → LoggedOut}}`. The retry
//! budget is one; exhausting it clears the persisted credentials.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::credentials::{CredentialStore, TOKEN_KEY};
use crate::error::{ApiError, Result};

/// Global request timeout, matching the platform frontend's five minutes
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Error body shape the backend uses for rejections
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the storefront platform API.
///
/// The credential store is injected so callers (and tests) control where
/// credentials live; the client itself only reads the `"token"` entry and
/// clears it on forced logout.
pub struct HttpClient {
    http: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
}

impl HttpClient {
    /// Create a client for the given API origin.
    pub fn new(base_url: impl Into<String>, store: Arc<dyn CredentialStore>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self {
            http,
            base_url,
            store,
        })
    }

    /// The configured API origin.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The injected credential store.
    pub fn store(&self) -> Arc<dyn CredentialStore> {
        Arc::clone(&self.store)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let response = self.dispatch(Method::GET, path, params, None).await?;
        Self::parse_json(response).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self.dispatch(Method::POST, path, &[], Some(&body)).await?;
        Self::parse_json(response).await
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let body = serde_json::to_value(body)?;
        let response = self.dispatch(Method::PATCH, path, &[], Some(&body)).await?;
        Self::parse_json(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(Method::DELETE, path, &[], None).await?;
        Ok(())
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }

    /// Send a request, replaying it at most once after an authorization
    /// failure that a concurrent credential refresh can explain.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut retries_left: u8 = 1;

        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::ACCEPT, "application/json");

            if !params.is_empty() {
                request = request.query(&params);
            }
            if let Some(body) = body {
                request = request.json(body);
            }

            // Request decoration: credentials are re-read from the store on
            // every attempt, so a replay picks up refreshed tokens.
            let sent_token = match self.store.get(TOKEN_KEY) {
                Ok(Some(bundle)) => {
                    request = request.header(header::AUTHORIZATION, bundle.header_value());
                    Some(bundle.access_token)
                }
                Ok(None) => None,
                Err(err) => {
                    // Malformed storage must not abort the call
                    log::warn!(
                        "Failed to read credentials, sending unauthenticated: {}",
                        err
                    );
                    None
                }
            };

            let response = request.send().await.map_err(ApiError::from)?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED {
                let stored_token = match self.store.get(TOKEN_KEY) {
                    Ok(bundle) => bundle.map(|b| b.access_token),
                    Err(_) => None,
                };

                // The stored credentials are the ones that just failed when
                // they match what this attempt sent. A mismatch means a
                // concurrent refresh landed between decoration and failure,
                // which a single replay can recover from. This is a
                // heuristic: two near-simultaneous refreshes can still both
                // replay or both log out.
                let stored_just_failed = match (&stored_token, &sent_token) {
                    (Some(stored), Some(sent)) => stored == sent,
                    _ => false,
                };

                if stored_just_failed || retries_left == 0 {
                    return Err(self.force_logout().into());
                }

                retries_left -= 1;
                log::debug!("401 on {} with refreshed credentials, replaying once", path);
                continue;
            }

            if status.is_success() {
                return Ok(response);
            }

            return Err(Self::rejection(status, response).await.into());
        }
    }

    /// Terminal state of the 401 policy: clear credentials and surface the
    /// session-expired condition for the caller to route to the login
    /// surface.
    fn force_logout(&self) -> ApiError {
        if let Err(err) = self.store.remove(TOKEN_KEY) {
            log::warn!("Failed to clear credentials on forced logout: {}", err);
        }
        log::info!("Authorization retry exhausted, credentials cleared");
        ApiError::SessionExpired
    }

    async fn rejection(status: StatusCode, response: Response) -> ApiError {
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.message);

        ApiError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}
