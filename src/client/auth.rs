//! Authentication against the platform

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::api::AuthApi;
use crate::client::models::{decode_claims, CredentialBundle, TokenClaims, User};
use crate::client::HttpClient;
use crate::credentials::{CredentialStore, TOKEN_KEY, TOKEN_TTL_DAYS};
use crate::error::Result;

/// Outcome of a successful login
#[derive(Debug, Clone)]
pub struct Session {
    pub bundle: CredentialBundle,
    pub claims: TokenClaims,
}

/// Login, logout and current-user operations.
///
/// Login persists the returned bundle for [`TOKEN_TTL_DAYS`]; every other
/// call picks credentials up from the store through the HTTP client, no
/// explicit token passing.
pub struct AuthService {
    http: Arc<HttpClient>,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl AuthService {
    pub fn new(http: Arc<HttpClient>) -> Self {
        Self { http }
    }

    /// Sign in and persist the credential bundle.
    ///
    /// The access token's claims are decoded before the bundle is stored; a
    /// token that is not a three-part JWT is rejected and nothing is
    /// persisted.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<Session> {
        let bundle = self.login(username, password).await?;
        let claims = decode_claims(&bundle.access_token)?;

        self.http
            .store()
            .set(TOKEN_KEY, &bundle, TOKEN_TTL_DAYS)?;

        Ok(Session { bundle, claims })
    }

    /// Clear the persisted credential bundle.
    pub fn sign_out(&self) -> Result<()> {
        self.http.store().remove(TOKEN_KEY)
    }

    /// The persisted bundle, if one is stored and unexpired.
    pub fn stored_bundle(&self) -> Result<Option<CredentialBundle>> {
        self.http.store().get(TOKEN_KEY)
    }
}

#[async_trait]
impl AuthApi for AuthService {
    async fn login(&self, username: &str, password: &str) -> Result<CredentialBundle> {
        self.http
            .post("/auth/login", &LoginRequest { username, password })
            .await
    }

    async fn current_user(&self) -> Result<User> {
        self.http.get("/user", &[]).await
    }
}
