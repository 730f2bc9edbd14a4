//! Credential bundle and access-token claims

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Persisted authentication credentials.
///
/// This is the body returned by `POST /auth/login` and the value the
/// credential store persists under the `"token"` key. Replaced wholesale on
/// re-authentication, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialBundle {
    /// Scheme label, e.g. `"Bearer"`
    #[serde(rename = "type")]
    pub scheme: String,

    /// Short-lived access token (JWT)
    #[serde(rename = "accessToken")]
    pub access_token: String,

    /// Long-lived refresh token
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

impl CredentialBundle {
    /// Render the `authorization` header value: `"<scheme> <accessToken>"`.
    ///
    /// Embedded CR/LF are stripped so a hostile token cannot smuggle extra
    /// headers into the request.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.access_token).replace(['\r', '\n'], "")
    }
}

/// Claims carried in the access token's payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub role: Option<String>,

    /// Issued-at, Unix seconds
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiry, Unix seconds
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Token expiry as a UTC timestamp, when the `exp` claim is present.
    pub fn expires_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.exp.and_then(|exp| chrono::DateTime::from_timestamp(exp, 0))
    }
}

/// Decode the claims from a JWT access token without verifying the signature.
///
/// Verification belongs to the server; the client only needs the payload for
/// display and expiry hints. A token that is not three dot-separated parts is
/// rejected outright.
pub fn decode_claims(access_token: &str) -> Result<TokenClaims> {
    let parts: Vec<&str> = access_token.split('.').collect();
    if parts.len() != 3 {
        return Err(ApiError::InvalidToken.into());
    }

    let payload = base64_decode_url(parts[1])
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to decode token payload: {}", e)))?;

    let claims: TokenClaims = serde_json::from_slice(&payload)
        .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse token payload: {}", e)))?;

    Ok(claims)
}

/// Decode base64url (URL-safe base64 without padding)
fn base64_decode_url(input: &str) -> std::result::Result<Vec<u8>, String> {
    use base64::{engine::general_purpose, Engine as _};

    let standard_b64 = input.replace('-', "+").replace('_', "/");

    let padding = match standard_b64.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err("Invalid base64url length".to_string()),
    };

    let padded = format!("{}{}", standard_b64, padding);

    general_purpose::STANDARD
        .decode(&padded)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose, Engine as _};

    fn fake_token(payload: &str) -> String {
        let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("header.{}.signature", body)
    }

    #[test]
    fn test_header_value_format() {
        let bundle = CredentialBundle {
            scheme: "Bearer".to_string(),
            access_token: "abc123".to_string(),
            refresh_token: "refresh".to_string(),
        };
        assert_eq!(bundle.header_value(), "Bearer abc123");
    }

    #[test]
    fn test_header_value_strips_crlf() {
        let bundle = CredentialBundle {
            scheme: "Bea\rrer".to_string(),
            access_token: "abc\r\n123\nxyz".to_string(),
            refresh_token: "refresh".to_string(),
        };
        let value = bundle.header_value();
        assert_eq!(value, "Bearer abc123xyz");
        assert!(!value.contains('\r'));
        assert!(!value.contains('\n'));
    }

    #[test]
    fn test_decode_claims() {
        let token = fake_token(
            r#"{"userId":"u-1","username":"admin","role":"ADMIN","iat":1700000000,"exp":1700003600}"#,
        );
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.user_id.as_deref(), Some("u-1"));
        assert_eq!(claims.username.as_deref(), Some("admin"));
        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
        assert_eq!(claims.exp, Some(1700003600));
        assert!(claims.expires_at().is_some());
    }

    #[test]
    fn test_decode_claims_rejects_malformed_token() {
        let err = decode_claims("not-a-jwt").unwrap_err();
        match err {
            crate::error::Error::Api(ApiError::InvalidToken) => (),
            other => panic!("Expected InvalidToken, got {:?}", other),
        }
    }

    #[test]
    fn test_bundle_round_trips_wire_names() {
        let json = r#"{"type":"Bearer","accessToken":"a","refreshToken":"r"}"#;
        let bundle: CredentialBundle = serde_json::from_str(json).unwrap();
        assert_eq!(bundle.scheme, "Bearer");

        let out = serde_json::to_string(&bundle).unwrap();
        assert!(out.contains("\"accessToken\""));
        assert!(out.contains("\"type\""));
    }
}
