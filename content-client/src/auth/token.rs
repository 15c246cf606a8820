//! OAuth2 access tokens and the token endpoint exchange

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{ClientError, ClientResult};

/// OAuth scope of the Content API
pub const CONTENT_SCOPE: &str = "https://www.googleapis.com/auth/content";

/// Google OAuth2 token endpoint
pub const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

/// Tokens are refreshed this long before they actually expire
const EXPIRY_SKEW_SECS: i64 = 60;

/// Token endpoint response, also the shape cached in `merchant-info.json`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl fmt::Debug for TokenResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResponse")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .field("has_refresh_token", &self.refresh_token.is_some())
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Token endpoint error body
#[derive(Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// A bearer token with its expiry
#[derive(Clone)]
pub struct AccessToken {
    secret: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// A token that never expires locally
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            expires_at: None,
        }
    }

    /// An `expires_in` past the representable date range never expires locally
    pub fn from_response(response: &TokenResponse, now: DateTime<Utc>) -> Self {
        Self {
            secret: response.access_token.clone(),
            expires_at: response
                .expires_in
                .and_then(Duration::try_seconds)
                .and_then(|lifetime| now.checked_add_signed(lifetime)),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };
        match now.checked_add_signed(Duration::seconds(EXPIRY_SKEW_SECS)) {
            Some(deadline) => deadline >= expires_at,
            None => true,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("secret", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// POST a form to a token endpoint
pub(crate) async fn request_token<F>(
    http: &reqwest::Client,
    token_uri: &str,
    form: &F,
) -> ClientResult<TokenResponse>
where
    F: Serialize + ?Sized,
{
    tracing::debug!("Requesting access token from {}", token_uri);
    let response = http.post(token_uri).form(form).send().await?;
    let status = response.status();

    if !status.is_success() {
        let text = response.text().await?;
        let message = match serde_json::from_str::<TokenErrorResponse>(&text) {
            Ok(err) => match err.error_description {
                Some(description) => format!("{}: {}", err.error, description),
                None => err.error,
            },
            Err(_) => format!("token endpoint returned {}: {}", status, text),
        };
        return Err(ClientError::Auth(message));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("token response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(expires_in: Option<i64>) -> TokenResponse {
        TokenResponse {
            access_token: "ya29.token".into(),
            expires_in,
            refresh_token: None,
            token_type: Some("Bearer".into()),
            scope: None,
        }
    }

    #[test]
    fn test_token_expiry_with_skew() {
        let now = Utc::now();
        let token = AccessToken::from_response(&response(Some(3600)), now);
        assert_eq!(token.secret(), "ya29.token");
        assert!(!token.is_expired_at(now));
        assert!(!token.is_expired_at(now + Duration::seconds(3500)));
        assert!(token.is_expired_at(now + Duration::seconds(3541)));
    }

    #[test]
    fn test_out_of_range_expiry_does_not_panic() {
        let now = Utc::now();
        for secs in [i64::MAX, i64::MAX / 1000, i64::MIN] {
            let token = AccessToken::from_response(&response(Some(secs)), now);
            assert!(token.expires_at().is_none(), "expires_in = {}", secs);
            assert!(!token.is_expired_at(now));
        }
    }

    #[test]
    fn test_token_without_expiry() {
        let token = AccessToken::from_response(&response(None), Utc::now());
        assert!(token.expires_at().is_none());
        assert!(!token.is_expired());
        assert!(!AccessToken::new("static").is_expired());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = AccessToken::new("very-secret");
        assert!(!format!("{:?}", token).contains("very-secret"));
        assert!(!format!("{:?}", response(None)).contains("ya29"));
    }
}
