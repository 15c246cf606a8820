//! Installed-application OAuth2 clients and authorized users

use chrono::Utc;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::token::{self, AccessToken, CONTENT_SCOPE, DEFAULT_TOKEN_URI, TokenResponse};
use crate::{ClientError, ClientResult, ConfigError};

/// Out-of-band redirect: the consent page shows the code to paste back
pub const OOB_REDIRECT_URI: &str = "urn:ietf:wg:oauth:2.0:oob";

const DEFAULT_AUTH_URI: &str = "https://accounts.google.com/o/oauth2/auth";

fn default_auth_uri() -> String {
    DEFAULT_AUTH_URI.to_string()
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// `client-secrets.json` as downloaded from the Cloud console
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    #[serde(default)]
    installed: Option<OAuthClient>,
    #[serde(default)]
    web: Option<OAuthClient>,
}

impl ClientSecrets {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| ConfigError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The client definition, preferring the installed-app section
    pub fn client(&self) -> Option<&OAuthClient> {
        self.installed.as_ref().or(self.web.as_ref())
    }
}

/// OAuth2 client id/secret pair with its endpoints
#[derive(Clone, Serialize, Deserialize)]
pub struct OAuthClient {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for OAuthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthClient")
            .field("client_id", &self.client_id)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl OAuthClient {
    /// Consent page URL requesting offline access to the Content API
    pub fn authorization_url(&self) -> ClientResult<String> {
        let url = Url::parse_with_params(
            &self.auth_uri,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", OOB_REDIRECT_URI),
                ("response_type", "code"),
                ("scope", CONTENT_SCOPE),
                ("access_type", "offline"),
            ],
        )
        .map_err(|e| ClientError::Auth(format!("invalid auth_uri {}: {}", self.auth_uri, e)))?;
        Ok(url.to_string())
    }

    /// Exchange an authorization code for tokens
    pub async fn exchange_code(
        &self,
        http: &reqwest::Client,
        code: &str,
    ) -> ClientResult<TokenResponse> {
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", OOB_REDIRECT_URI),
        ];
        token::request_token(http, &self.token_uri, &form).await
    }

    /// Pair this client with a refresh token
    pub fn authorized_user(&self, refresh_token: impl Into<String>) -> AuthorizedUser {
        AuthorizedUser {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
            refresh_token: refresh_token.into(),
            token_uri: self.token_uri.clone(),
        }
    }
}

/// A user who granted offline access (refresh token grant)
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthorizedUser {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for AuthorizedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthorizedUser")
            .field("client_id", &self.client_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl AuthorizedUser {
    pub async fn refresh(&self, http: &reqwest::Client) -> ClientResult<AccessToken> {
        let now = Utc::now();
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];
        let response = token::request_token(http, &self.token_uri, &form).await?;
        Ok(AccessToken::from_response(&response, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRETS_JSON: &str = r#"{
        "installed": {
            "client_id": "123.apps.googleusercontent.com",
            "client_secret": "s3cret",
            "auth_uri": "https://accounts.google.com/o/oauth2/auth",
            "token_uri": "https://oauth2.googleapis.com/token",
            "redirect_uris": ["urn:ietf:wg:oauth:2.0:oob", "http://localhost"]
        }
    }"#;

    #[test]
    fn test_parse_installed_client() {
        let secrets: ClientSecrets = serde_json::from_str(SECRETS_JSON).unwrap();
        let client = secrets.client().unwrap();
        assert_eq!(client.client_id, "123.apps.googleusercontent.com");
        assert_eq!(client.token_uri, DEFAULT_TOKEN_URI);
    }

    #[test]
    fn test_authorization_url() {
        let secrets: ClientSecrets = serde_json::from_str(SECRETS_JSON).unwrap();
        let url = Url::parse(&secrets.client().unwrap().authorization_url().unwrap()).unwrap();
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();

        assert!(params.contains(&("client_id".into(), "123.apps.googleusercontent.com".into())));
        assert!(params.contains(&("redirect_uri".into(), OOB_REDIRECT_URI.into())));
        assert!(params.contains(&("scope".into(), CONTENT_SCOPE.into())));
        assert!(params.contains(&("access_type".into(), "offline".into())));
    }

    #[test]
    fn test_empty_secrets_have_no_client() {
        let secrets: ClientSecrets = serde_json::from_str("{}").unwrap();
        assert!(secrets.client().is_none());
    }

    #[test]
    fn test_authorized_user_from_client() {
        let secrets: ClientSecrets = serde_json::from_str(SECRETS_JSON).unwrap();
        let user = secrets.client().unwrap().authorized_user("1//refresh");
        assert_eq!(user.refresh_token, "1//refresh");
        assert!(!format!("{:?}", user).contains("s3cret"));
    }
}
