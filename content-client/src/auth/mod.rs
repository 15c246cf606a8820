//! Credentials and access token management

mod discovery;
mod oauth;
mod service_account;
mod token;

pub use discovery::{
    CREDENTIALS_ENV_VAR, CodePrompt, OAUTH_CLIENT_FILE_NAME, SERVICE_ACCOUNT_FILE_NAME,
    StdinPrompt, discover_credentials, discover_credentials_with,
};
pub use oauth::{AuthorizedUser, ClientSecrets, OAuthClient, OOB_REDIRECT_URI};
pub use service_account::{AssertionClaims, ServiceAccountKey};
pub use token::{AccessToken, CONTENT_SCOPE, DEFAULT_TOKEN_URI, TokenResponse};

use tokio::sync::Mutex;

use crate::ClientResult;

/// Where access tokens come from
#[derive(Debug, Clone)]
pub enum Credentials {
    /// A bearer token supplied directly
    Static(String),
    ServiceAccount(ServiceAccountKey),
    AuthorizedUser(AuthorizedUser),
}

impl Credentials {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Static(_) => "static token",
            Self::ServiceAccount(_) => "service account",
            Self::AuthorizedUser(_) => "authorized user",
        }
    }
}

/// Hands out bearer tokens, fetching a new one when the cached token expires
#[derive(Debug)]
pub struct Authenticator {
    http: reqwest::Client,
    credentials: Credentials,
    cached: Mutex<Option<AccessToken>>,
}

impl Authenticator {
    pub fn new(credentials: Credentials) -> Self {
        Self::with_http_client(credentials, reqwest::Client::new())
    }

    /// Use a caller-provided HTTP client for token requests
    pub fn with_http_client(credentials: Credentials, http: reqwest::Client) -> Self {
        Self {
            http,
            credentials,
            cached: Mutex::new(None),
        }
    }

    pub fn static_token(token: impl Into<String>) -> Self {
        Self::new(Credentials::Static(token.into()))
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Current bearer token
    pub async fn access_token(&self) -> ClientResult<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| !t.is_expired()) {
            return Ok(token.secret().to_string());
        }

        let token = self.fetch().await?;
        let secret = token.secret().to_string();
        *cached = Some(token);
        Ok(secret)
    }

    async fn fetch(&self) -> ClientResult<AccessToken> {
        tracing::debug!("Fetching access token ({})", self.credentials.kind());
        match &self.credentials {
            Credentials::Static(token) => Ok(AccessToken::new(token.clone())),
            Credentials::ServiceAccount(key) => key.fetch_token(&self.http).await,
            Credentials::AuthorizedUser(user) => user.refresh(&self.http).await,
        }
    }
}
