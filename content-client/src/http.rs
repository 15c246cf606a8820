//! HTTP transport for the Content API

use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiErrorEnvelope;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::Authenticator;
use crate::{ClientConfig, ClientError, ClientResult, ConfigError};

/// Authenticated HTTP client bound to one endpoint (production or sandbox)
#[derive(Debug, Clone)]
pub struct ContentClient {
    client: Client,
    base_url: Url,
    auth: Arc<Authenticator>,
}

impl ContentClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig, auth: Arc<Authenticator>) -> ClientResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidEndpoint(config.base_url.clone()))?;

        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout));
        if let Some(name) = &config.application_name {
            builder = builder.user_agent(name.clone());
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            auth,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Build a URL from percent-encoded path segments below the base URL
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn authorize(&self, request: RequestBuilder) -> ClientResult<RequestBuilder> {
        let token = self.auth.access_token().await?;
        Ok(request.bearer_auth(token))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.url(segments);
        tracing::debug!("GET {}", url);
        let request = self.authorize(self.client.get(url)).await?;
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with query parameters
    pub async fn get_with_query<T, Q>(&self, segments: &[&str], query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(segments);
        tracing::debug!("GET {}", url);
        let request = self.authorize(self.client.get(url).query(query)).await?;
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T, B>(&self, segments: &[&str], body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(segments);
        tracing::debug!("POST {}", url);
        let request = self.authorize(self.client.post(url).json(body)).await?;
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    pub async fn post_empty<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.url(segments);
        tracing::debug!("POST {}", url);
        let request = self.authorize(self.client.post(url)).await?;
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            // Google error envelope first, status mapping as fallback
            if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(&text) {
                return Err(ClientError::Api {
                    status: status.as_u16(),
                    reasons: envelope.reasons(),
                    message: envelope.error.message,
                });
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(text)),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{} ({} bytes)", e, bytes.len())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ContentClient {
        ContentClient::new(
            &ClientConfig::new(base),
            Arc::new(Authenticator::static_token("t")),
        )
        .unwrap()
    }

    #[test]
    fn test_url_segments_are_encoded() {
        let client = client("https://shoppingcontent.googleapis.com/content/v2sandbox/");
        let url = client.url(&["123", "orders", "TEST/1 2", "acknowledge"]);
        assert_eq!(
            url.as_str(),
            "https://shoppingcontent.googleapis.com/content/v2sandbox/123/orders/TEST%2F1%202/acknowledge"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let client = client("http://localhost:9000/content/v2sandbox");
        assert_eq!(
            client.url(&["1", "orders"]).as_str(),
            "http://localhost:9000/content/v2sandbox/1/orders"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ContentClient::new(
            &ClientConfig::new("not a url"),
            Arc::new(Authenticator::static_token("t")),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::Config(ConfigError::InvalidEndpoint(_))));
    }
}
