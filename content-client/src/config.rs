//! Client configuration

use std::sync::Arc;

use crate::auth::Authenticator;
use crate::{ClientResult, ContentClient};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport configuration for one Content API endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint base URL (e.g., "https://shoppingcontent.googleapis.com/content/v2sandbox/")
    pub base_url: String,

    /// Sent as the User-Agent of every request
    pub application_name: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            application_name: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the application name
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create a Content API client from this configuration
    pub fn build(&self, auth: Arc<Authenticator>) -> ClientResult<ContentClient> {
        ContentClient::new(self, auth)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(crate::endpoint::DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("http://localhost:8080/content/v2sandbox/")
            .with_application_name("orders-workflow")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:8080/content/v2sandbox/");
        assert_eq!(config.application_name.as_deref(), Some("orders-workflow"));
        assert_eq!(config.timeout, 5);
    }

    #[test]
    fn test_default_timeout() {
        assert_eq!(ClientConfig::default().timeout, DEFAULT_TIMEOUT_SECS);
    }
}
