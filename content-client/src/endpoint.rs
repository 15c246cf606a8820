//! Endpoint resolution
//!
//! The production endpoint can be overridden through the environment. Sandbox
//! methods (test orders) are served from a sibling path: a trailing `v2`
//! segment becomes `v2sandbox`.

use reqwest::Url;

use crate::ConfigError;

/// Environment variable that overrides the API endpoint
pub const ENDPOINT_ENV_VAR: &str = "GOOGLE_SHOPPING_SAMPLES_ENDPOINT";

/// Standard Content API v2 endpoint
pub const DEFAULT_ENDPOINT: &str = "https://shoppingcontent.googleapis.com/content/v2/";

const VERSION_SEGMENT: &str = "v2";
const SANDBOX_SEGMENT: &str = "v2sandbox";

/// Production and sandbox base URLs, both ending in `/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub production: String,
    pub sandbox: String,
    /// Set when the endpoint came from the environment
    pub custom: bool,
}

impl Endpoints {
    /// Resolve from `GOOGLE_SHOPPING_SAMPLES_ENDPOINT`, falling back to the standard endpoint
    pub fn from_env() -> Result<Self, ConfigError> {
        let custom = std::env::var(ENDPOINT_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty());
        Self::resolve(custom.as_deref())
    }

    pub fn resolve(custom: Option<&str>) -> Result<Self, ConfigError> {
        let raw = custom.unwrap_or(DEFAULT_ENDPOINT).trim();
        let url = Url::parse(raw).map_err(|_| ConfigError::InvalidEndpoint(raw.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(ConfigError::InvalidEndpoint(raw.to_string()));
        }

        let production = with_trailing_slash(&url);
        if custom.is_some() {
            tracing::info!("Using non-standard API endpoint: {}", production);
        }

        let sandbox = match sandbox_path(url.path()) {
            Some(path) => {
                let mut sandbox = url.clone();
                sandbox.set_path(&path);
                sandbox.to_string()
            }
            None => {
                tracing::warn!("Using same endpoint for sandbox methods.");
                production.clone()
            }
        };

        Ok(Self {
            production,
            sandbox,
            custom: custom.is_some(),
        })
    }
}

fn with_trailing_slash(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.set_fragment(None);
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.to_string()
}

/// Replace a trailing `v2` path segment with `v2sandbox`
fn sandbox_path(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches('/');
    let (parent, last) = trimmed.rsplit_once('/')?;
    (last == VERSION_SEGMENT).then(|| format!("{parent}/{SANDBOX_SEGMENT}/"))
}
