//! Client error types

use std::path::PathBuf;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a structured error envelope
    #[error("API error {status}: {message}")]
    Api {
        status: u16,
        message: String,
        reasons: Vec<String>,
    },

    /// Authentication required
    #[error("Authentication required: {0}")]
    Unauthorized(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Token acquisition failed
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Signing the service account assertion failed
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// HTTP status of the failed call, when the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Unauthorized(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::Validation(_) => Some(400),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Configuration and credential file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Could not find the config file at {}. You can use the merchant-info.json file in the samples root as a template.",
        path.display()
    )]
    MissingFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "The config file at {} is not valid JSON format ({source}). You can use the merchant-info.json file in the samples root as a template.",
        path.display()
    )]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Could not locate home directory")]
    NoHomeDirectory,

    #[error("Expected absolute endpoint URL: {0}")]
    InvalidEndpoint(String),

    #[error(
        "Could not find or read credentials from either the Google Application Default credentials, {}, or {}.",
        service_account.display(),
        client_secrets.display()
    )]
    NoCredentials {
        service_account: PathBuf,
        client_secrets: PathBuf,
    },

    #[error("Unsupported credential type {kind:?} in {}", path.display())]
    UnsupportedCredentials { kind: String, path: PathBuf },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
