//! Content Client - HTTP client for the Content API order endpoints
//!
//! Provides configuration loading, credential discovery, authenticated
//! HTTP calls and cursor pagination for the `orders` resource.

pub mod auth;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod merchant;
pub mod orders;

pub use auth::{Authenticator, Credentials};
pub use config::ClientConfig;
pub use endpoint::Endpoints;
pub use error::{ClientError, ClientResult, ConfigError};
pub use http::ContentClient;
pub use merchant::{ConfigDir, MerchantInfo};
pub use orders::{OrdersApi, collect_orders, order_pages};

// Re-export shared types for convenience
pub use shared::orders as models;
