//! Shared types for the Content API order samples
//!
//! Wire models of the `orders` resource and the API error envelope, used by
//! both the HTTP client and the workflow driving it.

pub mod orders;
pub mod response;

pub use response::ApiErrorEnvelope;
