//! Content API `orders` resource
//!
//! Types are shared between the HTTP client and anything that drives it.
//! Field names follow the JSON wire format (camelCase).

mod requests;
mod responses;
mod types;

pub use requests::*;
pub use responses::*;
pub use types::*;
