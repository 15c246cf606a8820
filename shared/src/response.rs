//! API error response types
//!
//! Google JSON APIs report failures with a common envelope:
//! ```json
//! {
//!     "error": {
//!         "code": 400,
//!         "message": "[orderId] Invalid value",
//!         "errors": [{ "domain": "global", "reason": "invalid", "message": "..." }]
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Error details
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// HTTP status code mirrored by the server
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
}

/// A single error reason
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorItem {
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorEnvelope {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            error: ApiErrorBody {
                code,
                message: message.into(),
                errors: Vec::new(),
            },
        }
    }

    /// Add a reason entry
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.error.errors.push(ApiErrorItem {
            domain: Some("global".to_string()),
            reason: Some(reason.into()),
            message: None,
        });
        self
    }

    /// All non-empty reasons, in order
    pub fn reasons(&self) -> Vec<String> {
        self.error
            .errors
            .iter()
            .filter_map(|e| e.reason.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_google_error() {
        let json = r#"{
            "error": {
                "errors": [{"domain": "content.ContentErrorDomain", "reason": "invalid", "message": "Invalid order id"}],
                "code": 400,
                "message": "Invalid order id"
            }
        }"#;
        let envelope: ApiErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.code, 400);
        assert_eq!(envelope.error.message, "Invalid order id");
        assert_eq!(envelope.reasons(), vec!["invalid".to_string()]);
    }

    #[test]
    fn test_builder_round_trip() {
        let envelope = ApiErrorEnvelope::new(404, "Not found").with_reason("notFound");
        let json = serde_json::to_string(&envelope).unwrap();
        let parsed: ApiErrorEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, envelope);
    }
}
