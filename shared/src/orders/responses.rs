//! Response bodies of the `orders` and `testorders` methods

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Order;

/// Whether/how a mutating call was applied by the remote service
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ExecutionStatus {
    Executed,
    /// The operation id was already seen; the request was not applied again
    Duplicate,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Executed => "executed",
            Self::Duplicate => "duplicate",
            Self::Unknown => "unknown",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestOrderResponse {
    pub order_id: String,
}

/// Response of every mutating `orders` method
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResponse {
    #[serde(default)]
    pub execution_status: ExecutionStatus,
}

impl ExecutionResponse {
    pub fn executed() -> Self {
        Self {
            execution_status: ExecutionStatus::Executed,
        }
    }
}

/// One page of `orders.list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrdersListResponse {
    #[serde(default)]
    pub resources: Vec<Order>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl OrdersListResponse {
    /// Token of the following page; an empty token counts as absent
    pub fn next_page(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_status() {
        let resp: ExecutionResponse =
            serde_json::from_str(r#"{"kind": "content#ordersAcknowledgeResponse", "executionStatus": "duplicate"}"#)
                .unwrap();
        assert_eq!(resp.execution_status, ExecutionStatus::Duplicate);
        assert_eq!(resp.execution_status.to_string(), "duplicate");

        let resp: ExecutionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.execution_status, ExecutionStatus::Unknown);
    }

    #[test]
    fn test_next_page_token() {
        let last: OrdersListResponse = serde_json::from_str(r#"{"resources": []}"#).unwrap();
        assert_eq!(last.next_page(), None);

        let empty: OrdersListResponse =
            serde_json::from_str(r#"{"nextPageToken": ""}"#).unwrap();
        assert_eq!(empty.next_page(), None);

        let more: OrdersListResponse =
            serde_json::from_str(r#"{"nextPageToken": "p2"}"#).unwrap();
        assert_eq!(more.next_page(), Some("p2"));
    }
}
