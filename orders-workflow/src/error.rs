//! Workflow error types

use content_client::ClientError;
use thiserror::Error;

/// Why a workflow run stopped
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A remote call failed
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Order {order_id} has {found} line item(s), but the workflow needs line item #{index}")]
    MissingLineItem {
        order_id: String,
        index: usize,
        found: usize,
    },

    #[error("Line item {line_item_id} has no shipping carrier")]
    MissingCarrier { line_item_id: String },

    #[error("Failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}

pub type WorkflowResult<T> = Result<T, WorkflowError>;
