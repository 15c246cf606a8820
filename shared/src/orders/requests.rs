//! Request bodies for the `orders` and `testorders` methods
//!
//! Every mutating request carries an `operation_id`, an idempotency token the
//! remote service uses to avoid applying a retried request twice.

use serde::{Deserialize, Serialize};

use super::types::{ShipmentLineItem, ShipmentStatus};

/// Template used when the sandbox creates a test order
pub const DEFAULT_TEST_ORDER_TEMPLATE: &str = "template1";

// ============================================================================
// Reasons
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CancelReason {
    CustomerInitiatedCancel,
    InvalidCoupon,
    MalformedShippingAddress,
    NoInventory,
    Other,
    PriceError,
    ShippingPriceError,
    TaxError,
    UndeliverableShippingAddress,
    UnsupportedPoBoxAddress,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReturnReason {
    CustomerDiscretionaryReturn,
    CustomerInitiatedMerchantCancel,
    DeliveredTooLate,
    ExpiredItem,
    InvalidCoupon,
    MalformedShippingAddress,
    Other,
    ProductArrivedDamaged,
    ProductNotAsDescribed,
    QualityNotAsExpected,
    UndeliverableShippingAddress,
    UnsupportedPoBoxAddress,
    WrongProductShipped,
}

// ============================================================================
// Test Orders
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestOrderRequest {
    pub template_name: String,
}

impl CreateTestOrderRequest {
    pub fn from_template(template_name: impl Into<String>) -> Self {
        Self {
            template_name: template_name.into(),
        }
    }
}

impl Default for CreateTestOrderRequest {
    fn default() -> Self {
        Self::from_template(DEFAULT_TEST_ORDER_TEMPLATE)
    }
}

// ============================================================================
// Listing
// ============================================================================

/// Query parameters of `orders.list`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledged: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl ListOrdersQuery {
    /// Orders the merchant has not acknowledged yet
    pub fn unacknowledged() -> Self {
        Self {
            acknowledged: Some(false),
            ..Self::default()
        }
    }

    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }
}

// ============================================================================
// Order Mutations
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeRequest {
    pub operation_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMerchantOrderIdRequest {
    pub operation_id: String,
    pub merchant_order_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CancelLineItemRequest {
    pub operation_id: String,
    pub line_item_id: String,
    pub quantity: u32,
    pub reason: CancelReason,
    pub reason_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipLineItemsRequest {
    pub operation_id: String,
    pub line_items: Vec<ShipmentLineItem>,
    pub carrier: String,
    pub shipment_id: String,
    pub tracking_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShipmentRequest {
    pub operation_id: String,
    pub carrier: String,
    pub tracking_id: String,
    pub shipment_id: String,
    pub status: ShipmentStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReturnLineItemRequest {
    pub operation_id: String,
    pub line_item_id: String,
    pub quantity: u32,
    pub reason: ReturnReason,
    pub reason_text: String,
}
