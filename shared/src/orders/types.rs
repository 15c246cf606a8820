//! Order resource types as returned by the Content API `orders` collection

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Status Enums
// ============================================================================

/// Order status as reported by the remote service.
///
/// The remote lifecycle is roughly
/// `inProgress -> pendingShipment -> partiallyShipped -> shipped -> delivered -> returned`,
/// with `canceled` reachable before shipment. Nothing here enforces it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    InProgress,
    PendingShipment,
    PartiallyShipped,
    Shipped,
    PartiallyDelivered,
    Delivered,
    PartiallyReturned,
    Returned,
    Canceled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "inProgress",
            Self::PendingShipment => "pendingShipment",
            Self::PartiallyShipped => "partiallyShipped",
            Self::Shipped => "shipped",
            Self::PartiallyDelivered => "partiallyDelivered",
            Self::Delivered => "delivered",
            Self::PartiallyReturned => "partiallyReturned",
            Self::Returned => "returned",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shipment status, used both on order snapshots and in `updateShipment`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum ShipmentStatus {
    Shipped,
    Delivered,
    Undeliverable,
    ReadyForPickup,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Undeliverable => "undeliverable",
            Self::ReadyForPickup => "readyForPickup",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Value Types
// ============================================================================

/// Monetary amount. The API transmits the value as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Price {
    pub value: String,
    pub currency: String,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemProduct {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

/// Shipping method chosen by the customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_days_in_transit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_days_in_transit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<ShippingMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_by_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliver_by_date: Option<String>,
}

// ============================================================================
// Line Items
// ============================================================================

/// One line of an order.
///
/// Quantities only ever decrease on the pending side: the remote service moves
/// units from `quantity_pending` into shipped/canceled as mutations are recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<OrderLineItemProduct>,
    #[serde(default)]
    pub quantity_ordered: u32,
    #[serde(default)]
    pub quantity_pending: u32,
    #[serde(default)]
    pub quantity_shipped: u32,
    #[serde(default)]
    pub quantity_delivered: u32,
    #[serde(default)]
    pub quantity_returned: u32,
    #[serde(default)]
    pub quantity_canceled: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_details: Option<ShippingDetails>,
}

impl OrderLineItem {
    /// Carrier of the customer's chosen shipping method, if any
    pub fn carrier(&self) -> Option<&str> {
        self.shipping_details
            .as_ref()
            .and_then(|d| d.method.as_ref())
            .and_then(|m| m.carrier.as_deref())
    }

    pub fn title(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.title.as_deref())
    }
}

/// Line item quantity reference used by shipments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentLineItem {
    pub line_item_id: String,
    pub quantity: u32,
}

impl ShipmentLineItem {
    pub fn new(line_item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            line_item_id: line_item_id.into(),
            quantity,
        }
    }
}

/// Shipment recorded against an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipment {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub status: ShipmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub line_items: Vec<ShipmentLineItem>,
}

// ============================================================================
// Order
// ============================================================================

/// Snapshot of an order owned by the remote service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    /// uint64 on the wire, encoded as a JSON string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_order_id: Option<String>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub acknowledged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placed_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<OrderCustomer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Price>,
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
    #[serde(default)]
    pub shipments: Vec<OrderShipment>,
}

impl Order {
    pub fn line_item(&self, id: &str) -> Option<&OrderLineItem> {
        self.line_items.iter().find(|item| item.id == id)
    }

    /// Units still waiting to be shipped across all line items
    pub fn total_pending(&self) -> u32 {
        self.line_items.iter().map(|item| item.quantity_pending).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserializes_camel_case() {
        let json = r#"{
            "kind": "content#order",
            "id": "TEST-1234",
            "merchantId": "123456789",
            "merchantOrderId": "test order 1",
            "status": "pendingShipment",
            "acknowledged": true,
            "lineItems": [{
                "id": "LI1",
                "product": {"title": "Chromecast", "offerId": "cc-1", "price": {"value": "35.00", "currency": "USD"}},
                "quantityOrdered": 3,
                "quantityPending": 2,
                "quantityCanceled": 1,
                "shippingDetails": {"method": {"carrier": "FedEx", "methodName": "Ground"}}
            }]
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "TEST-1234");
        assert_eq!(order.merchant_id.as_deref(), Some("123456789"));
        assert_eq!(order.status, OrderStatus::PendingShipment);
        assert!(order.acknowledged);

        let item = order.line_item("LI1").unwrap();
        assert_eq!(item.quantity_ordered, 3);
        assert_eq!(item.quantity_pending, 2);
        assert_eq!(item.quantity_shipped, 0);
        assert_eq!(item.carrier(), Some("FedEx"));
        assert_eq!(item.title(), Some("Chromecast"));
        assert!(order.shipments.is_empty());
    }

    #[test]
    fn test_unknown_status_falls_back() {
        let order: Order =
            serde_json::from_str(r#"{"id": "A", "status": "somethingNew"}"#).unwrap();
        assert_eq!(order.status, OrderStatus::Unknown);

        let shipment: OrderShipment =
            serde_json::from_str(r#"{"id": "S", "status": "lost"}"#).unwrap();
        assert_eq!(shipment.status, ShipmentStatus::Unknown);
    }

    #[test]
    fn test_total_pending() {
        let order = Order {
            id: "A".into(),
            line_items: vec![
                OrderLineItem {
                    id: "LI1".into(),
                    quantity_pending: 2,
                    ..Default::default()
                },
                OrderLineItem {
                    id: "LI2".into(),
                    quantity_pending: 1,
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(order.total_pending(), 3);
        assert!(order.line_item("LI3").is_none());
    }
}
