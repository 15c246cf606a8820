//! Console rendering of order snapshots

use shared::orders::{Order, OrderLineItem, OrderShipment};
use std::fmt;

/// Human-readable, multi-line view of an [`Order`]
pub struct OrderSummary<'a>(pub &'a Order);

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;
        writeln!(f, "Order {}:", order.id)?;
        writeln!(f, "- Status: {}", order.status)?;
        if let Some(merchant_id) = &order.merchant_id {
            writeln!(f, "- Merchant: {}", merchant_id)?;
        }
        if let Some(merchant_order_id) = &order.merchant_order_id {
            writeln!(f, "- Merchant order ID: {}", merchant_order_id)?;
        }
        if let Some(customer) = &order.customer {
            match (&customer.full_name, &customer.email) {
                (Some(name), Some(email)) => writeln!(f, "- Customer: {} <{}>", name, email)?,
                (Some(name), None) => writeln!(f, "- Customer: {}", name)?,
                (None, Some(email)) => writeln!(f, "- Customer: <{}>", email)?,
                (None, None) => {}
            }
        }
        if let Some(placed) = &order.placed_date {
            writeln!(f, "- Placed on date: {}", placed)?;
        }
        if let Some(amount) = &order.net_amount {
            writeln!(f, "- Net amount: {}", amount)?;
        }
        if let Some(payment) = &order.payment_status {
            writeln!(f, "- Payment status: {}", payment)?;
        }
        writeln!(
            f,
            "- Acknowledged: {}",
            if order.acknowledged { "yes" } else { "no" }
        )?;

        if !order.line_items.is_empty() {
            writeln!(f, "- {} line item(s):", order.line_items.len())?;
            for item in &order.line_items {
                write_line_item(f, item)?;
            }
        }
        if !order.shipments.is_empty() {
            writeln!(f, "- {} shipment(s):", order.shipments.len())?;
            for shipment in &order.shipments {
                write_shipment(f, shipment)?;
            }
        }
        Ok(())
    }
}

fn write_line_item(f: &mut fmt::Formatter<'_>, item: &OrderLineItem) -> fmt::Result {
    writeln!(f, "  Line item {}", item.id)?;
    if let Some(product) = &item.product {
        match (&product.title, &product.offer_id) {
            (Some(title), Some(offer)) => writeln!(f, "  - Product: {} (offer {})", title, offer)?,
            (Some(title), None) => writeln!(f, "  - Product: {}", title)?,
            (None, Some(offer)) => writeln!(f, "  - Product: offer {}", offer)?,
            (None, None) => {}
        }
        if let Some(price) = &product.price {
            writeln!(f, "  - Price: {}", price)?;
        }
    }
    writeln!(
        f,
        "  - Quantity: ordered {}, pending {}, shipped {}, delivered {}, returned {}, canceled {}",
        item.quantity_ordered,
        item.quantity_pending,
        item.quantity_shipped,
        item.quantity_delivered,
        item.quantity_returned,
        item.quantity_canceled
    )?;
    if let Some(carrier) = item.carrier() {
        writeln!(f, "  - Carrier: {}", carrier)?;
    }
    Ok(())
}

fn write_shipment(f: &mut fmt::Formatter<'_>, shipment: &OrderShipment) -> fmt::Result {
    writeln!(f, "  Shipment {}", shipment.id)?;
    if let Some(carrier) = &shipment.carrier {
        writeln!(f, "  - Carrier: {}", carrier)?;
    }
    if let Some(tracking) = &shipment.tracking_id {
        writeln!(f, "  - Tracking ID: {}", tracking)?;
    }
    writeln!(f, "  - Status: {}", shipment.status)?;
    for line in &shipment.line_items {
        writeln!(f, "  - Line item {}: quantity {}", line.line_item_id, line.quantity)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::orders::{
        OrderCustomer, OrderLineItemProduct, OrderStatus, Price, ShipmentLineItem,
        ShipmentStatus, ShippingDetails, ShippingMethod,
    };

    fn sample_order() -> Order {
        Order {
            id: "TEST-1".into(),
            merchant_order_id: Some("test order 42".into()),
            status: OrderStatus::PartiallyShipped,
            acknowledged: true,
            customer: Some(OrderCustomer {
                full_name: Some("Pog Dog".into()),
                email: None,
            }),
            line_items: vec![OrderLineItem {
                id: "LI1".into(),
                product: Some(OrderLineItemProduct {
                    title: Some("Chromecast".into()),
                    offer_id: Some("cc-1".into()),
                    price: Some(Price {
                        value: "35.00".into(),
                        currency: "USD".into(),
                    }),
                    ..Default::default()
                }),
                quantity_ordered: 2,
                quantity_pending: 0,
                quantity_shipped: 1,
                quantity_canceled: 1,
                shipping_details: Some(ShippingDetails {
                    method: Some(ShippingMethod {
                        carrier: Some("FedEx".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                ..Default::default()
            }],
            shipments: vec![OrderShipment {
                id: "S1".into(),
                carrier: Some("FedEx".into()),
                tracking_id: Some("T1".into()),
                status: ShipmentStatus::Shipped,
                line_items: vec![ShipmentLineItem::new("LI1", 1)],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_lists_items_and_shipments() {
        let text = OrderSummary(&sample_order()).to_string();
        assert!(text.starts_with("Order TEST-1:\n"));
        assert!(text.contains("- Status: partiallyShipped\n"));
        assert!(text.contains("- Merchant order ID: test order 42\n"));
        assert!(text.contains("- Customer: Pog Dog\n"));
        assert!(text.contains("- Acknowledged: yes\n"));
        assert!(text.contains("  - Product: Chromecast (offer cc-1)\n"));
        assert!(text.contains("  - Price: 35.00 USD\n"));
        assert!(text.contains(
            "  - Quantity: ordered 2, pending 0, shipped 1, delivered 0, returned 0, canceled 1\n"
        ));
        assert!(text.contains("  - Carrier: FedEx\n"));
        assert!(text.contains("  Shipment S1\n"));
        assert!(text.contains("  - Tracking ID: T1\n"));
        assert!(text.contains("  - Line item LI1: quantity 1\n"));
    }

    #[test]
    fn test_summary_skips_missing_fields() {
        let order = Order {
            id: "BARE".into(),
            ..Default::default()
        };
        let text = OrderSummary(&order).to_string();
        assert_eq!(text, "Order BARE:\n- Status: unknown\n- Acknowledged: no\n");
    }
}
