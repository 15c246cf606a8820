//! The test order walk-through
//!
//! Steps run in a fixed order against one order, each waiting for the previous
//! response: create, list, acknowledge, set merchant order id, cancel one unit,
//! advance, ship both line items, deliver both shipments, return one unit. The
//! order is re-fetched and printed after every mutation. The first failure ends
//! the run; nothing is retried.

use content_client::{OrdersApi, order_pages};
use futures::TryStreamExt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::orders::{
    AcknowledgeRequest, CancelLineItemRequest, CancelReason, CreateTestOrderRequest,
    ExecutionResponse, ListOrdersQuery, Order, OrderLineItem, ReturnLineItemRequest,
    ReturnReason, ShipLineItemsRequest, ShipmentLineItem, ShipmentStatus,
    UpdateMerchantOrderIdRequest, UpdateShipmentRequest,
};
use std::io::Write;

use crate::error::{WorkflowError, WorkflowResult};
use crate::operation_id::OperationIds;
use crate::printer::OrderSummary;

/// The walk-through ships line items #0 and #1
pub const REQUIRED_LINE_ITEMS: usize = 2;

pub const CANCEL_REASON_TEXT: &str = "Ran out of inventory while fulfilling request.";
pub const RETURN_REASON_TEXT: &str = "Item malfunctioning upon receipt.";

/// Identifiers generated at ship time and replayed when reporting delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentRecord {
    pub line_item_id: String,
    pub quantity: u32,
    pub carrier: String,
    pub shipment_id: String,
    pub tracking_id: String,
}

/// What a completed run did
#[derive(Debug, Clone)]
pub struct WorkflowReport {
    pub order_id: String,
    /// Every order returned by the unacknowledged listing, across all pages
    pub listed_order_ids: Vec<String>,
    pub merchant_order_id: String,
    /// First and second shipment, in ship order
    pub shipments: Vec<ShipmentRecord>,
    pub final_order: Order,
    pub operations_issued: u64,
}

pub struct OrdersWorkflow<'a, A: ?Sized, W> {
    api: &'a A,
    merchant_id: u64,
    operation_ids: OperationIds,
    rng: StdRng,
    out: W,
}

impl<'a, A, W> OrdersWorkflow<'a, A, W>
where
    A: OrdersApi + ?Sized,
    W: Write,
{
    pub fn new(api: &'a A, merchant_id: u64, out: W) -> Self {
        Self::with_rng(api, merchant_id, out, StdRng::from_entropy())
    }

    /// Deterministic merchant order, shipment and tracking ids
    pub fn with_seed(api: &'a A, merchant_id: u64, out: W, seed: u64) -> Self {
        Self::with_rng(api, merchant_id, out, StdRng::seed_from_u64(seed))
    }

    fn with_rng(api: &'a A, merchant_id: u64, out: W, rng: StdRng) -> Self {
        Self {
            api,
            merchant_id,
            operation_ids: OperationIds::new(),
            rng,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub async fn run(&mut self) -> WorkflowResult<WorkflowReport> {
        let order_id = self.create_test_order().await?;
        let listed_order_ids = self.list_unacknowledged().await?;

        self.acknowledge(&order_id).await?;
        let snapshot = self.fetch_order(&order_id).await?;
        require_line_items(&snapshot, REQUIRED_LINE_ITEMS)?;

        let merchant_order_id = self.update_merchant_order_id(&order_id).await?;
        let snapshot = self.fetch_order(&order_id).await?;

        let item = line_item(&snapshot, 0)?;
        self.cancel_one_unit(&order_id, item).await?;
        self.fetch_order(&order_id).await?;

        self.advance(&order_id).await?;
        let snapshot = self.fetch_order(&order_id).await?;

        // Kept for the return at the end
        let first_item = line_item(&snapshot, 0)?.clone();
        let first = self.ship(&order_id, &first_item, "first").await?;
        let snapshot = self.fetch_order(&order_id).await?;

        let second = self
            .ship(&order_id, line_item(&snapshot, 1)?, "second")
            .await?;
        self.fetch_order(&order_id).await?;

        self.deliver(&order_id, &first, "first").await?;
        self.fetch_order(&order_id).await?;

        self.deliver(&order_id, &second, "second").await?;
        self.fetch_order(&order_id).await?;

        self.return_one_unit(&order_id, &first_item).await?;
        let final_order = self.fetch_order(&order_id).await?;

        tracing::info!(
            order_id = %order_id,
            operations = self.operation_ids.issued(),
            "Order workflow complete"
        );

        Ok(WorkflowReport {
            order_id,
            listed_order_ids,
            merchant_order_id,
            shipments: vec![first, second],
            final_order,
            operations_issued: self.operation_ids.issued(),
        })
    }

    async fn create_test_order(&mut self) -> WorkflowResult<String> {
        self.begin("Creating test order... ")?;
        let response = self
            .api
            .create_test_order(self.merchant_id, &CreateTestOrderRequest::default())
            .await?;
        writeln!(self.out, "done.")?;
        writeln!(self.out, "Order \"{}\" created.", response.order_id)?;
        writeln!(self.out)?;
        Ok(response.order_id)
    }

    /// Print every unacknowledged order, one page at a time
    async fn list_unacknowledged(&mut self) -> WorkflowResult<Vec<String>> {
        writeln!(
            self.out,
            "Listing unacknowledged orders for merchant {}:",
            self.merchant_id
        )?;

        let mut listed = Vec::new();
        let mut pages = std::pin::pin!(order_pages(
            self.api,
            self.merchant_id,
            ListOrdersQuery::unacknowledged()
        ));
        while let Some(page) = pages.try_next().await? {
            for order in &page.resources {
                write!(self.out, "{}", OrderSummary(order))?;
                listed.push(order.id.clone());
            }
        }
        writeln!(self.out)?;

        tracing::debug!(count = listed.len(), "Listed unacknowledged orders");
        Ok(listed)
    }

    async fn acknowledge(&mut self, order_id: &str) -> WorkflowResult<()> {
        self.begin(&format!("Acknowledging order \"{}\"... ", order_id))?;
        let request = AcknowledgeRequest {
            operation_id: self.operation_ids.mint(),
        };
        let response = self
            .api
            .acknowledge(self.merchant_id, order_id, &request)
            .await?;
        self.finish(&response)
    }

    async fn update_merchant_order_id(&mut self, order_id: &str) -> WorkflowResult<String> {
        let merchant_order_id = format!("test order {}", self.random_id());
        self.begin(&format!(
            "Updating merchant order ID to \"{}\"... ",
            merchant_order_id
        ))?;
        let request = UpdateMerchantOrderIdRequest {
            operation_id: self.operation_ids.mint(),
            merchant_order_id: merchant_order_id.clone(),
        };
        let response = self
            .api
            .update_merchant_order_id(self.merchant_id, order_id, &request)
            .await?;
        self.finish(&response)?;
        Ok(merchant_order_id)
    }

    async fn cancel_one_unit(
        &mut self,
        order_id: &str,
        item: &OrderLineItem,
    ) -> WorkflowResult<()> {
        self.begin(&format!("Canceling one unit of {}... ", describe(item)))?;
        let request = CancelLineItemRequest {
            operation_id: self.operation_ids.mint(),
            line_item_id: item.id.clone(),
            quantity: 1,
            reason: CancelReason::NoInventory,
            reason_text: CANCEL_REASON_TEXT.to_string(),
        };
        let response = self
            .api
            .cancel_line_item(self.merchant_id, order_id, &request)
            .await?;
        self.finish(&response)
    }

    async fn advance(&mut self, order_id: &str) -> WorkflowResult<()> {
        self.begin("Advancing test order... ")?;
        self.api
            .advance_test_order(self.merchant_id, order_id)
            .await?;
        writeln!(self.out, "done.")?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Ship the whole pending quantity of `item` as one new shipment
    async fn ship(
        &mut self,
        order_id: &str,
        item: &OrderLineItem,
        ordinal: &str,
    ) -> WorkflowResult<ShipmentRecord> {
        let carrier = item
            .carrier()
            .ok_or_else(|| WorkflowError::MissingCarrier {
                line_item_id: item.id.clone(),
            })?
            .to_string();

        self.begin(&format!(
            "Notifying Google about shipment of {} line item... ",
            ordinal
        ))?;
        let record = ShipmentRecord {
            line_item_id: item.id.clone(),
            quantity: item.quantity_pending,
            carrier,
            shipment_id: self.random_id(),
            tracking_id: self.random_id(),
        };
        let request = ShipLineItemsRequest {
            operation_id: self.operation_ids.mint(),
            line_items: vec![ShipmentLineItem::new(
                record.line_item_id.clone(),
                record.quantity,
            )],
            carrier: record.carrier.clone(),
            shipment_id: record.shipment_id.clone(),
            tracking_id: record.tracking_id.clone(),
        };
        let response = self
            .api
            .ship_line_items(self.merchant_id, order_id, &request)
            .await?;
        self.finish(&response)?;
        Ok(record)
    }

    async fn deliver(
        &mut self,
        order_id: &str,
        shipment: &ShipmentRecord,
        ordinal: &str,
    ) -> WorkflowResult<()> {
        self.begin(&format!(
            "Notifying Google about delivery of {} line item... ",
            ordinal
        ))?;
        let request = UpdateShipmentRequest {
            operation_id: self.operation_ids.mint(),
            carrier: shipment.carrier.clone(),
            tracking_id: shipment.tracking_id.clone(),
            shipment_id: shipment.shipment_id.clone(),
            status: ShipmentStatus::Delivered,
        };
        let response = self
            .api
            .update_shipment(self.merchant_id, order_id, &request)
            .await?;
        self.finish(&response)
    }

    async fn return_one_unit(
        &mut self,
        order_id: &str,
        item: &OrderLineItem,
    ) -> WorkflowResult<()> {
        self.begin("Notifying Google about return of first line item... ")?;
        let request = ReturnLineItemRequest {
            operation_id: self.operation_ids.mint(),
            line_item_id: item.id.clone(),
            quantity: 1,
            reason: ReturnReason::ProductArrivedDamaged,
            reason_text: RETURN_REASON_TEXT.to_string(),
        };
        let response = self
            .api
            .return_line_item(self.merchant_id, order_id, &request)
            .await?;
        self.finish(&response)
    }

    /// Refresh the local snapshot and print it
    async fn fetch_order(&mut self, order_id: &str) -> WorkflowResult<Order> {
        self.begin(&format!("Retrieving order \"{}\"... ", order_id))?;
        let order = self.api.get(self.merchant_id, order_id).await?;
        writeln!(self.out, "done.")?;
        writeln!(self.out)?;
        write!(self.out, "{}", OrderSummary(&order))?;
        writeln!(self.out)?;
        Ok(order)
    }

    fn begin(&mut self, message: &str) -> WorkflowResult<()> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(())
    }

    fn finish(&mut self, response: &ExecutionResponse) -> WorkflowResult<()> {
        writeln!(
            self.out,
            "done with status \"{}\".",
            response.execution_status
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    fn random_id(&mut self) -> String {
        self.rng.gen_range(i64::MIN..=i64::MAX).to_string()
    }
}

fn line_item(order: &Order, index: usize) -> WorkflowResult<&OrderLineItem> {
    order
        .line_items
        .get(index)
        .ok_or_else(|| WorkflowError::MissingLineItem {
            order_id: order.id.clone(),
            index,
            found: order.line_items.len(),
        })
}

fn require_line_items(order: &Order, count: usize) -> WorkflowResult<()> {
    match count.checked_sub(1) {
        Some(last) => line_item(order, last).map(|_| ()),
        None => Ok(()),
    }
}

fn describe(item: &OrderLineItem) -> String {
    match item.title() {
        Some(title) => format!("\"{}\" (line item {})", title, item.id),
        None => format!("line item {}", item.id),
    }
}
