//! The `orders` service boundary

use async_trait::async_trait;
use serde::Deserialize;
use shared::orders::{
    AcknowledgeRequest, CancelLineItemRequest, CreateTestOrderRequest, CreateTestOrderResponse,
    ExecutionResponse, ListOrdersQuery, Order, OrdersListResponse, ReturnLineItemRequest,
    ShipLineItemsRequest, UpdateMerchantOrderIdRequest, UpdateShipmentRequest,
};

use crate::{ClientResult, ContentClient};

/// Order management operations of the Content API.
///
/// Every call is one request/response round trip. Mutating calls carry an
/// operation id in their request body; retrying with the same id is not
/// applied twice by the remote service.
#[async_trait]
pub trait OrdersApi: Send + Sync {
    /// Sandbox only: create an order from a predefined template
    async fn create_test_order(
        &self,
        merchant_id: u64,
        request: &CreateTestOrderRequest,
    ) -> ClientResult<CreateTestOrderResponse>;

    /// One page of orders
    async fn list(&self, merchant_id: u64, query: &ListOrdersQuery)
    -> ClientResult<OrdersListResponse>;

    async fn get(&self, merchant_id: u64, order_id: &str) -> ClientResult<Order>;

    async fn acknowledge(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &AcknowledgeRequest,
    ) -> ClientResult<ExecutionResponse>;

    async fn update_merchant_order_id(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &UpdateMerchantOrderIdRequest,
    ) -> ClientResult<ExecutionResponse>;

    async fn cancel_line_item(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &CancelLineItemRequest,
    ) -> ClientResult<ExecutionResponse>;

    /// Sandbox only: move a test order to the shippable state
    async fn advance_test_order(&self, merchant_id: u64, order_id: &str) -> ClientResult<()>;

    async fn ship_line_items(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &ShipLineItemsRequest,
    ) -> ClientResult<ExecutionResponse>;

    async fn update_shipment(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &UpdateShipmentRequest,
    ) -> ClientResult<ExecutionResponse>;

    async fn return_line_item(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &ReturnLineItemRequest,
    ) -> ClientResult<ExecutionResponse>;
}

/// Body of `testorders.advance`; carries only `kind`
#[derive(Deserialize)]
struct AdvanceTestOrderResponse {}

#[async_trait]
impl OrdersApi for ContentClient {
    async fn create_test_order(
        &self,
        merchant_id: u64,
        request: &CreateTestOrderRequest,
    ) -> ClientResult<CreateTestOrderResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(merchant_id, template = %request.template_name, "Creating test order");
        self.post(&[&merchant, "testorders"], request).await
    }

    async fn list(
        &self,
        merchant_id: u64,
        query: &ListOrdersQuery,
    ) -> ClientResult<OrdersListResponse> {
        let merchant = merchant_id.to_string();
        tracing::debug!(merchant_id, page_token = ?query.page_token, "Listing orders");
        self.get_with_query(&[&merchant, "orders"], query).await
    }

    async fn get(&self, merchant_id: u64, order_id: &str) -> ClientResult<Order> {
        let merchant = merchant_id.to_string();
        tracing::debug!(merchant_id, order_id, "Getting order");
        ContentClient::get(self, &[&merchant, "orders", order_id]).await
    }

    async fn acknowledge(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &AcknowledgeRequest,
    ) -> ClientResult<ExecutionResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(merchant_id, order_id, operation_id = %request.operation_id, "Acknowledging order");
        self.post(&[&merchant, "orders", order_id, "acknowledge"], request)
            .await
    }

    async fn update_merchant_order_id(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &UpdateMerchantOrderIdRequest,
    ) -> ClientResult<ExecutionResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(merchant_id, order_id, operation_id = %request.operation_id, "Updating merchant order id");
        self.post(
            &[&merchant, "orders", order_id, "updateMerchantOrderId"],
            request,
        )
        .await
    }

    async fn cancel_line_item(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &CancelLineItemRequest,
    ) -> ClientResult<ExecutionResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(
            merchant_id,
            order_id,
            operation_id = %request.operation_id,
            line_item_id = %request.line_item_id,
            quantity = request.quantity,
            "Canceling line item"
        );
        self.post(&[&merchant, "orders", order_id, "cancelLineItem"], request)
            .await
    }

    async fn advance_test_order(&self, merchant_id: u64, order_id: &str) -> ClientResult<()> {
        let merchant = merchant_id.to_string();
        tracing::info!(merchant_id, order_id, "Advancing test order");
        let _: AdvanceTestOrderResponse = self
            .post_empty(&[&merchant, "testorders", order_id, "advance"])
            .await?;
        Ok(())
    }

    async fn ship_line_items(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &ShipLineItemsRequest,
    ) -> ClientResult<ExecutionResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(
            merchant_id,
            order_id,
            operation_id = %request.operation_id,
            shipment_id = %request.shipment_id,
            "Shipping line items"
        );
        self.post(&[&merchant, "orders", order_id, "shipLineItems"], request)
            .await
    }

    async fn update_shipment(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &UpdateShipmentRequest,
    ) -> ClientResult<ExecutionResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(
            merchant_id,
            order_id,
            operation_id = %request.operation_id,
            shipment_id = %request.shipment_id,
            status = %request.status,
            "Updating shipment"
        );
        self.post(&[&merchant, "orders", order_id, "updateShipment"], request)
            .await
    }

    async fn return_line_item(
        &self,
        merchant_id: u64,
        order_id: &str,
        request: &ReturnLineItemRequest,
    ) -> ClientResult<ExecutionResponse> {
        let merchant = merchant_id.to_string();
        tracing::info!(
            merchant_id,
            order_id,
            operation_id = %request.operation_id,
            line_item_id = %request.line_item_id,
            quantity = request.quantity,
            "Returning line item"
        );
        self.post(&[&merchant, "orders", order_id, "returnLineItem"], request)
            .await
    }
}
