//! Order management API

mod api;
mod pager;

pub use api::OrdersApi;
pub use pager::{collect_orders, order_pages};
