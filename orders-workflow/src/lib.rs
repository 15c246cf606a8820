//! Orders Workflow - sandbox walk-through of the order lifecycle
//!
//! Creates a test order and drives it through acknowledgement, cancellation,
//! shipping, delivery and return, printing the order after each step.

pub mod app;
pub mod error;
pub mod logger;
pub mod operation_id;
pub mod printer;
pub mod workflow;

pub use app::{Cli, run, setup_environment};
pub use error::{WorkflowError, WorkflowResult};
pub use operation_id::OperationIds;
pub use printer::OrderSummary;
pub use workflow::{OrdersWorkflow, ShipmentRecord, WorkflowReport};
