//! HTTP API module for the Tool Box calculation engine.
//!
//! This module provides the REST endpoints the UI shell calls: deadline,
//! settlement, and receipt-batch calculations.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DeadlineRequest, ReceiptsRequest, SettlementRequest};
pub use response::{
    ApiError, ApiErrorResponse, DeadlineResponse, ReceiptsResponse, SettlementResponse,
};
pub use state::AppState;
