//! HTTP API module for the Bill Allocation Engine.
//!
//! This module provides the REST API endpoint for allocating a receipt
//! among a group of people.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AllocationRequest;
pub use response::ApiError;
pub use state::AppState;
