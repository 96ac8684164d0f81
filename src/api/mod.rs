//! HTTP API module for the CPF Contribution Engine.
//!
//! This module provides the REST API endpoints for calculating CPF
//! contributions and querying contribution rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BulkCalculationRequest, CalculationRequest, RatesQuery};
pub use response::ApiError;
pub use state::AppState;
