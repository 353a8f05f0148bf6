//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoint for running a payroll
//! calculation over a batch of punch sources.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PayrollRequest, PunchSourceRequest};
pub use response::{ApiError, PayrollResponse};
pub use state::AppState;
