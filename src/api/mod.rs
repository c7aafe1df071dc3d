//! HTTP API module for the shift payroll engine.
//!
//! This module exposes the calculations as stateless JSON endpoints: the
//! caller sends the records it holds and receives computed figures back.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalculateShiftRequest, PayoutDraftRequest, PeriodSummaryRequest, RecalculateRequest,
    ShiftQueryRequest,
};
pub use response::{ApiError, ApiErrorResponse, HealthResponse, ShiftQueryResponse};
pub use state::AppState;
