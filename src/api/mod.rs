//! HTTP API module for the Leave Engine.
//!
//! This module provides the REST endpoints for employee, student, leave,
//! holiday and letter records, the leave-day and terbilang calculators, and
//! the rendered leave letter, leave report and letter documents.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    LeaveBalanceRequest, LeaveDaysRequest, LeaveReportQuery, LetterListQuery, StudentListQuery,
};
pub use response::{
    ApiError, ApiErrorResponse, LeaveDaysResponse, LeaveRequestView, TerbilangResponse,
};
pub use state::AppState;
