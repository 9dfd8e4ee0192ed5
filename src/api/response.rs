//! Response types for the leave engine API.
//!
//! This module defines the error response structures, the mapping from
//! [`EngineError`] to HTTP statuses, and the JSON views returned by handlers.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::LeaveRequest;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    fn not_found(code: &str, message: String) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiError::new(code, message))
    }

    fn conflict(code: &str, message: String) -> Self {
        Self::new(StatusCode::CONFLICT, ApiError::new(code, message))
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::ConfigParseError { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration parse error", message),
            ),
            EngineError::RenderError { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("RENDER_ERROR", "Document rendering failed", message),
            ),
            EngineError::EmployeeNotFound { .. } => Self::not_found("EMPLOYEE_NOT_FOUND", message),
            EngineError::LeaveRequestNotFound { .. } => {
                Self::not_found("LEAVE_REQUEST_NOT_FOUND", message)
            }
            EngineError::LeaveBalanceNotFound { .. } => {
                Self::not_found("LEAVE_BALANCE_NOT_FOUND", message)
            }
            EngineError::HolidayNotFound { .. } => Self::not_found("HOLIDAY_NOT_FOUND", message),
            EngineError::LetterheadNotFound { .. } => {
                Self::not_found("LETTERHEAD_NOT_FOUND", message)
            }
            EngineError::LetterNotFound { .. } => Self::not_found("LETTER_NOT_FOUND", message),
            EngineError::StudentNotFound { .. } => Self::not_found("STUDENT_NOT_FOUND", message),
            EngineError::InvalidEmployee { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            ),
            EngineError::InvalidStudent { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_STUDENT", message),
            ),
            EngineError::InvalidLeaveRequest { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_LEAVE_REQUEST", message),
            ),
            EngineError::InvalidLeaveBalance { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_LEAVE_BALANCE", message),
            ),
            EngineError::InvalidLetter { .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_LETTER", message),
            ),
            EngineError::DuplicateIdentityNumber { .. } => {
                Self::conflict("DUPLICATE_IDENTITY_NUMBER", message)
            }
            EngineError::DuplicateHoliday { .. } => Self::conflict("DUPLICATE_HOLIDAY", message),
            EngineError::DuplicateLeaveBalance { .. } => {
                Self::conflict("DUPLICATE_LEAVE_BALANCE", message)
            }
        }
    }
}

impl From<JsonRejection> for ApiErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let error = match rejection {
            // Field-level problems, including values refused by a type's own
            // validation (e.g. an end date before the start date).
            JsonRejection::JsonDataError(err) => ApiError::validation_error(err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
            }
            _ => ApiError::malformed_json("Failed to parse request body"),
        };
        ApiErrorResponse::new(StatusCode::BAD_REQUEST, error)
    }
}

impl From<PathRejection> for ApiErrorResponse {
    fn from(rejection: PathRejection) -> Self {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::new("INVALID_PATH", rejection.body_text()),
        )
    }
}

impl From<QueryRejection> for ApiErrorResponse {
    fn from(rejection: QueryRejection) -> Self {
        ApiErrorResponse::new(
            StatusCode::BAD_REQUEST,
            ApiError::new("INVALID_QUERY", rejection.body_text()),
        )
    }
}

/// A leave request with its computed day counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestView {
    /// The stored request.
    #[serde(flatten)]
    pub request: LeaveRequest,
    /// Business days consumed, against the current holidays.
    pub effective_days: u32,
    /// Calendar days covered.
    pub calendar_days: i64,
}

/// Result of an ad-hoc leave-day calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveDaysResponse {
    /// Business days in the range.
    pub effective_days: u32,
    /// `effective_days` in Indonesian words.
    pub effective_days_words: String,
    /// Calendar days in the range.
    pub calendar_days: i64,
    /// Number of holidays consulted.
    pub holidays_considered: usize,
}

/// A number and its Indonesian spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerbilangResponse {
    /// The input number.
    pub number: u64,
    /// The number in words.
    pub words: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response: ApiErrorResponse = EngineError::EmployeeNotFound { id: 5 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "EMPLOYEE_NOT_FOUND");
        assert_eq!(response.error.message, "Employee not found: 5");
    }

    #[test]
    fn test_duplicates_map_to_409() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 17).unwrap();
        let response: ApiErrorResponse = EngineError::DuplicateHoliday { date }.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "DUPLICATE_HOLIDAY");

        let response: ApiErrorResponse =
            EngineError::DuplicateLeaveBalance { employee_id: 1 }.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response: ApiErrorResponse = EngineError::InvalidLeaveRequest {
            message: "end date 2026-01-01 is before start date 2026-01-02".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_LEAVE_REQUEST");
    }

    #[test]
    fn test_invalid_balance_maps_to_400() {
        let response: ApiErrorResponse = EngineError::InvalidLeaveBalance {
            message: "buckets exceed the supported range".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_LEAVE_BALANCE");
    }

    #[test]
    fn test_student_errors() {
        let response: ApiErrorResponse = EngineError::StudentNotFound { id: 3 }.into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "STUDENT_NOT_FOUND");

        let response: ApiErrorResponse = EngineError::InvalidStudent {
            field: "class".to_string(),
            message: "must not be empty".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "INVALID_STUDENT");
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let response: ApiErrorResponse = EngineError::ConfigNotFound {
            path: "app.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
        assert!(response.error.details.unwrap().contains("app.yaml"));
    }
}
