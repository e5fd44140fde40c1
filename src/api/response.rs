//! Response types for the driver salary API.
//!
//! This module defines the success envelope, the error body, and the mapping
//! from [`SalaryError`] onto HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::aggregation::SalaryPage;
use crate::error::SalaryError;
use crate::models::DriverSalarySummary;

/// Success envelope for the `/list` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryListResponse {
    /// The filtered salary summaries for the requested page.
    pub data: Vec<DriverSalarySummary>,
    /// Total roster rows under the driver filters.
    pub total_row: i64,
    /// The requested 1-based page number.
    pub current: i64,
    /// The requested page length.
    pub page_size: i64,
    /// Always true on the success path.
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
}

impl From<SalaryPage> for SalaryListResponse {
    fn from(page: SalaryPage) -> Self {
        SalaryListResponse {
            data: page.data,
            total_row: page.total_row,
            current: page.current,
            page_size: page.page_size,
            is_success: true,
        }
    }
}

/// Error body returned for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable failure message.
    pub message: String,
    /// Always false on the failure path.
    #[serde(rename = "isSuccess")]
    pub is_success: bool,
}

impl ApiError {
    /// Creates a new error body with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: false,
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<SalaryError> for ApiErrorResponse {
    fn from(error: SalaryError) -> Self {
        match error {
            SalaryError::Validation { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new(message),
            },
            // Store and configuration faults stay opaque to the caller
            SalaryError::Store { .. } | SalaryError::Config { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("Internal server error"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_serializes_is_success_camel_case() {
        let response = SalaryListResponse {
            data: vec![],
            total_row: 0,
            current: 1,
            page_size: 10,
            is_success: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"isSuccess\":true"));
        assert!(json.contains("\"total_row\":0"));
        assert!(json.contains("\"data\":[]"));
        assert!(!json.contains("is_success"));
    }

    #[test]
    fn test_error_body_serialization() {
        let error = ApiError::new("Invalid month or year");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"message\":\"Invalid month or year\""));
        assert!(json.contains("\"isSuccess\":false"));
    }

    #[test]
    fn test_validation_error_maps_to_400_with_message() {
        let error = SalaryError::validation("Month and year are required");
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.message, "Month and year are required");
        assert!(!response.error.is_success);
    }

    #[test]
    fn test_store_error_maps_to_opaque_500() {
        let error = SalaryError::Store {
            message: "secret connection detail".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.message, "Internal server error");
    }

    #[test]
    fn test_envelope_built_from_page() {
        let page = SalaryPage {
            data: vec![],
            total_row: 42,
            current: 3,
            page_size: 20,
        };
        let response = SalaryListResponse::from(page);
        assert_eq!(response.total_row, 42);
        assert_eq!(response.current, 3);
        assert_eq!(response.page_size, 20);
        assert!(response.is_success);
    }
}
