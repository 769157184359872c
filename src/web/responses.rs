//! Standardized response envelope and error mapping
//!
//! Every endpoint answers with `{success, data?, message?}`; failures carry
//! `success: false` and a user-facing message. Internal error details stay in
//! the logs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::errors::{AppError, RepositoryError};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Repository(RepositoryError::RecordNotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Repository(RepositoryError::ConstraintViolation { .. }) => {
                StatusCode::CONFLICT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            AppError::Validation { message } => message.clone(),
            AppError::NotFound { resource, id } => format!("{resource} with id {id} not found"),
            AppError::Repository(RepositoryError::RecordNotFound { table, field, value }) => {
                format!("No {table} record with {field} = {value}")
            }
            AppError::Repository(RepositoryError::ConstraintViolation { .. }) => {
                "The record conflicts with an existing one".to_string()
            }
            _ => {
                // Internal details are logged, not exposed
                error!(error = ?self, "request failed");
                "An unexpected error occurred".to_string()
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}
