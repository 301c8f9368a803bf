//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use forn_auth::AuthError;
use forn_core::ErrorLocation;
use forn_db::DbError;
use forn_directory::{DirectoryError, DirectoryIssue};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Auth rejections list every reason at once, in the shape the identity
/// endpoints respond with
#[derive(Debug, Serialize)]
pub struct IssueListResponse {
    pub errors: Vec<DirectoryIssue>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Registration or login refused (400); carries the full issue list
    #[error("Request rejected with {} issue(s) {location}", issues.len())]
    Rejected {
        issues: Vec<DirectoryIssue>,
        location: ErrorLocation,
    },

    /// A write reported zero affected rows after the record was seen (400)
    #[error("Save failed: {message} {location}")]
    Save {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Rejected { issues, .. } => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(IssueListResponse { errors: issues }),
                )
                    .into_response();
            }
            ApiError::Save { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "SAVE_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Log the database error for debugging
        log::error!("Database error: {}", e);

        match e {
            DbError::Sqlx {
                source: sqlx::Error::RowNotFound,
                ..
            } => ApiError::NotFound {
                message: "Resource not found".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            DbError::Sqlx { .. } | DbError::Decode { .. } => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert user directory errors to API errors
impl From<DirectoryError> for ApiError {
    #[track_caller]
    fn from(e: DirectoryError) -> Self {
        match e {
            DirectoryError::Rejected { issues } => ApiError::Rejected {
                issues,
                location: ErrorLocation::from(Location::caller()),
            },
            DirectoryError::Hash { message, .. } => {
                log::error!("Password hashing error: {}", message);
                ApiError::Internal {
                    message: "Credential processing failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            DirectoryError::Db(e) => e.into(),
        }
    }
}

/// Convert token issuance errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::error!("Token error: {}", e);
        ApiError::Internal {
            message: "Token issuance failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
