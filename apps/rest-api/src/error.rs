//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Stockroom                              │
//! │                                                                         │
//! │  Handler                                                                │
//! │  Result<T, ApiError>                                                    │
//! │       │                                                                 │
//! │       ├── ValidationError (core) ──► 400 {"name": ["...required."]}    │
//! │       │                                                                 │
//! │       ├── DbError::UniqueViolation ► 409 {"sku": ["...exists."]}       │
//! │       │                                                                 │
//! │       ├── DbError::NotFound ───────► 404 {"detail": "Not found."}      │
//! │       │                                                                 │
//! │       └── anything else ───────────► 500 (logged, generic body)        │
//! │                                                                         │
//! │  The client treats every rejected call uniformly, so the contract      │
//! │  here is the status code plus one of the two JSON body shapes.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use stockroom_core::ValidationErrors;
use stockroom_db::DbError;

/// API error returned from HTTP handlers.
///
/// Implements `IntoResponse`, so handlers can simply return
/// `Result<_, ApiError>` and use `?` on repository and validation calls.
#[derive(Debug)]
pub enum ApiError {
    /// Unknown id (or malformed id - the route behaves as if no such
    /// resource exists, matching path-converter semantics).
    NotFound,

    /// One or more fields failed validation. 400 with a body listing every
    /// failing field: `{"name": ["..."], "sku": ["..."]}`.
    Validation { errors: Vec<(String, String)> },

    /// A unique constraint rejected the write. 409 with a per-field body.
    Conflict { field: String, message: String },

    /// Anything the client can't act on. 500 with a generic body.
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::NotFound => json!({ "detail": "Not found." }),
            ApiError::Validation { errors } => {
                // Wire error shape: field name → array of messages,
                // one key per failing field
                let mut map = serde_json::Map::new();
                for (field, message) in errors {
                    let entry = map.entry(field.clone()).or_insert_with(|| json!([]));
                    if let Some(messages) = entry.as_array_mut() {
                        messages.push(json!(message));
                    }
                }
                serde_json::Value::Object(map)
            }
            ApiError::Conflict { field, message } => {
                json!({ field.as_str(): [message] })
            }
            ApiError::Internal(detail) => {
                // Log the real cause, return a generic message
                tracing::error!(detail = %detail, "internal error");
                json!({ "detail": "Internal server error." })
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Converts validation errors to API errors.
impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation {
            errors: errors
                .errors()
                .iter()
                .map(|e| (e.field().to_string(), e.to_string()))
                .collect(),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { .. } => ApiError::NotFound,
            DbError::UniqueViolation { field, .. } => {
                let message = format!("product with this {field} already exists.");
                ApiError::Conflict { field, message }
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
