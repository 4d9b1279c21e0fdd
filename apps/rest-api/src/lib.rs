//! # stockroom-api: HTTP Surface for Stockroom
//!
//! Stateless translation layer between HTTP/JSON and the product repository.
//! The router is exposed as a library so black-box tests (and the console
//! integration tests) can run the exact production app on an ephemeral port.

use axum::{extract::Extension, http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use stockroom_db::Database;

pub mod config;
pub mod error;
pub mod routes;

/// Builds the application router.
///
/// Every handler reads the shared [`Database`] from an extension; there is
/// no other cross-request state.
pub fn build_app(db: Database) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .merge(routes::products::router())
        .layer(Extension(db))
}

/// Liveness probe: verifies the database can still execute queries.
async fn health(Extension(db): Extension<Database>) -> (StatusCode, Json<serde_json::Value>) {
    if db.health_check().await {
        (StatusCode::OK, Json(json!({ "status": "ok" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
    }
}
