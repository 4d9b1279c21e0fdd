//! # Inventory Client
//!
//! Typed HTTP client for the product routes: one method per route, shared
//! request/response DTOs from stockroom-core, and a [`ClientError`] that
//! carries the decoded error body.
//!
//! ## Error Body Decoding
//! The server speaks two error shapes and the client flattens both into a
//! single display string:
//! ```text
//! {"detail": "Not found."}                             → "Not found."
//! {"sku": ["product with this sku already exists."]}   → "sku: product with this sku already exists."
//! ```

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use stockroom_core::{ProductDto, ProductPatchRequest, ProductRequest};

/// Errors surfaced by [`InventoryClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never completed (connection refused, timeout, bad JSON).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Transport(_) => None,
        }
    }
}

/// HTTP client for the product CRUD surface.
#[derive(Debug, Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl InventoryClient {
    /// Creates a client for the API at `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/products/ - the full inventory, server-ordered by name.
    pub async fn fetch_items(&self) -> Result<Vec<ProductDto>, ClientError> {
        let res = self.http.get(self.url("/api/products/")).send().await?;
        Self::decode(res).await
    }

    /// GET /api/products/{id}/
    pub async fn fetch_item(&self, id: &str) -> Result<ProductDto, ClientError> {
        let res = self
            .http
            .get(self.url(&format!("/api/products/{id}/")))
            .send()
            .await?;
        Self::decode(res).await
    }

    /// POST /api/products/
    pub async fn add_item(&self, item: &ProductRequest) -> Result<ProductDto, ClientError> {
        debug!(sku = item.sku.as_deref().unwrap_or(""), "add_item");
        let res = self
            .http
            .post(self.url("/api/products/"))
            .json(item)
            .send()
            .await?;
        Self::decode(res).await
    }

    /// PUT /api/products/{id}/ - full replace.
    pub async fn update_item(
        &self,
        id: &str,
        item: &ProductRequest,
    ) -> Result<ProductDto, ClientError> {
        debug!(id, "update_item");
        let res = self
            .http
            .put(self.url(&format!("/api/products/{id}/")))
            .json(item)
            .send()
            .await?;
        Self::decode(res).await
    }

    /// PATCH /api/products/{id}/ - partial update.
    pub async fn patch_item(
        &self,
        id: &str,
        patch: &ProductPatchRequest,
    ) -> Result<ProductDto, ClientError> {
        debug!(id, "patch_item");
        let res = self
            .http
            .patch(self.url(&format!("/api/products/{id}/")))
            .json(patch)
            .send()
            .await?;
        Self::decode(res).await
    }

    /// DELETE /api/products/{id}/
    pub async fn delete_item(&self, id: &str) -> Result<(), ClientError> {
        debug!(id, "delete_item");
        let res = self
            .http
            .delete(self.url(&format!("/api/products/{id}/")))
            .send()
            .await?;

        if res.status().is_success() {
            Ok(())
        } else {
            Err(Self::decode_error(res).await)
        }
    }

    /// Deserializes a success body, or decodes the error body.
    async fn decode<T: serde::de::DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<T, ClientError> {
        if res.status().is_success() {
            Ok(res.json::<T>().await?)
        } else {
            Err(Self::decode_error(res).await)
        }
    }

    /// Flattens either error body shape into one message string.
    async fn decode_error(res: reqwest::Response) -> ClientError {
        let status = res.status().as_u16();
        let message = match res.json::<Value>().await {
            Ok(body) => Self::flatten_error_body(&body)
                .unwrap_or_else(|| format!("unexpected error (HTTP {status})")),
            Err(_) => format!("unexpected error (HTTP {status})"),
        };

        ClientError::Api { status, message }
    }

    fn flatten_error_body(body: &Value) -> Option<String> {
        if let Some(detail) = body["detail"].as_str() {
            return Some(detail.to_string());
        }

        // Field-error map: {"field": ["msg", ...], ...}
        let map = body.as_object()?;
        let mut parts = Vec::new();
        for (field, messages) in map {
            let joined = messages
                .as_array()?
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            parts.push(format!("{field}: {joined}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}
