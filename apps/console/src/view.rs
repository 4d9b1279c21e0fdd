//! # Inventory View
//!
//! Stateful presentation layer between the client and the terminal.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  InventoryView                                                          │
//! │                                                                         │
//! │   items: Vec<ProductDto>     the last list the server returned          │
//! │   loading: bool              a request is in flight                     │
//! │   error: Option<String>      banner text, cleared on the next action    │
//! │                                                                         │
//! │   action ──► error = None ──► client call ──► on Err: error = banner    │
//! │                                    │                                    │
//! │                                    └──► reload() ALWAYS (even on Err)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations never update `items` from their own response: the follow-up
//! reload is the single source of truth, so the table can never drift from
//! the server even when a mutation half-fails.

use stockroom_core::{ProductDto, ProductPatchRequest, ProductRequest};

use crate::client::InventoryClient;

/// Stateful inventory view over an [`InventoryClient`].
#[derive(Debug)]
pub struct InventoryView {
    client: InventoryClient,
    /// Last successfully fetched inventory.
    pub items: Vec<ProductDto>,
    /// True while a request is in flight.
    pub loading: bool,
    /// Banner text from the most recent failed action, if any.
    pub error: Option<String>,
}

impl InventoryView {
    pub fn new(client: InventoryClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Fetches the list and replaces `items`.
    ///
    /// Does NOT clear an existing error banner: a reload that follows a
    /// failed mutation must leave that failure visible.
    async fn reload(&mut self) {
        self.loading = true;
        match self.client.fetch_items().await {
            Ok(items) => self.items = items,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Explicit refresh: clears the banner, then reloads.
    pub async fn refresh(&mut self) {
        self.error = None;
        self.reload().await;
    }

    /// Creates a product, then reloads the list regardless of outcome.
    pub async fn add_item(&mut self, item: &ProductRequest) {
        self.error = None;
        if let Err(e) = self.client.add_item(item).await {
            self.error = Some(e.to_string());
        }
        self.reload().await;
    }

    /// Replaces a product, then reloads the list regardless of outcome.
    pub async fn update_item(&mut self, id: &str, item: &ProductRequest) {
        self.error = None;
        if let Err(e) = self.client.update_item(id, item).await {
            self.error = Some(e.to_string());
        }
        self.reload().await;
    }

    /// Adjusts only the stock level, then reloads regardless of outcome.
    pub async fn set_stock(&mut self, id: &str, stock: i64) {
        self.error = None;
        let patch = ProductPatchRequest {
            stock: Some(stock),
            ..Default::default()
        };
        if let Err(e) = self.client.patch_item(id, &patch).await {
            self.error = Some(e.to_string());
        }
        self.reload().await;
    }

    /// Deletes a product, then reloads the list regardless of outcome.
    pub async fn delete_item(&mut self, id: &str) {
        self.error = None;
        if let Err(e) = self.client.delete_item(id).await {
            self.error = Some(e.to_string());
        }
        self.reload().await;
    }

    /// Renders the current state as a fixed-width table.
    pub fn render(&self) -> String {
        let mut out = String::new();

        if let Some(err) = &self.error {
            out.push_str(&format!("!! {err}\n\n"));
        }
        if self.loading {
            out.push_str("(loading...)\n");
        }

        out.push_str(&format!(
            "{:<38} {:<30} {:<14} {:>12} {:>8}\n",
            "ID", "NAME", "SKU", "PRICE", "STOCK"
        ));
        out.push_str(&"-".repeat(106));
        out.push('\n');

        for item in &self.items {
            out.push_str(&format!(
                "{:<38} {:<30} {:<14} {:>12} {:>8}\n",
                item.id,
                item.name,
                item.sku,
                item.price.to_string(),
                item.stock
            ));
        }

        out.push_str(&format!("\n{} item(s)\n", self.items.len()));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Price;

    fn view_with_items(items: Vec<ProductDto>) -> InventoryView {
        let mut view = InventoryView::new(InventoryClient::new("http://127.0.0.1:1"));
        view.items = items;
        view
    }

    fn mouse() -> ProductDto {
        ProductDto {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Wireless Mouse".to_string(),
            sku: "WM-001".to_string(),
            price: Price::from_cents(2999),
            stock: 150,
            created_at: "2026-01-02T03:04:05Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_render_lists_items_with_formatted_price() {
        let rendered = view_with_items(vec![mouse()]).render();
        assert!(rendered.contains("Wireless Mouse"));
        assert!(rendered.contains("WM-001"));
        assert!(rendered.contains("29.99"));
        assert!(rendered.contains("1 item(s)"));
    }

    #[test]
    fn test_render_shows_error_banner_first() {
        let mut view = view_with_items(vec![]);
        view.error = Some("sku: product with this sku already exists.".to_string());

        let rendered = view.render();
        assert!(rendered.starts_with("!! sku: product with this sku already exists."));
    }

    #[tokio::test]
    async fn test_failed_action_sets_banner_and_still_reloads() {
        // Port 1 refuses connections, so both the mutation and the follow-up
        // reload fail; the banner must reflect a failure, not panic.
        let mut view = InventoryView::new(InventoryClient::new("http://127.0.0.1:1"));
        view.add_item(&ProductRequest::default()).await;

        assert!(view.error.is_some());
        assert!(!view.loading);
        assert!(view.items.is_empty());
    }
}
