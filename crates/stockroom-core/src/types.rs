//! # Domain Types
//!
//! Core domain types for the Stockroom inventory.
//!
//! ## Type Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Product Lifecycle                                │
//! │                                                                         │
//! │  ProductRequest (wire) ──validate──► NewProduct ──insert──► Product    │
//! │                                                               │         │
//! │  ProductPatchRequest ──validate──► ProductPatch ──patch──────┤         │
//! │                                                               │         │
//! │                                          delete ◄─────────────┘         │
//! │                                                                         │
//! │  id + created_at are assigned by the store at insert time and are      │
//! │  never present on any inbound type.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Every product has:
//! - `id`: UUID v4 - immutable, used for routing and relations
//! - `sku`: business identifier - human-assigned, unique, mutable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::Price;

// =============================================================================
// Product
// =============================================================================

/// A product row as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4), generated server-side.
    pub id: String,

    /// Display name, at most 100 characters.
    pub name: String,

    /// Stock Keeping Unit - business identifier, unique across all products.
    pub sku: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units on hand, never negative.
    pub stock: i64,

    /// When the product was created. Set once, immutable.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Price type.
    #[inline]
    pub fn price(&self) -> Price {
        Price::from_cents(self.price_cents)
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Validated mutable fields for creating or fully replacing a product.
///
/// Constructed only through [`ProductRequest::validate`](crate::dto::ProductRequest::validate),
/// so holding one means every field already satisfies the data model rules.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub price_cents: i64,
    pub stock: i64,
}

// =============================================================================
// Product Patch
// =============================================================================

/// Validated partial update: only supplied fields are overwritten.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price_cents: Option<i64>,
    pub stock: Option<i64>,
}

impl ProductPatch {
    /// True when no field was supplied (the patch is a no-op).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.price_cents.is_none()
            && self.stock.is_none()
    }

    /// Applies this patch on top of an existing product's mutable fields.
    pub fn apply_to(&self, existing: &Product) -> NewProduct {
        NewProduct {
            name: self.name.clone().unwrap_or_else(|| existing.name.clone()),
            sku: self.sku.clone().unwrap_or_else(|| existing.sku.clone()),
            price_cents: self.price_cents.unwrap_or(existing.price_cents),
            stock: self.stock.unwrap_or(existing.stock),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Wireless Mouse".to_string(),
            sku: "WM-001".to_string(),
            price_cents: 2999,
            stock: 150,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_patch_apply_overrides_only_supplied_fields() {
        let product = sample_product();
        let patch = ProductPatch {
            stock: Some(175),
            ..Default::default()
        };

        let merged = patch.apply_to(&product);
        assert_eq!(merged.stock, 175);
        assert_eq!(merged.name, "Wireless Mouse");
        assert_eq!(merged.sku, "WM-001");
        assert_eq!(merged.price_cents, 2999);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(ProductPatch::default().is_empty());
        assert!(!ProductPatch {
            name: Some("x".to_string()),
            ..Default::default()
        }
        .is_empty());
    }

    #[test]
    fn test_product_price_accessor() {
        let product = sample_product();
        assert_eq!(product.price().to_string(), "29.99");
    }
}
