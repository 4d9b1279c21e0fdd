//! # Wire DTOs
//!
//! Hand-declared JSON shapes shared by the server and the client.
//!
//! ## Why an Explicit Whitelist?
//! The wire schema is NOT derived from the storage schema. Request types
//! simply have no `id` or `created_at` fields, so a client that sends them
//! has them ignored and the server stays authoritative - a correctness
//! requirement, not a style preference.
//!
//! ## Why Option<String> for required fields?
//! Deserialization must succeed even when a required field is missing so
//! that [`validate`](ProductRequest::validate) can report the failure as a
//! per-field error (`{"name": ["this field is required."]}`) instead of a
//! generic body-rejection message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationErrors;
use crate::price::Price;
use crate::types::{NewProduct, Product, ProductPatch};
use crate::validation::{validate_name, validate_sku, validate_stock};

// =============================================================================
// Response DTO
// =============================================================================

/// Product as it appears on the wire.
///
/// `price` serializes as a decimal string (`"29.99"`), `created_at` as an
/// ISO-8601 UTC timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: Price,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            id: p.id,
            name: p.name,
            sku: p.sku,
            price: Price::from_cents(p.price_cents),
            stock: p.stock,
            created_at: p.created_at,
        }
    }
}

// =============================================================================
// Request DTOs
// =============================================================================

/// Body of POST (create) and PUT (full replace).
///
/// `stock` is optional and defaults to 0; everything else is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub stock: Option<i64>,
}

impl ProductRequest {
    /// Validates all fields, producing a [`NewProduct`] or every per-field
    /// failure at once (a body missing both `name` and `sku` reports both).
    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.collect(validate_name(self.name.as_deref().unwrap_or("")));
        let sku = errors.collect(validate_sku(self.sku.as_deref().unwrap_or("")));
        let price = errors.collect(Price::parse(self.price.as_deref().unwrap_or("")));
        let stock = errors.collect(validate_stock(self.stock.unwrap_or(0)));

        match (name, sku, price, stock) {
            (Some(name), Some(sku), Some(price), Some(stock)) if errors.is_empty() => {
                Ok(NewProduct {
                    name,
                    sku,
                    price_cents: price.cents(),
                    stock,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Body of PATCH (partial update). Only supplied fields are validated and
/// overwritten; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatchRequest {
    pub name: Option<String>,
    pub sku: Option<String>,
    pub price: Option<String>,
    pub stock: Option<i64>,
}

impl ProductPatchRequest {
    /// Validates only the supplied fields, collecting every failure.
    pub fn validate(&self) -> Result<ProductPatch, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match &self.name {
            Some(n) => errors.collect(validate_name(n)),
            None => None,
        };
        let sku = match &self.sku {
            Some(s) => errors.collect(validate_sku(s)),
            None => None,
        };
        let price_cents = match &self.price {
            Some(p) => errors.collect(Price::parse(p)).map(|price| price.cents()),
            None => None,
        };
        let stock = match self.stock {
            Some(s) => errors.collect(validate_stock(s)),
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProductPatch {
            name,
            sku,
            price_cents,
            stock,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> ProductRequest {
        ProductRequest {
            name: Some("Wireless Mouse".to_string()),
            sku: Some("WM-001".to_string()),
            price: Some("29.99".to_string()),
            stock: Some(150),
        }
    }

    #[test]
    fn test_validate_full_request() {
        let new = full_request().validate().unwrap();
        assert_eq!(new.name, "Wireless Mouse");
        assert_eq!(new.sku, "WM-001");
        assert_eq!(new.price_cents, 2999);
        assert_eq!(new.stock, 150);
    }

    #[test]
    fn test_stock_defaults_to_zero() {
        let mut req = full_request();
        req.stock = None;
        assert_eq!(req.validate().unwrap().stock, 0);
    }

    #[test]
    fn test_missing_required_field_names_the_field() {
        let mut req = full_request();
        req.sku = None;
        let errors = req.validate().unwrap_err();
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(errors.errors()[0].field(), "sku");
    }

    #[test]
    fn test_all_failing_fields_are_reported_together() {
        // name and sku both missing, price malformed: three failures at once
        let req = ProductRequest {
            price: Some("not-a-number".to_string()),
            ..Default::default()
        };

        let errors = req.validate().unwrap_err();
        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["name", "sku", "price"]);
    }

    #[test]
    fn test_patch_validates_only_supplied_fields() {
        // A stock-only patch must not require name/sku/price
        let patch = ProductPatchRequest {
            stock: Some(175),
            ..Default::default()
        }
        .validate()
        .unwrap();

        assert_eq!(patch.stock, Some(175));
        assert!(patch.name.is_none());
        assert!(patch.sku.is_none());
        assert!(patch.price_cents.is_none());
    }

    #[test]
    fn test_patch_rejects_bad_supplied_field() {
        let errors = ProductPatchRequest {
            stock: Some(-5),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.errors()[0].field(), "stock");
    }

    #[test]
    fn test_patch_collects_all_bad_supplied_fields() {
        let errors = ProductPatchRequest {
            price: Some("1.005".to_string()),
            stock: Some(-5),
            ..Default::default()
        }
        .validate()
        .unwrap_err();

        let fields: Vec<&str> = errors.errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["price", "stock"]);
    }

    #[test]
    fn test_request_ignores_unknown_fields() {
        // id/created_at in the body are not part of the request shape
        let req: ProductRequest = serde_json::from_str(
            r#"{"name":"Mouse","sku":"WM-001","price":"29.99","id":"evil","created_at":"2020-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_dto_wire_shape() {
        let dto = ProductDto {
            id: "abc".to_string(),
            name: "Mouse".to_string(),
            sku: "WM-001".to_string(),
            price: Price::from_cents(2999),
            stock: 150,
            created_at: "2026-01-02T03:04:05Z".parse().unwrap(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["price"], "29.99");
        assert_eq!(json["stock"], 150);
        assert!(json["created_at"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    }
}
