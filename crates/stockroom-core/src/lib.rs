//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate is the **heart** of Stockroom. It holds the Product domain
//! model, the fixed-point price type, validation rules, and the wire DTOs,
//! all with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    console (client + view)                      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP/JSON                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rest-api (axum handlers)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ stockroom-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │    dto    │  │ validation│  │   │
//! │  │   │  Product  │  │   Price   │  │ ProductDto│  │   rules   │  │   │
//! │  │   │ NewProduct│  │ fixed-pt  │  │  requests │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  stockroom-db (Database Layer)                  │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, ProductPatch)
//! - [`price`] - Fixed-point Price type with integer arithmetic (no floats!)
//! - [`dto`] - Wire DTOs with a hand-declared field whitelist
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Prices**: All monetary values are in cents (i64)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//! 5. **Whitelisted wire fields**: `id` and `created_at` exist only on
//!    response DTOs, so the server stays authoritative over them
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::price::Price;
//!
//! // Parse a wire-format decimal string (never from floats!)
//! let price = Price::parse("29.99").unwrap();
//! assert_eq!(price.cents(), 2999);
//! assert_eq!(price.to_string(), "29.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dto;
pub mod error;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stockroom_core::Price` instead of
// `use stockroom_core::price::Price`

pub use dto::{ProductDto, ProductPatchRequest, ProductRequest};
pub use error::{ValidationError, ValidationErrors};
pub use price::Price;
pub use types::{NewProduct, Product, ProductPatch};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a SKU.
pub const MAX_SKU_LEN: usize = 50;

/// Maximum total digits in a price (8 integer + 2 fractional).
///
/// ## Business Reason
/// Matches the store column definition: a fixed-point decimal with at most
/// 10 digits overall and exactly 2 of them fractional.
pub const MAX_PRICE_DIGITS: u32 = 10;
