//! # stockroom-console: Inventory Client + View
//!
//! Terminal frontend for the Stockroom REST API. The crate splits along the
//! same seam as the server:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs        subcommands (list/add/update/set-stock/delete/watch)   │
//! │      │                                                                  │
//! │  view.rs        InventoryView - items/loading/error state, rendering   │
//! │      │                                                                  │
//! │  client.rs      InventoryClient - one typed method per REST route      │
//! │      │                                                                  │
//! │  ── HTTP ──►    /api/products/ ...                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The view never inspects error kinds: every failure becomes one banner
//! string, and every mutation re-fetches the full list regardless of outcome,
//! so the rendered table is always server truth.

pub mod client;
pub mod config;
pub mod view;

pub use client::{ClientError, InventoryClient};
pub use config::ConsoleConfig;
pub use view::InventoryView;
