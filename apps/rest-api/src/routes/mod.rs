//! Route modules, one per resource.

pub mod products;
