//! # Repository Module
//!
//! Repository implementations for database entities.
//!
//! The repository is the single data-access abstraction in the system:
//! the API layer never touches SQL, so the storage engine stays swappable
//! behind this interface.

pub mod product;
