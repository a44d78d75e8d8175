//! # shophub-catalog: Read-Only Product Catalog
//!
//! Supplies the immutable product records the storefront renders and the
//! cart copies into line items.
//!
//! ## Catalog Queries
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Who Reads What                                   │
//! │                                                                     │
//! │  Home page ──────────────► featured()                               │
//! │  Category filter ────────► by_category(), categories()              │
//! │  Best-seller rail ───────► top_rated(limit)                         │
//! │  Product detail route ───► get(id) / require(id)                    │
//! │  "You may also like" ────► related(id, limit)                       │
//! │                                                                     │
//! │  The catalog validates every record and rejects duplicate ids at    │
//! │  construction. After that it only hands out shared references.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The [`Catalog`] container and its query API
//! - [`data`] - The built-in sample product data
//! - [`error`] - Catalog error types

pub mod catalog;
pub mod data;
pub mod error;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
