//! # Domain Types
//!
//! Core domain types used throughout the ShopHub storefront.
//!
//! There is a single entity: the [`Product`]. Products are supplied by the
//! catalog as immutable records; the cart copies them by value into line
//! items and never mutates or persists them.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront.
///
/// ## Identity
/// `id` is the unique integer identifier the whole storefront keys on:
/// the cart deduplicates line items by it and the product detail route
/// resolves it against the catalog.
///
/// ## Price
/// `price_cents` is the unit price in cents (smallest currency unit) and
/// must be non-negative. Use [`Product::price`] for a typed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: u32,

    /// Display name shown in the catalog grid and the cart.
    pub name: String,

    /// Marketing description for the product detail page.
    pub description: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Image URL for the product card.
    pub image: String,

    /// Category label ("Electronics", "Fashion", ...).
    pub category: String,

    /// Customer rating, 0.0 through 5.0.
    pub rating: f32,

    /// Whether the product is highlighted on the home page.
    pub featured: bool,

    /// Units currently in stock.
    pub stock: u32,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether any units are available.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
