//! # shophub-core: Pure Business Logic for ShopHub
//!
//! This crate is the **heart** of the ShopHub storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      ShopHub Architecture                           │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                  Frontend (TypeScript)                      │   │
//! │  │    Catalog UI ──► Product Detail ──► Cart UI ──► Checkout   │   │
//! │  └───────────────────────────┬─────────────────────────────────┘   │
//! │                              │ generated TS bindings               │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │              ★ shophub-core (THIS CRATE) ★                  │   │
//! │  │                                                             │   │
//! │  │  ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐  │   │
//! │  │  │   types   │ │   money   │ │   cart    │ │ validation │  │   │
//! │  │  │  Product  │ │   Money   │ │   Cart    │ │   rules    │  │   │
//! │  │  │           │ │           │ │ CartItem  │ │   checks   │  │   │
//! │  │  └───────────┘ └───────────┘ └───────────┘ └────────────┘  │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! │                              │                                      │
//! │  ┌───────────────────────────▼─────────────────────────────────┐   │
//! │  │          shophub-catalog (read-only product data)           │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart and its four operations
//! - [`store`] - Per-session cart store passed explicitly to consumers
//! - [`error`] - Validation error types
//! - [`validation`] - Product record validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic
//! 2. **No I/O**: Network, file system, and database access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Every cart operation succeeds; unknown ids are no-ops
//!
//! ## Example Usage
//!
//! ```rust
//! use shophub_core::cart::Cart;
//! use shophub_core::money::Money;
//! use shophub_core::types::Product;
//!
//! let headphones = Product {
//!     id: 1,
//!     name: "Premium Wireless Headphones".into(),
//!     description: "Noise cancellation and premium sound quality.".into(),
//!     price_cents: 29_900,
//!     image: "https://example.com/headphones.jpg".into(),
//!     category: "Electronics".into(),
//!     rating: 4.8,
//!     featured: true,
//!     stock: 50,
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&headphones);
//! cart.add_item(&headphones);
//!
//! // One line item, quantity 2, total derived from the items
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total(), Money::from_cents(59_800));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shophub_core::Money` instead of
// `use shophub_core::money::Money`

pub use cart::{Cart, CartAction, CartItem, CartTotals};
pub use error::ValidationError;
pub use money::Money;
pub use store::{CartSnapshot, CartStore};
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest product rating the storefront displays (five stars).
pub const MAX_RATING: f32 = 5.0;
