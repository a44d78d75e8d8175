//! # Cart Store
//!
//! The per-session cart store handed to consumers by reference.
//!
//! ## Session Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Store Lifecycle                                  │
//! │                                                                     │
//! │  Session start ──► CartStore::new() ──► passed by reference to      │
//! │                                         catalog view, detail view,  │
//! │                                         header badge, cart page     │
//! │                                                                     │
//! │  Session end ────► store dropped, nothing persists                  │
//! │                                                                     │
//! │  The store is constructed once per session and passed explicitly;   │
//! │  consumers never reach it through ambient lookup.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Threading
//! Evaluation is single-threaded with exactly one logical mutator, so the
//! cart sits behind a `RefCell` rather than a lock. Operations run to
//! completion with no suspension point.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::cart::{Cart, CartAction, CartItem, CartTotals};
use crate::types::Product;

// =============================================================================
// Cart Snapshot
// =============================================================================

/// Cart read view: the items plus their totals, returned from every
/// store operation so the caller can re-render without a second read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        CartSnapshot {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Session-scoped owner of the cart.
///
/// Wraps the cart in a `RefCell` so read-side consumers can share `&self`
/// while the single mutator drives the four operations.
#[derive(Debug)]
pub struct CartStore {
    cart: RefCell<Cart>,
}

impl CartStore {
    /// Creates a store holding a new empty cart.
    pub fn new() -> Self {
        CartStore {
            cart: RefCell::new(Cart::new()),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use shophub_core::store::CartStore;
    ///
    /// let store = CartStore::new();
    /// let badge = store.with_cart(|cart| cart.total_quantity());
    /// assert_eq!(badge, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.borrow();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.borrow_mut();
        f(&mut cart)
    }

    /// Returns the current cart contents and totals.
    pub fn snapshot(&self) -> CartSnapshot {
        debug!("get_cart");
        self.with_cart(|c| CartSnapshot::from(c))
    }

    /// Returns the current totals only (header badge).
    pub fn totals(&self) -> CartTotals {
        self.with_cart(|c| CartTotals::from(c))
    }

    /// Adds one unit of a product to the cart.
    pub fn add_item(&self, product: &Product) -> CartSnapshot {
        debug!(product_id = product.id, "add_to_cart");

        self.with_cart_mut(|c| {
            c.add_item(product);
            CartSnapshot::from(&*c)
        })
    }

    /// Removes the line item matching `product_id`; unknown ids are a
    /// no-op.
    pub fn remove_item(&self, product_id: u32) -> CartSnapshot {
        debug!(product_id, "remove_from_cart");

        self.with_cart_mut(|c| {
            c.remove_item(product_id);
            CartSnapshot::from(&*c)
        })
    }

    /// Sets the matching line item's quantity; zero or below removes it.
    pub fn update_quantity(&self, product_id: u32, quantity: i64) -> CartSnapshot {
        debug!(product_id, quantity, "update_cart_item");

        self.with_cart_mut(|c| {
            c.update_quantity(product_id, quantity);
            CartSnapshot::from(&*c)
        })
    }

    /// Clears all items from the cart.
    pub fn clear(&self) -> CartSnapshot {
        debug!("clear_cart");

        self.with_cart_mut(|c| {
            c.clear();
            CartSnapshot::from(&*c)
        })
    }

    /// Applies a dispatched action.
    pub fn dispatch(&self, action: CartAction) -> CartSnapshot {
        debug!(?action, "dispatch");

        self.with_cart_mut(|c| {
            c.apply(action);
            CartSnapshot::from(&*c)
        })
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
