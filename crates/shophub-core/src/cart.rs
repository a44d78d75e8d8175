//! # Cart
//!
//! The in-memory shopping cart and its four operations.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                  │
//! │                                                                     │
//! │  Frontend Action          Operation              Cart Change        │
//! │  ───────────────          ─────────              ───────────        │
//! │                                                                     │
//! │  Click Product ──────────► add_item() ─────────► qty += 1 or push   │
//! │                                                                     │
//! │  Change Quantity ────────► update_quantity() ──► set qty / drop     │
//! │                                                                     │
//! │  Click Remove ───────────► remove_item() ──────► drop matching item │
//! │                                                                     │
//! │  Click Clear ────────────► clear() ────────────► items.clear()      │
//! │                                                                     │
//! │  NOTE: Every operation always succeeds. An id with no matching      │
//! │        line item is a no-op, never an error.                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The monetary total is never stored: it is recomputed from the line
//! items on every read, so it cannot drift out of sync with them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Cart Item
// =============================================================================

/// A line item in the shopping cart: a product plus a quantity.
///
/// ## Snapshot Semantics
/// The item owns a copy of the product taken when it was first added.
/// Adding the same id again only increments the quantity; the stored
/// snapshot (price included) is retained, never overwritten by the new
/// payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product snapshot frozen at first add.
    pub product: Product,

    /// Quantity in cart. Always positive while the item is present; an
    /// update driving it to zero or below removes the item instead.
    pub quantity: i64,

    /// When this item was first added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    /// Creates a new cart item with quantity 1 from a product.
    pub fn from_product(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// The id of the product this line holds.
    #[inline]
    pub fn product_id(&self) -> u32 {
        self.product.id
    }

    /// The frozen unit price.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    /// Calculates the line total (unit price × quantity) in cents.
    pub fn line_total_cents(&self) -> i64 {
        self.product.price_cents * self.quantity
    }

    /// Calculates the line total as Money.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product increments
///   its quantity)
/// - Every quantity is positive (an update to zero or below removes the
///   item, it is never retained)
/// - Insertion order is preserved for display stability
/// - The total is derived from the items on every read, never stored
///
/// ## Lifecycle
/// Created empty at session start, mutated only through the four
/// operations, discarded when the session ends. Nothing persists.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cart {
    /// Items in the cart, in insertion order.
    pub items: Vec<CartItem>,

    /// When the cart was created or last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a product to the cart.
    ///
    /// ## Behavior
    /// - If the product is already in the cart: its quantity increments
    ///   by exactly 1 and the stored snapshot is retained
    /// - Otherwise: a new line item with quantity 1 is appended
    pub fn add_item(&mut self, product: &Product) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::from_product(product));
    }

    /// Removes the line item matching `product_id`.
    ///
    /// Absence of a matching item is a no-op.
    pub fn remove_item(&mut self, product_id: u32) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the matching line item's quantity.
    ///
    /// ## Behavior
    /// - `quantity` of zero or below: the item is dropped entirely
    /// - Absence of a matching item is a no-op
    pub fn update_quantity(&mut self, product_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Clears all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.created_at = Utc::now();
    }

    /// Applies a dispatched action to the cart.
    ///
    /// The reducer form of the four operations: a closed set of variants
    /// consumed by a single transition. Equivalent to calling the methods
    /// directly.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::AddToCart(product) => self.add_item(&product),
            CartAction::RemoveFromCart(product_id) => self.remove_item(product_id),
            CartAction::UpdateQuantity { id, quantity } => self.update_quantity(id, quantity),
            CartAction::ClearCart => self.clear(),
        }
    }

    /// Returns the number of unique line items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all items (the header badge).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Recomputes the cart total in cents from the current items.
    pub fn total_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Recomputes the cart total as Money.
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents())
    }

    /// Checks if the cart is empty. An empty cart is a valid state, not
    /// an error.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// The closed set of cart operations in dispatchable form.
///
/// Serializes with the same tagged shape the frontend reducer dispatches:
/// ```json
/// { "type": "update_quantity", "payload": { "id": 3, "quantity": 2 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
#[ts(export)]
pub enum CartAction {
    /// Add one unit of a product (increments quantity if already present).
    AddToCart(Product),
    /// Remove the line item with this product id.
    RemoveFromCart(u32),
    /// Set the line item's quantity; zero or below removes it.
    UpdateQuantity { id: u32, quantity: i64 },
    /// Reset to an empty cart.
    ClearCart,
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for the header badge and cart page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total_cents: cart.total_cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            description: format!("Description for product {}", id),
            price_cents,
            image: format!("https://example.com/{}.jpg", id),
            category: "Electronics".to_string(),
            rating: 4.5,
            featured: false,
            stock: 10,
        }
    }

    #[test]
    fn test_add_item_appends_with_quantity_one() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
        assert_eq!(cart.total_cents(), 999);
    }

    #[test]
    fn test_add_same_product_increments_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_item(&product);
        cart.add_item(&product);

        // Still one unique line item
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total_cents(), 1998);
    }

    #[test]
    fn test_add_retains_frozen_snapshot() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000));

        // Same id arrives with a different price; the frozen line keeps
        // the original snapshot and only the quantity changes
        let mut repriced = test_product(1, 9999);
        repriced.name = "Renamed".to_string();
        cart.add_item(&repriced);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[0].product.price_cents, 1000);
        assert_eq!(cart.items[0].product.name, "Product 1");
        assert_eq!(cart.total_cents(), 2000);
    }

    #[test]
    fn test_scenario_two_products_then_drop_first() {
        let mut cart = Cart::new();
        let p1 = test_product(1, 1000); // $10.00
        let p2 = test_product(2, 500); // $5.00

        cart.add_item(&p1);
        cart.add_item(&p2);
        cart.add_item(&p1);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items[0].product_id(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.items[1].product_id(), 2);
        assert_eq!(cart.items[1].quantity, 1);
        assert_eq!(cart.total(), Money::from_cents(2500));

        cart.update_quantity(1, 0);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].product_id(), 2);
        assert_eq!(cart.total(), Money::from_cents(500));
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 250));

        cart.update_quantity(1, 4);

        assert_eq!(cart.items[0].quantity, 4);
        assert_eq!(cart.total_cents(), 1000);
    }

    #[test]
    fn test_update_quantity_nonpositive_removes_item() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 250));
        cart.add_item(&test_product(2, 100));

        cart.update_quantity(1, 0);
        assert_eq!(cart.item_count(), 1);

        cart.update_quantity(2, -3);
        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);
    }

    #[test]
    fn test_remove_after_update_to_zero_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 250));

        cart.update_quantity(1, 0);
        let before = cart.clone();

        cart.remove_item(1);
        assert_eq!(cart.items, before.items);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 250));

        cart.remove_item(99);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_cents(), 250);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 250));

        cart.update_quantity(99, 5);

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_clear_always_yields_empty_cart() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999));
        cart.add_item(&test_product(2, 100));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_cents(), 0);

        // Clearing an already empty cart stays empty
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        for id in [3, 1, 2] {
            cart.add_item(&test_product(id, 100));
        }

        let ids: Vec<u32> = cart.items.iter().map(|i| i.product_id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_totals_summary() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000));
        cart.add_item(&test_product(1, 1000));
        cart.add_item(&test_product(2, 500));

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.total_cents, 2500);
    }

    #[test]
    fn test_apply_dispatches_all_variants() {
        let mut cart = Cart::new();

        cart.apply(CartAction::AddToCart(test_product(1, 1000)));
        cart.apply(CartAction::AddToCart(test_product(2, 500)));
        cart.apply(CartAction::UpdateQuantity { id: 1, quantity: 3 });
        assert_eq!(cart.total_cents(), 3500);

        cart.apply(CartAction::RemoveFromCart(2));
        assert_eq!(cart.total_cents(), 3000);

        cart.apply(CartAction::ClearCart);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_action_serialization_shape() {
        let action = CartAction::UpdateQuantity { id: 3, quantity: 2 };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"type\":\"update_quantity\""));

        let parsed: CartAction = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, action);
    }

    // -------------------------------------------------------------------------
    // Property Tests
    // -------------------------------------------------------------------------

    fn product_strategy() -> impl Strategy<Value = Product> {
        (0u32..8, 0i64..50_000).prop_map(|(id, price_cents)| test_product(id, price_cents))
    }

    fn action_strategy() -> impl Strategy<Value = CartAction> {
        prop_oneof![
            product_strategy().prop_map(CartAction::AddToCart),
            (0u32..8).prop_map(CartAction::RemoveFromCart),
            (0u32..8, -3i64..12).prop_map(|(id, quantity)| CartAction::UpdateQuantity {
                id,
                quantity
            }),
            Just(CartAction::ClearCart),
        ]
    }

    proptest! {
        /// For all operation sequences the derived total equals the
        /// recomputation from the current items, every item keeps a
        /// positive quantity, and no two items share a product id.
        #[test]
        fn prop_invariants_hold_for_all_sequences(
            actions in proptest::collection::vec(action_strategy(), 0..40)
        ) {
            let mut cart = Cart::new();

            for action in actions {
                cart.apply(action);

                let recomputed: i64 = cart
                    .items
                    .iter()
                    .map(|i| i.product.price_cents * i.quantity)
                    .sum();
                prop_assert_eq!(cart.total_cents(), recomputed);

                let mut seen = std::collections::HashSet::new();
                for item in &cart.items {
                    prop_assert!(item.quantity > 0);
                    prop_assert!(seen.insert(item.product.id));
                }
            }
        }
    }
}
