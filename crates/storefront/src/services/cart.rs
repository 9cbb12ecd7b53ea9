//! Cart mutation: add, remove, clear.

use larashen_core::{CartItem, CartLineId, Product};
use tracing::debug;
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Add one unit of `(product, size)` to the cart.
///
/// Merge identity is the `(product id, selected size)` pair: a repeat add
/// increments the existing line's quantity instead of creating a duplicate
/// line. A new pair gets a fresh line with quantity 1 and a generated
/// cart line id.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or persisted.
pub fn add_to_cart(store: &Store, product: &Product, size: &str) -> Result<(), StoreError> {
    let mut cart = store.cart()?;

    if let Some(line) = cart.iter_mut().find(|line| line.matches(&product.id, size)) {
        line.quantity += 1;
        debug!(product = %product.id, size, quantity = line.quantity, "merged cart line");
    } else {
        let cart_id = CartLineId::new(Uuid::new_v4().to_string());
        cart.push(CartItem::new(product, size, cart_id));
        debug!(product = %product.id, size, "added cart line");
    }

    store.save_cart(&cart)
}

/// Remove the line with `cart_id` from the cart.
///
/// Silently a no-op if no line carries that id.
///
/// # Errors
///
/// Returns an error if the cart cannot be read or persisted.
pub fn remove_from_cart(store: &Store, cart_id: &CartLineId) -> Result<(), StoreError> {
    let mut cart = store.cart()?;
    cart.retain(|line| &line.cart_id != cart_id);
    store.save_cart(&cart)
}

/// Empty the cart by deleting its key.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn clear(store: &Store) -> Result<(), StoreError> {
    store.clear_cart()
}
