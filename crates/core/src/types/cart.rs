//! Shopping cart lines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CartLineId, ProductId};
use super::price::Price;
use super::product::Product;

/// One cart line: a product + size selection and its quantity.
///
/// Cart lines carry a snapshot of the product's fields so that orders stay
/// independent of later catalogue changes. Merge identity is
/// `(product id, selected size)`; `cart_id` uniquely names the line itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id this line was created from.
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    pub description: String,
    pub image: String,
    pub sizes: Vec<String>,
    /// Unique id for this cart line.
    pub cart_id: CartLineId,
    pub selected_size: String,
    pub quantity: u32,
}

impl CartItem {
    /// Build a fresh cart line from a product, copying only the defined
    /// product fields plus the cart-specific ones.
    #[must_use]
    pub fn new(product: &Product, selected_size: impl Into<String>, cart_id: CartLineId) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            sizes: product.sizes.clone(),
            cart_id,
            selected_size: selected_size.into(),
            quantity: 1,
        }
    }

    /// Whether this line merges with an add of `(product, size)`.
    #[must_use]
    pub fn matches(&self, product_id: &ProductId, size: &str) -> bool {
        &self.id == product_id && self.selected_size == size
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price.times(self.quantity)
    }
}

/// Sum of line totals over a cart.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}
