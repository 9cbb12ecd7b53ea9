//! Shopping bag management.

use larashen_core::{CartLineId, ProductId, cart_total};
use larashen_storefront::app::App;
use larashen_storefront::error::AppError;

/// Print the bag.
pub fn show(app: &App) {
    let cart = app.cart();
    if cart.is_empty() {
        println!("Your bag is empty.");
        return;
    }

    println!("Shopping Bag");
    println!("------------");
    for line in cart {
        println!(
            "  [{}] {} | Size: {} | Qty: {} | ${}",
            line.cart_id,
            line.name,
            line.selected_size,
            line.quantity,
            line.line_total()
        );
    }
    println!("  Total: ${}", cart_total(cart));
}

/// Add one unit of a product in the given size.
///
/// # Errors
///
/// Returns an error for an unknown product id or a persistence failure.
pub fn add(app: &mut App, product_id: &str, size: &str) -> Result<(), AppError> {
    let product_id = ProductId::new(product_id);
    app.add_to_cart(&product_id, size)?;
    println!("Added to bag ({} items).", app.cart_count());
    Ok(())
}

/// Remove a line by its cart line id; silently a no-op when absent.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn remove(app: &mut App, cart_id: &str) -> Result<(), AppError> {
    app.remove_from_cart(&CartLineId::new(cart_id))?;
    println!("Bag now holds {} items.", app.cart_count());
    Ok(())
}

/// Empty the bag.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn clear(app: &mut App) -> Result<(), AppError> {
    app.clear_cart()?;
    println!("Bag emptied.");
    Ok(())
}
