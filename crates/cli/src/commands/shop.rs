//! Catalogue and lookbook browsing.

use larashen_core::ProductId;
use larashen_storefront::app::App;
use larashen_storefront::error::AppError;

/// List the catalogue, optionally filtered by category.
pub fn list(app: &App, category: Option<&str>) {
    let products: Vec<_> = app
        .products()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect();

    if products.is_empty() {
        println!("No products in this category.");
        return;
    }

    println!("The Collection");
    println!("--------------");
    for product in products {
        println!(
            "  [{}] {} - {} ({})",
            product.id, product.name, product.price, product.category
        );
    }
}

/// Show one product in detail.
///
/// # Errors
///
/// Returns an error if the id does not resolve to a catalogue product.
pub fn show(app: &mut App, id: &str) -> Result<(), AppError> {
    let product_id = ProductId::new(id);
    let product = app
        .product(&product_id)
        .ok_or_else(|| AppError::ProductNotFound(product_id.clone()))?
        .clone();

    app.select_product(product_id);

    println!("{}", product.name);
    println!("{}", product.category.to_uppercase());
    println!("{}", product.price);
    println!();
    println!("{}", product.description);
    println!();
    println!("Sizes: {}", product.sizes.join(" "));
    Ok(())
}

/// List the lookbook; looks with a dangling product reference lose their
/// shop-through line rather than failing.
///
/// # Errors
///
/// Returns an error if the gallery cannot be read.
pub fn gallery(app: &App) -> Result<(), AppError> {
    println!("The Lookbook");
    println!("------------");
    for look in app.gallery()? {
        println!("  {} - {}", look.item.id, look.item.caption);
        if let Some(product) = &look.product {
            println!("      shop the piece: [{}] {}", product.id, product.name);
        }
    }
    Ok(())
}
