//! Admin content entry: new products and gallery looks.
//!
//! Gated on the current user's role, matching the admin view gating in the
//! application coordinator.

use larashen_core::{ProductId, User};
use larashen_storefront::app::{App, NewLook, NewProduct};
use larashen_storefront::stylist::Stylist;
use rust_decimal::Decimal;

/// Admin product form input.
pub struct ProductForm {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub image: Option<String>,
    pub generate_description: bool,
}

fn require_admin(app: &App) -> bool {
    if app.user().is_some_and(User::is_admin) {
        true
    } else {
        println!("Access denied.");
        false
    }
}

/// Add a product to the catalogue, optionally generating its description
/// with the AI copywriter.
///
/// # Errors
///
/// Returns an error for an invalid price or a persistence failure.
pub async fn add_product(
    app: &mut App,
    stylist: &Stylist,
    form: ProductForm,
) -> Result<(), Box<dyn std::error::Error>> {
    if !require_admin(app) {
        return Ok(());
    }

    let description = if form.generate_description {
        let text = stylist
            .generate_description(&form.name, &form.category)
            .await;
        println!("Generated description: {text}");
        text
    } else {
        form.description
    };

    let product = app.add_product(NewProduct {
        name: form.name,
        price: form.price,
        category: form.category,
        description,
        image: form.image,
    })?;

    println!("Product added to catalogue: [{}] {}", product.id, product.name);
    Ok(())
}

/// Add a look to the gallery.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn add_look(
    app: &mut App,
    caption: String,
    product_id: &str,
    image_url: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if !require_admin(app) {
        return Ok(());
    }

    // The reference is not validated; a dangling product id just loses its
    // shop-through affordance in the gallery.
    let item = app.add_gallery_item(NewLook {
        caption,
        product_id: ProductId::new(product_id),
        image_url,
    })?;

    println!("Look added to gallery: [{}] {}", item.id, item.caption);
    Ok(())
}
