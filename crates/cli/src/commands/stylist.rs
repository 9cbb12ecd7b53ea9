//! The stylist's note flow for a product.

use larashen_core::ProductId;
use larashen_storefront::advice::{AdviceState, StylistNote};
use larashen_storefront::app::App;
use larashen_storefront::error::AppError;
use larashen_storefront::stylist::Stylist;

/// Ask the AI stylist how to wear a product.
///
/// Drives the advice state machine the same way the product detail view
/// does: request once, resolve with whatever the collaborator returns.
///
/// # Errors
///
/// Returns an error if the id does not resolve to a catalogue product.
pub async fn advise(app: &App, stylist: &Stylist, product_id: &str) -> Result<(), AppError> {
    let product_id = ProductId::new(product_id);
    let product = app
        .product(&product_id)
        .ok_or_else(|| AppError::ProductNotFound(product_id.clone()))?;

    let mut note = StylistNote::new(product_id.clone());
    if note.begin() {
        println!("Consulting the stylist about \"{}\"...", product.name);
        let text = stylist.styling_advice(&product.name).await;
        note.resolve(&product_id, text);
    }

    if let AdviceState::Shown(advice) = note.state() {
        println!();
        println!("Stylist's Note: {advice}");
    }
    Ok(())
}
