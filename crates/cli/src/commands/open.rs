//! Path-based navigation: resolve a path to a view and render the page.

use larashen_storefront::app::{App, Page};
use larashen_storefront::error::AppError;

/// Navigate to `path` and render whatever page the coordinator resolves,
/// gating included.
///
/// # Errors
///
/// Returns an error if a collection read fails.
pub fn open(app: &mut App, path: &str) -> Result<(), AppError> {
    let view = app.navigate_path(path);
    tracing::debug!(?view, path, "resolved view");

    match app.page()? {
        Page::Home => {
            println!("LARA N SHEN");
            println!("Heritage Woven in Gold");
            println!("Celebrating the unapologetic elegance of the modern African woman.");
        }
        Page::Shop { products } => {
            println!("The Collection");
            for product in &products {
                println!("  [{}] {} - {}", product.id, product.name, product.price);
            }
        }
        Page::Gallery { looks } => {
            println!("The Lookbook");
            for look in &looks {
                match &look.product {
                    Some(product) => {
                        println!("  {} (shop: {})", look.item.caption, product.name);
                    }
                    None => println!("  {}", look.item.caption),
                }
            }
        }
        Page::ProductDetail { product } => {
            println!("{} - {}", product.name, product.price);
            println!("{}", product.description);
        }
        Page::Cart { items, total } => {
            if items.is_empty() {
                println!("Your bag is empty.");
            } else {
                for line in &items {
                    println!(
                        "  {} | {} x{}",
                        line.name, line.selected_size, line.quantity
                    );
                }
                println!("  Total: ${total}");
            }
        }
        Page::Login => println!("Sign in to continue (lns login <email>)."),
        Page::Admin { products } => {
            println!("Admin Dashboard");
            println!("  {} products in the catalogue", products.len());
        }
        Page::AccessDenied => println!("Access Denied"),
        Page::Orders { orders } => {
            if orders.is_empty() {
                println!("No orders yet.");
            } else {
                for order in &orders {
                    println!("  Order #{} - ${}", order.id, order.total);
                }
            }
        }
    }
    Ok(())
}
