//! Checkout and order history.

use larashen_core::Order;
use larashen_storefront::app::{App, CheckoutOutcome};
use larashen_storefront::error::AppError;

/// Place an order for the current bag.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn checkout(app: &mut App) -> Result<(), AppError> {
    if app.cart().is_empty() {
        println!("Your bag is empty; nothing to check out.");
        return Ok(());
    }

    match app.checkout()? {
        CheckoutOutcome::Placed(order) => {
            println!("Order placed successfully! Thank you for choosing Lara n Shen.");
            println!("Order #{} | Total ${}", order.id, order.total);
        }
        CheckoutOutcome::LoginRequired => {
            println!("Please log in before checking out (lns login <email>).");
        }
    }
    Ok(())
}

/// Show order history: the current user's orders, or every order with
/// `--all` (admin only).
///
/// # Errors
///
/// Returns an error if the order collection cannot be read.
pub fn list(app: &App, all: bool) -> Result<(), AppError> {
    let orders = if all {
        if !app.user().is_some_and(larashen_core::User::is_admin) {
            println!("Access denied: --all requires an admin login.");
            return Ok(());
        }
        app.all_orders()?
    } else {
        if app.user().is_none() {
            println!("Not logged in.");
            return Ok(());
        }
        app.orders()?
    };

    if orders.is_empty() {
        println!("No orders yet.");
        return Ok(());
    }

    for order in &orders {
        print_order(order);
    }
    Ok(())
}

fn print_order(order: &Order) {
    println!(
        "Order #{} | {} | {:?}",
        order.id,
        order.date.format("%Y-%m-%d"),
        order.status
    );
    for item in &order.items {
        println!(
            "    {} (x{}) - ${}",
            item.name,
            item.quantity,
            item.line_total()
        );
    }
    println!("    TOTAL ${}", order.total);
}
