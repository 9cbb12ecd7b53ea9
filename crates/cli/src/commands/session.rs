//! Session commands: login, logout, whoami.

use larashen_core::Role;
use larashen_storefront::app::App;

/// Log in as `email` with a self-declared role string.
///
/// # Errors
///
/// Returns an error for a malformed email, an unknown role, or a
/// persistence failure.
pub fn login(app: &mut App, email: &str, role: &str) -> Result<(), Box<dyn std::error::Error>> {
    let role = match role {
        "admin" => Role::Admin,
        "customer" => Role::Customer,
        other => return Err(format!("unknown role: {other} (use admin or customer)").into()),
    };

    let user = app.login(email, Some(role))?;
    println!("Welcome, {} ({:?}).", user.name, user.role);
    Ok(())
}

/// Log out.
///
/// # Errors
///
/// Returns an error if persistence fails.
pub fn logout(app: &mut App) -> Result<(), Box<dyn std::error::Error>> {
    app.logout()?;
    println!("Logged out.");
    Ok(())
}

/// Print the current user.
pub fn whoami(app: &App) {
    match app.user() {
        Some(user) => println!("{} <{}> ({:?})", user.name, user.email, user.role),
        None => println!("Not logged in."),
    }
}
