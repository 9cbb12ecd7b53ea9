//! Session user and role.

use serde::{Deserialize, Serialize};

use super::email::Email;
use super::id::UserId;

/// Role of the current user.
///
/// The role is self-declared at login and trusted client-side only; it gates
/// the admin dashboard view, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Customer,
}

/// The current session user.
///
/// Created at login with no credential verification; destroyed at logout.
/// At most one current user exists at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: Email,
    /// Display name, derived from the email local part.
    pub name: String,
    pub role: Role,
}

impl User {
    /// Whether this user may see the admin dashboard.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
