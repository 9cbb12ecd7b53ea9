//! Session mutation: login and logout.

use larashen_core::{Email, Role, User, UserId};
use tracing::info;
use uuid::Uuid;

use crate::store::{Store, StoreError};

/// Log in as `email` with a self-declared role.
///
/// No credential verification: a fresh user is constructed with a generated
/// id, display name derived from the email local part, and the supplied role
/// (defaulting to customer). The user is persisted as the current user and
/// returned.
///
/// # Errors
///
/// Returns an error if the current user cannot be persisted.
pub fn login(store: &Store, email: Email, role: Option<Role>) -> Result<User, StoreError> {
    let user = User {
        id: UserId::new(Uuid::new_v4().to_string()),
        name: email.local_part().to_owned(),
        email,
        role: role.unwrap_or_default(),
    };

    store.set_current_user(&user)?;
    info!(user = %user.id, role = ?user.role, "logged in");
    Ok(user)
}

/// Clear the current user.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn logout(store: &Store) -> Result<(), StoreError> {
    store.clear_current_user()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBackend;

    fn memory_store() -> Store {
        Store::new(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn login_derives_name_and_defaults_to_customer() {
        let store = memory_store();
        let email = Email::parse("zaria.o@larashen.example").expect("email");

        let user = login(&store, email, None).expect("login");
        assert_eq!(user.name, "zaria.o");
        assert_eq!(user.role, Role::Customer);
        assert_eq!(store.current_user().expect("read"), Some(user));
    }

    #[test]
    fn login_replaces_any_previous_user() {
        let store = memory_store();
        login(
            &store,
            Email::parse("first@larashen.example").expect("email"),
            None,
        )
        .expect("first login");
        let second = login(
            &store,
            Email::parse("second@larashen.example").expect("email"),
            Some(Role::Admin),
        )
        .expect("second login");

        let current = store.current_user().expect("read").expect("present");
        assert_eq!(current, second);
        assert!(current.is_admin());
    }

    #[test]
    fn logout_clears_the_user() {
        let store = memory_store();
        login(
            &store,
            Email::parse("amara@larashen.example").expect("email"),
            None,
        )
        .expect("login");

        logout(&store).expect("logout");
        assert!(store.current_user().expect("read").is_none());
    }
}
