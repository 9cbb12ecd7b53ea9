//! The persistent store: whole-collection JSON blobs over a key-value backend.
//!
//! One get/save pair per collection (products, gallery, cart, orders) plus
//! current-user get/set/clear. Every mutation is a synchronous
//! read-modify-write of the entire collection; there are no partial updates
//! and no transactions, acceptable for single-writer local use.
//!
//! First reads of `products` and `gallery` against an empty backend install
//! the seed data and return it; the seeding write happens at most once.

pub mod backend;
pub mod seed;

use larashen_core::{CartItem, GalleryItem, Order, Product, User};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use backend::{BackendError, FileBackend, KvBackend, MemoryBackend};

/// Storage keys, namespaced to avoid collision with unrelated data.
mod keys {
    pub const PRODUCTS: &str = "lns_products";
    pub const GALLERY: &str = "lns_gallery";
    pub const CART: &str = "lns_cart";
    pub const USER: &str = "lns_user";
    pub const ORDERS: &str = "lns_orders";
}

/// Errors from the persistent store.
///
/// `Corrupt` is deliberately not recovered from anywhere: a stored blob that
/// no longer deserializes means the durable state is unusable, and callers
/// propagate the failure instead of papering over it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend read or write failed.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Stored JSON no longer matches the collection shape.
    #[error("corrupt data under {key}: {source}")]
    Corrupt {
        /// Store key holding the bad blob.
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The durable representation of every storefront entity.
///
/// Owns its backend exclusively; the application coordinator holds the only
/// `Store` handle, so tests can substitute a [`MemoryBackend`] fake.
pub struct Store {
    backend: Box<dyn KvBackend>,
}

impl Store {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(backend: Box<dyn KvBackend>) -> Self {
        Self { backend }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Read the catalogue, seeding it on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn products(&self) -> Result<Vec<Product>, StoreError> {
        self.read_or_seed(keys::PRODUCTS, seed::seed_products)
    }

    /// Append a product to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn save_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products()?;
        products.push(product);
        self.write(keys::PRODUCTS, &products)
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// Read the lookbook gallery, seeding it on first access.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn gallery(&self) -> Result<Vec<GalleryItem>, StoreError> {
        self.read_or_seed(keys::GALLERY, seed::seed_gallery)
    }

    /// Append a look to the gallery.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn save_gallery_item(&self, item: GalleryItem) -> Result<(), StoreError> {
        let mut gallery = self.gallery()?;
        gallery.push(item);
        self.write(keys::GALLERY, &gallery)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Read the cart. An absent key is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn cart(&self) -> Result<Vec<CartItem>, StoreError> {
        Ok(self.read(keys::CART)?.unwrap_or_default())
    }

    /// Replace the whole cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_cart(&self, cart: &[CartItem]) -> Result<(), StoreError> {
        self.write(keys::CART, &cart)
    }

    /// Delete the cart key entirely (equivalent to an empty cart on next read).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend delete fails.
    pub fn clear_cart(&self) -> Result<(), StoreError> {
        Ok(self.backend.remove(keys::CART)?)
    }

    // =========================================================================
    // Current user
    // =========================================================================

    /// Read the current user, if one is logged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        self.read(keys::USER)
    }

    /// Persist `user` as the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn set_current_user(&self, user: &User) -> Result<(), StoreError> {
        self.write(keys::USER, user)
    }

    /// Clear the current user.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend delete fails.
    pub fn clear_current_user(&self) -> Result<(), StoreError> {
        Ok(self.backend.remove(keys::USER)?)
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Read all placed orders. An absent key means no orders yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored blob is corrupt.
    pub fn orders(&self) -> Result<Vec<Order>, StoreError> {
        Ok(self.read(keys::ORDERS)?.unwrap_or_default())
    }

    /// Replace the whole order collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    pub fn save_orders(&self, orders: &[Order]) -> Result<(), StoreError> {
        self.write(keys::ORDERS, &orders)
    }

    // =========================================================================
    // Blob plumbing
    // =========================================================================

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            key: key.to_owned(),
            source,
        })?;
        Ok(Some(value))
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Corrupt {
            key: key.to_owned(),
            source,
        })?;
        Ok(self.backend.set(key, &raw)?)
    }

    fn read_or_seed<T>(
        &self,
        key: &str,
        seed: impl FnOnce() -> Vec<T>,
    ) -> Result<Vec<T>, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(existing) = self.read(key)? {
            return Ok(existing);
        }
        let seeded = seed();
        self.write(key, &seeded)?;
        Ok(seeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larashen_core::{Email, Role, UserId};

    fn memory_store() -> Store {
        Store::new(Box::new(MemoryBackend::new()))
    }

    #[test]
    fn products_seed_once_and_stay_stable() {
        let store = memory_store();

        let first = store.products().expect("first read");
        assert_eq!(first.len(), 4);

        // Second read returns the same collection without re-seeding.
        let second = store.products().expect("second read");
        assert_eq!(first, second);

        // A catalogue append must not be clobbered by a later read.
        let mut extra = first[0].clone();
        extra.id = larashen_core::ProductId::new("5");
        store.save_product(extra).expect("append");
        assert_eq!(store.products().expect("third read").len(), 5);
    }

    #[test]
    fn seeding_writes_at_most_once() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        struct CountingBackend {
            inner: MemoryBackend,
            writes: Arc<AtomicUsize>,
        }

        impl KvBackend for CountingBackend {
            fn get(&self, key: &str) -> Result<Option<String>, BackendError> {
                self.inner.get(key)
            }

            fn set(&self, key: &str, value: &str) -> Result<(), BackendError> {
                self.writes.fetch_add(1, Ordering::Relaxed);
                self.inner.set(key, value)
            }

            fn remove(&self, key: &str) -> Result<(), BackendError> {
                self.inner.remove(key)
            }
        }

        let writes = Arc::new(AtomicUsize::new(0));
        let store = Store::new(Box::new(CountingBackend {
            inner: MemoryBackend::new(),
            writes: Arc::clone(&writes),
        }));

        store.products().expect("first read");
        store.products().expect("second read");
        store.products().expect("third read");

        // One write installs the seed; later reads never re-seed.
        assert_eq!(writes.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn gallery_seeds_six_looks() {
        let store = memory_store();
        assert_eq!(store.gallery().expect("gallery").len(), 6);
    }

    #[test]
    fn cart_defaults_to_empty_and_clear_removes_the_key() {
        let store = memory_store();
        assert!(store.cart().expect("cart").is_empty());

        let products = store.products().expect("products");
        let line = CartItem::new(
            &products[0],
            "M",
            larashen_core::CartLineId::new("line-1"),
        );
        store.save_cart(&[line]).expect("save");
        assert_eq!(store.cart().expect("cart").len(), 1);

        store.clear_cart().expect("clear");
        assert!(store.cart().expect("cart").is_empty());
    }

    #[test]
    fn current_user_round_trips() {
        let store = memory_store();
        assert!(store.current_user().expect("user").is_none());

        let user = User {
            id: UserId::new("u1"),
            email: Email::parse("amara@larashen.example").expect("email"),
            name: "amara".to_owned(),
            role: Role::Customer,
        };
        store.set_current_user(&user).expect("set");
        assert_eq!(store.current_user().expect("user"), Some(user));

        store.clear_current_user().expect("clear");
        assert!(store.current_user().expect("user").is_none());
    }

    #[test]
    fn corrupt_blob_surfaces_as_store_error() {
        let backend = MemoryBackend::new();
        backend.set("lns_products", "{not json").expect("set");

        let store = Store::new(Box::new(backend));
        let err = store.products().expect_err("corrupt read");
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "lns_products"));
    }
}
