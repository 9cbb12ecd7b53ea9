//! Integration tests for the Lara n Shen storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p larashen-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - Cart, checkout, and order history over a fresh store
//! - `admin_catalog` - Role gating and content entry over a file-backed store
//! - `stylist_fallback` - Collaborator behavior with no credential
//!
//! All tests run against local backends; nothing here touches the network.

#![cfg_attr(not(test), forbid(unsafe_code))]

use larashen_storefront::app::App;
use larashen_storefront::store::{KvBackend, MemoryBackend, Store};

/// A fresh coordinator over an empty in-memory store.
///
/// # Panics
///
/// Panics if the initial mirror load fails, which an empty memory backend
/// never does.
#[must_use]
pub fn memory_app() -> App {
    App::new(memory_store()).expect("load app over empty memory backend")
}

/// A fresh store over an empty in-memory backend.
#[must_use]
pub fn memory_store() -> Store {
    Store::new(Box::new(MemoryBackend::new()))
}

/// A store over any backend, for file-backed tests.
#[must_use]
pub fn store_over(backend: impl KvBackend + 'static) -> Store {
    Store::new(Box::new(backend))
}
