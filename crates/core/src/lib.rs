//! Lara n Shen Core - Shared domain types.
//!
//! This crate provides the common types used across all Lara n Shen
//! components:
//! - `storefront` - Catalogue, cart, session, and order logic
//! - `cli` - Command-line storefront front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Entity types plus newtype wrappers for IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
