//! Lara n Shen Storefront library.
//!
//! Catalogue browsing, lookbook gallery, cart, simulated checkout, and the
//! AI stylist for a fashion retail storefront. All durable state lives in a
//! local key-value store of whole-collection JSON blobs; there is no backend
//! beyond the single generative-text API.
//!
//! The [`app::App`] coordinator owns the only [`store::Store`] handle and the
//! render-time mirrors of the product list, cart, and current user. Every
//! mutation flows through a domain service in [`services`] and then re-reads
//! the affected collection.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod advice;
pub mod app;
pub mod config;
pub mod error;
pub mod services;
pub mod store;
pub mod stylist;
