//! Core types for the Lara n Shen storefront.
//!
//! Entity types mirror the persisted JSON layout: collection entries keep
//! their camelCase field names on the wire.

pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod user;

pub use cart::{CartItem, cart_total};
pub use email::{Email, EmailError};
pub use id::*;
pub use order::{Order, OrderStatus};
pub use price::{Price, PriceError};
pub use product::{GalleryItem, Product};
pub use user::{Role, User};
