//! CLI command implementations.

pub mod admin;
pub mod cart;
pub mod open;
pub mod orders;
pub mod session;
pub mod shop;
pub mod stylist;
