//! Domain services over the persistent store.
//!
//! Free functions that read, mutate, and persist whole collections. The
//! application coordinator calls these and then re-reads the affected
//! collection into its render-time mirrors.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod session;
