//! Unified error handling for the storefront.
//!
//! Domain services and the application coordinator return `Result<T, AppError>`.
//! Storage corruption propagates untouched: a collection that no longer
//! deserializes is fatal for the current view.

use larashen_core::{EmailError, PriceError, ProductId};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Persistent store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A catalogue lookup came up empty.
    #[error("No product with id {0}")]
    ProductNotFound(ProductId),

    /// Login input failed the basic email checks.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// Admin submission carried a negative price.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),
}
