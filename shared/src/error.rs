//! Local validation errors
//!
//! Every variant is a precondition failure detected before any network call
//! is attempted. Transport failures live in the client crate.

use thiserror::Error;

/// Validation error raised while composing or submitting an order
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// A line item was confirmed without choosing a variation
    #[error("A variation must be selected")]
    MissingVariation,

    /// Customer name is required for submission
    #[error("Customer name must not be empty")]
    EmptyCustomerName,

    /// Guest count must be at least 1
    #[error("Guest count must be at least 1, got {0}")]
    InvalidGuestCount(i32),

    /// Submission requires at least one order line
    #[error("Order has no items")]
    EmptyCart,

    /// Merged tables do not seat the requested guest count
    #[error("Merged capacity {selected} does not cover {required} guests")]
    CapacityNotMet { selected: i32, required: i32 },

    /// Prices sourced from the catalog must be non-negative
    #[error("Price must be non-negative, got {0}")]
    NegativePrice(f64),

    /// Line quantity must be positive when confirming a selection
    #[error("Quantity must be positive, got {0}")]
    InvalidQuantity(i32),
}

/// Result type for validation checks
pub type ValidationResult<T> = Result<T, ValidationError>;
