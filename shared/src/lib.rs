//! Shared types for the Comanda POS client
//!
//! Data models and error types used by both the order-composition engine
//! and the HTTP client crate.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ValidationError, ValidationResult};
pub use serde::{Deserialize, Serialize};
