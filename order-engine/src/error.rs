//! Engine error types

use shared::ValidationError;
use thiserror::Error;

/// Error raised by order-composition operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ComposeError {
    /// A local precondition failed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Merge capacity already met; new tables cannot be selected
    #[error("Merge capacity is met; deselect a table before adding another")]
    SelectionLocked,

    /// Operation does not match the active selection mode
    #[error("Operation not valid in the current selection mode")]
    WrongMode,

    /// Table id not present in the known table set
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// Item is not available for ordering
    #[error("Item is not available: {0}")]
    InactiveItem(String),
}

/// Result type for engine operations
pub type ComposeResult<T> = Result<T, ComposeError>;
