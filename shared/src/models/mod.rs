//! Data models
//!
//! Shared between the order-composition engine and the HTTP client.
//! Catalog entities (menu items, tables) are read-only inputs sourced from
//! the backend; order payload types are what we send back.

pub mod dining_table;
pub mod kot;
pub mod menu_item;
pub mod order;

// Re-exports
pub use dining_table::*;
pub use kot::*;
pub use menu_item::*;
pub use order::*;
