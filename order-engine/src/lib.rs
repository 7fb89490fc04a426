//! Order Composition Engine
//!
//! Pure in-memory business core for building a restaurant order:
//! - [`line_item`]: staged item selection and priced, uniquely-keyed lines
//! - [`cart`]: ordered line collection with merge-by-key semantics
//! - [`table_select`]: single-table or merged-table selection with
//!   capacity rules
//! - [`submit`]: validation and assembly of the order-creation payload
//! - [`kot_board`]: kitchen ticket status lifecycle for the active view
//!
//! Nothing here performs I/O; network submission and reconciliation live in
//! the client crate.

pub mod cart;
pub mod error;
pub mod kot_board;
pub mod line_item;
pub mod money;
pub mod submit;
pub mod table_select;

// Re-exports
pub use cart::Cart;
pub use error::{ComposeError, ComposeResult};
pub use kot_board::{Applied, KotBoard};
pub use line_item::{line_key, unit_price, OrderLine, PendingSelection};
pub use submit::build_order_request;
pub use table_select::{SelectionMode, TableChoice, TableSelector};
