//! Comanda Client - HTTP client for the POS backend
//!
//! Token-authenticated access to the Menu/Catalog, Order, and Kitchen APIs,
//! plus the session catalog cache and the kitchen service implementing
//! optimistic KOT updates with refetch reconciliation.

pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod kitchen;
pub mod orders;

pub use catalog::CatalogCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use kitchen::{HttpKitchenApi, KitchenApi, KitchenService};
pub use orders::create_order;

// Re-export engine types for convenience
pub use order_engine::{Cart, KotBoard, PendingSelection, TableSelector};
