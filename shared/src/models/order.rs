//! Order Submission Model
//!
//! Payload types for `POST /api/orders`. The engine builds these from the
//! cart and table selection; the client only ships them.

use serde::{Deserialize, Serialize};

/// Customer info captured on the order form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: Option<String>,
}

/// One priced order line in the submission payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLinePayload {
    /// Menu item reference (String ID)
    pub item_id: String,
    /// Chosen variation reference (String ID)
    pub variation_id: String,
    /// Chosen add-on references, sorted (String IDs)
    pub addon_ids: Vec<String>,
    pub quantity: i32,
    /// Per-unit price in currency unit: variation + add-ons
    pub unit_price: f64,
    /// unit_price × quantity
    pub line_total: f64,
}

/// Create order payload
///
/// Table fields are mutually exclusive: `table_id` for a single table,
/// `merged_table_ids` when tables were merged, neither for a tableless order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: CustomerInfo,
    pub guest_count: i32,
    pub items: Vec<OrderLinePayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_table_ids: Option<Vec<String>>,
    /// Order total in currency unit
    pub total: f64,
}

/// Created order returned by the Order API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: String,
    pub order_number: String,
    pub total: f64,
    pub created_at: String,
}
