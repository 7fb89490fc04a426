//! Kitchen Order Ticket Model

use serde::{Deserialize, Serialize};

/// KOT preparation status
///
/// Normal flow is PENDING → PREPARING → READY → DELIVERED. CANCELLED and
/// PAID are reachable from any non-terminal status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KotStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
    Paid,
}

impl KotStatus {
    /// Terminal statuses leave the active kitchen view
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled | Self::Paid)
    }
}

/// KOT display priority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KotPriority {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

/// Line on a kitchen ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KotItem {
    pub name: String,
    pub quantity: i32,
    pub variation_name: Option<String>,
    #[serde(default)]
    pub addon_names: Vec<String>,
}

/// Kitchen order ticket entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kot {
    pub id: String,
    pub kot_number: String,
    pub order_number: String,
    pub table_number: Option<String>,
    #[serde(default)]
    pub priority: KotPriority,
    pub status: KotStatus,
    pub items: Vec<KotItem>,
    pub created_at: String,
}

/// Status update payload (`PATCH /api/kot/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KotStatusUpdate {
    pub status: KotStatus,
}

/// Active-KOT list response from the Kitchen API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KotListResponse {
    #[serde(default)]
    pub kots: Vec<Kot>,
}
