//! Dining Table Model

use serde::{Deserialize, Serialize};

/// Dining table status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    Reserved,
}

/// Dining table entity (read-only input to table selection)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: String,
    pub table_number: String,
    /// Seats (positive)
    pub capacity: i32,
    pub status: TableStatus,
}

impl DiningTable {
    /// Whether the table can be offered for selection
    pub fn is_available(&self) -> bool {
        self.status == TableStatus::Available
    }
}
