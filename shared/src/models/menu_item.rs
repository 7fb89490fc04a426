//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Menu item availability status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuItemStatus {
    #[default]
    Active,
    Inactive,
}

/// Priced size/portion option; exactly one is chosen per order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variation {
    pub id: String,
    pub name: String,
    /// Price in currency unit (non-negative)
    pub price: f64,
}

/// Optional priced extra; zero or more are chosen per order line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    /// Price in currency unit (non-negative)
    pub price: f64,
}

/// Menu item entity (read-only input from the Menu API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: MenuItemStatus,
    /// Category reference (String ID)
    pub category: Option<String>,
    pub variations: Vec<Variation>,
    pub addons: Vec<AddOn>,
}

impl MenuItem {
    /// Whether the item can be added to an order
    pub fn is_active(&self) -> bool {
        self.status == MenuItemStatus::Active
    }

    /// Look up a variation by id
    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    /// Look up an add-on by id
    pub fn addon(&self, id: &str) -> Option<&AddOn> {
        self.addons.iter().find(|a| a.id == id)
    }
}
