//! Line-item builder
//!
//! Converts a (menu item, variation, add-on set) selection into a priced
//! order line with a content-addressed key. Two selections with the same
//! add-ons picked in a different order produce the same key, so re-adding
//! an identical combination merges into one line instead of duplicating.

use rust_decimal::Decimal;
use shared::models::{AddOn, MenuItem, Variation};
use shared::ValidationError;
use tracing::debug;

use crate::error::{ComposeError, ComposeResult};
use crate::money::to_decimal;

/// Generate the line key for an (item, variation, add-on set) combination
///
/// Add-on ids are sorted before hashing so the key is order-independent.
/// Hex of the first 16 hash bytes, matching the short content-addressed id
/// convention used elsewhere in the payloads.
pub fn line_key(item_id: &str, variation_id: &str, addon_ids: &[String]) -> String {
    use sha2::{Digest, Sha256};

    let mut sorted: Vec<&str> = addon_ids.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut hasher = Sha256::new();
    hasher.update(item_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(variation_id.as_bytes());
    for id in sorted {
        hasher.update([0u8]);
        hasher.update(id.as_bytes());
    }

    let result = hasher.finalize();
    hex::encode(&result[..16])
}

/// Per-unit price: variation price plus the sum of add-on prices
pub fn unit_price(variation: &Variation, addons: &[AddOn]) -> Decimal {
    let addon_total: Decimal = addons.iter().map(|a| to_decimal(a.price)).sum();
    to_decimal(variation.price) + addon_total
}

/// Priced order line
///
/// Created when a selection is confirmed; destroyed when its quantity
/// reaches zero or it is removed explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Content-addressed key over (item, variation, add-on set)
    pub key: String,
    pub item_id: String,
    pub item_name: String,
    pub variation: Variation,
    /// Chosen add-ons, sorted by id
    pub addons: Vec<AddOn>,
    /// Always >= 1; a zero quantity removes the line from the cart
    pub quantity: i32,
    pub unit_price: Decimal,
}

impl OrderLine {
    /// unit_price × quantity
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

/// Staged item selection backing the item modal
///
/// Holds the item, the chosen variation, and the add-on set until the
/// selection is confirmed or discarded. Confirming without a variation is
/// a validation error, never a line.
#[derive(Debug, Default)]
pub struct PendingSelection {
    item: Option<MenuItem>,
    variation: Option<Variation>,
    addons: Vec<AddOn>,
}

impl PendingSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an item for selection, clearing any previous staging
    ///
    /// Inactive items are refused; the catalog marks them not orderable.
    pub fn open(&mut self, item: &MenuItem) -> ComposeResult<()> {
        if !item.is_active() {
            return Err(ComposeError::InactiveItem(item.name.clone()));
        }
        self.item = Some(item.clone());
        self.variation = None;
        self.addons.clear();
        Ok(())
    }

    /// Discard the staged selection without touching the cart
    pub fn close(&mut self) {
        self.item = None;
        self.variation = None;
        self.addons.clear();
    }

    /// The currently staged item, if any
    pub fn item(&self) -> Option<&MenuItem> {
        self.item.as_ref()
    }

    pub fn variation(&self) -> Option<&Variation> {
        self.variation.as_ref()
    }

    pub fn addons(&self) -> &[AddOn] {
        &self.addons
    }

    /// Choose the variation (exactly one per line, no default)
    pub fn choose_variation(&mut self, variation: Variation) -> ComposeResult<()> {
        if variation.price < 0.0 {
            return Err(ValidationError::NegativePrice(variation.price).into());
        }
        self.variation = Some(variation);
        Ok(())
    }

    /// Toggle an add-on: absent adds it, present removes it (set semantics)
    pub fn toggle_addon(&mut self, addon: AddOn) -> ComposeResult<()> {
        if addon.price < 0.0 {
            return Err(ValidationError::NegativePrice(addon.price).into());
        }
        if let Some(pos) = self.addons.iter().position(|a| a.id == addon.id) {
            self.addons.remove(pos);
        } else {
            self.addons.push(addon);
        }
        Ok(())
    }

    /// Confirm the staged selection into an [`OrderLine`]
    ///
    /// Fails with [`ValidationError::MissingVariation`] if no variation is
    /// chosen. Consumes the staging on success.
    pub fn confirm(&mut self, quantity: i32) -> ComposeResult<OrderLine> {
        let item = self
            .item
            .as_ref()
            .ok_or(ValidationError::MissingVariation)?;
        let variation = self
            .variation
            .clone()
            .ok_or(ValidationError::MissingVariation)?;
        if quantity < 1 {
            return Err(ValidationError::InvalidQuantity(quantity).into());
        }

        let mut addons = self.addons.clone();
        addons.sort_by(|a, b| a.id.cmp(&b.id));
        let addon_ids: Vec<String> = addons.iter().map(|a| a.id.clone()).collect();

        let line = OrderLine {
            key: line_key(&item.id, &variation.id, &addon_ids),
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            unit_price: unit_price(&variation, &addons),
            variation,
            addons,
            quantity,
        };

        debug!(
            key = %line.key,
            item = %line.item_name,
            quantity = line.quantity,
            "Selection confirmed"
        );

        self.close();
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::to_f64;
    use shared::models::MenuItemStatus;

    fn pizza() -> MenuItem {
        MenuItem {
            id: "item-pizza".to_string(),
            name: "Pizza".to_string(),
            description: None,
            status: MenuItemStatus::Active,
            category: None,
            variations: vec![
                Variation {
                    id: "var-small".to_string(),
                    name: "Small".to_string(),
                    price: 100.0,
                },
                Variation {
                    id: "var-large".to_string(),
                    name: "Large".to_string(),
                    price: 180.0,
                },
            ],
            addons: vec![
                AddOn {
                    id: "add-cheese".to_string(),
                    name: "Cheese".to_string(),
                    price: 20.0,
                },
                AddOn {
                    id: "add-olives".to_string(),
                    name: "Olives".to_string(),
                    price: 15.0,
                },
            ],
        }
    }

    #[test]
    fn test_line_key_is_addon_order_independent() {
        let a = line_key(
            "item-1",
            "var-1",
            &["add-b".to_string(), "add-a".to_string()],
        );
        let b = line_key(
            "item-1",
            "var-1",
            &["add-a".to_string(), "add-b".to_string()],
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_line_key_distinguishes_combinations() {
        let base = line_key("item-1", "var-1", &[]);
        let other_variation = line_key("item-1", "var-2", &[]);
        let with_addon = line_key("item-1", "var-1", &["add-a".to_string()]);
        assert_ne!(base, other_variation);
        assert_ne!(base, with_addon);
    }

    #[test]
    fn test_confirm_without_variation_fails() {
        let mut pending = PendingSelection::new();
        pending.open(&pizza()).unwrap();

        let result = pending.confirm(1);
        assert_eq!(
            result.unwrap_err(),
            ComposeError::Validation(ValidationError::MissingVariation)
        );
    }

    #[test]
    fn test_confirm_large_pizza_with_addons() {
        // Large(180) + Cheese(20) + Olives(15) -> unit 215, qty 2 -> 430
        let item = pizza();
        let mut pending = PendingSelection::new();
        pending.open(&item).unwrap();
        pending
            .choose_variation(item.variation("var-large").unwrap().clone())
            .unwrap();
        pending
            .toggle_addon(item.addon("add-cheese").unwrap().clone())
            .unwrap();
        pending
            .toggle_addon(item.addon("add-olives").unwrap().clone())
            .unwrap();

        let line = pending.confirm(2).unwrap();
        assert_eq!(to_f64(line.unit_price), 215.0);
        assert_eq!(to_f64(line.line_total()), 430.0);
        // Staging is consumed
        assert!(pending.item().is_none());
    }

    #[test]
    fn test_toggle_addon_twice_removes_it() {
        let item = pizza();
        let mut pending = PendingSelection::new();
        pending.open(&item).unwrap();
        let cheese = item.addon("add-cheese").unwrap().clone();
        pending.toggle_addon(cheese.clone()).unwrap();
        pending.toggle_addon(cheese).unwrap();
        assert!(pending.addons().is_empty());
    }

    #[test]
    fn test_open_clears_previous_staging() {
        let item = pizza();
        let mut pending = PendingSelection::new();
        pending.open(&item).unwrap();
        pending
            .choose_variation(item.variation("var-small").unwrap().clone())
            .unwrap();
        pending
            .toggle_addon(item.addon("add-cheese").unwrap().clone())
            .unwrap();

        pending.open(&item).unwrap();
        assert!(pending.variation().is_none());
        assert!(pending.addons().is_empty());
    }

    #[test]
    fn test_open_inactive_item_fails() {
        let mut item = pizza();
        item.status = MenuItemStatus::Inactive;
        let mut pending = PendingSelection::new();
        assert!(matches!(
            pending.open(&item),
            Err(ComposeError::InactiveItem(_))
        ));
    }

    #[test]
    fn test_confirm_zero_quantity_fails() {
        let item = pizza();
        let mut pending = PendingSelection::new();
        pending.open(&item).unwrap();
        pending
            .choose_variation(item.variation("var-small").unwrap().clone())
            .unwrap();
        assert_eq!(
            pending.confirm(0).unwrap_err(),
            ComposeError::Validation(ValidationError::InvalidQuantity(0))
        );
    }
}
