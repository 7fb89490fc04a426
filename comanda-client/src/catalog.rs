//! Catalog cache
//!
//! Session-scoped, read-through cache of menu items and dining tables. The
//! cache holds whatever the last refresh returned; it has no mutation logic
//! of its own beyond replacement.

use parking_lot::RwLock;
use shared::models::{DiningTable, MenuItem};
use tracing::debug;

use crate::{ClientResult, HttpClient};

#[derive(Debug, Default)]
struct CatalogState {
    menu_items: Vec<MenuItem>,
    tables: Vec<DiningTable>,
}

/// In-memory catalog for the session
#[derive(Debug, Default)]
pub struct CatalogCache {
    state: RwLock<CatalogState>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh both menu items and tables from the Catalog API
    pub async fn refresh(&self, client: &HttpClient) -> ClientResult<()> {
        let menu_items: Vec<MenuItem> = client.get("/api/menu-items").await?;
        let tables: Vec<DiningTable> = client.get("/api/tables").await?;

        debug!(
            menu_items = menu_items.len(),
            tables = tables.len(),
            "Catalog refreshed"
        );

        let mut state = self.state.write();
        state.menu_items = menu_items;
        state.tables = tables;
        Ok(())
    }

    /// Seed the cache directly (tests, offline startup)
    pub fn replace(&self, menu_items: Vec<MenuItem>, tables: Vec<DiningTable>) {
        let mut state = self.state.write();
        state.menu_items = menu_items;
        state.tables = tables;
    }

    /// Look up a menu item by id
    pub fn menu_item(&self, id: &str) -> Option<MenuItem> {
        self.state
            .read()
            .menu_items
            .iter()
            .find(|m| m.id == id)
            .cloned()
    }

    /// Menu items that can currently be ordered
    pub fn active_menu_items(&self) -> Vec<MenuItem> {
        self.state
            .read()
            .menu_items
            .iter()
            .filter(|m| m.is_active())
            .cloned()
            .collect()
    }

    /// All cached menu items, including inactive ones
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.state.read().menu_items.clone()
    }

    /// Tables offered for selection (status AVAILABLE)
    pub fn available_tables(&self) -> Vec<DiningTable> {
        self.state
            .read()
            .tables
            .iter()
            .filter(|t| t.is_available())
            .cloned()
            .collect()
    }

    /// Look up a table by id
    pub fn table(&self, id: &str) -> Option<DiningTable> {
        self.state.read().tables.iter().find(|t| t.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuItemStatus, TableStatus};

    fn menu_item(id: &str, status: MenuItemStatus) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            status,
            category: None,
            variations: vec![],
            addons: vec![],
        }
    }

    fn table(id: &str, status: TableStatus) -> DiningTable {
        DiningTable {
            id: id.to_string(),
            table_number: id.to_uppercase(),
            capacity: 4,
            status,
        }
    }

    #[test]
    fn test_active_menu_items_filters_inactive() {
        let cache = CatalogCache::new();
        cache.replace(
            vec![
                menu_item("m1", MenuItemStatus::Active),
                menu_item("m2", MenuItemStatus::Inactive),
            ],
            vec![],
        );
        let active = cache.active_menu_items();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "m1");
    }

    #[test]
    fn test_available_tables_filters_by_status() {
        let cache = CatalogCache::new();
        cache.replace(
            vec![],
            vec![
                table("t1", TableStatus::Available),
                table("t2", TableStatus::Occupied),
                table("t3", TableStatus::Reserved),
            ],
        );
        let available = cache.available_tables();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id, "t1");
    }

    #[test]
    fn test_lookup_by_id() {
        let cache = CatalogCache::new();
        cache.replace(
            vec![menu_item("m1", MenuItemStatus::Active)],
            vec![table("t1", TableStatus::Available)],
        );
        assert!(cache.menu_item("m1").is_some());
        assert!(cache.menu_item("m2").is_none());
        assert!(cache.table("t1").is_some());
        assert!(cache.table("t9").is_none());
    }
}
