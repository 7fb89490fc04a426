//! Table selection resolver
//!
//! Two explicit modes, switched by the caller: SINGLE picks one table,
//! MERGE combines several until their aggregate capacity covers the guest
//! count. Once capacity is met, selecting further tables is rejected;
//! deselecting an already-selected table is always permitted. Orders may
//! also be tableless.

use std::collections::BTreeMap;

use shared::models::DiningTable;
use tracing::debug;

use crate::error::{ComposeError, ComposeResult};

/// Selection mode, set explicitly by the caller (never inferred)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    #[default]
    Single,
    Merge,
}

/// Resolved table assignment handed to the submission builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableChoice {
    /// Tableless order
    None,
    Single(String),
    /// Merged tables, in table-id order
    Merged(Vec<String>),
}

/// Table selection state machine
#[derive(Debug, Default)]
pub struct TableSelector {
    mode: SelectionMode,
    single: Option<DiningTable>,
    /// Merge set keyed by table id; duplicate-free by construction
    merged: BTreeMap<String, DiningTable>,
}

impl TableSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Switch modes, clearing the other mode's selection
    pub fn set_mode(&mut self, mode: SelectionMode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        match mode {
            SelectionMode::Single => self.merged.clear(),
            SelectionMode::Merge => self.single = None,
        }
        debug!(?mode, "Table selection mode switched");
    }

    /// SINGLE mode: set exactly one table, replacing any previous choice
    ///
    /// Availability filtering happens at the catalog; no capacity check is
    /// enforced at selection time.
    pub fn select(&mut self, table: DiningTable) -> ComposeResult<()> {
        if self.mode != SelectionMode::Single {
            return Err(ComposeError::WrongMode);
        }
        self.single = Some(table);
        Ok(())
    }

    /// Clear the single selection (tableless order)
    pub fn clear(&mut self) {
        self.single = None;
        self.merged.clear();
    }

    /// MERGE mode: toggle a table's membership in the merge set
    ///
    /// Deselecting is always allowed. Selecting a new table once capacity is
    /// already met is rejected.
    pub fn toggle(&mut self, table: DiningTable, guest_count: i32) -> ComposeResult<()> {
        if self.mode != SelectionMode::Merge {
            return Err(ComposeError::WrongMode);
        }
        if self.merged.remove(&table.id).is_some() {
            debug!(table = %table.table_number, "Table deselected from merge");
            return Ok(());
        }
        if self.capacity_met(guest_count) {
            return Err(ComposeError::SelectionLocked);
        }
        debug!(
            table = %table.table_number,
            capacity = table.capacity,
            "Table added to merge"
        );
        self.merged.insert(table.id.clone(), table);
        Ok(())
    }

    /// Σ capacity of all tables currently in the merge set
    pub fn aggregate_capacity(&self) -> i32 {
        self.merged.values().map(|t| t.capacity).sum()
    }

    /// Whether the merged capacity covers the guest count
    pub fn capacity_met(&self, guest_count: i32) -> bool {
        self.aggregate_capacity() >= guest_count
    }

    /// Resolve the current selection for submission
    ///
    /// An empty selection in either mode resolves to [`TableChoice::None`]
    /// (orders may be tableless).
    pub fn resolve(&self) -> TableChoice {
        match self.mode {
            SelectionMode::Single => match &self.single {
                Some(t) => TableChoice::Single(t.id.clone()),
                None => TableChoice::None,
            },
            SelectionMode::Merge => {
                if self.merged.is_empty() {
                    TableChoice::None
                } else {
                    TableChoice::Merged(self.merged.keys().cloned().collect())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::TableStatus;

    fn table(id: &str, capacity: i32) -> DiningTable {
        DiningTable {
            id: id.to_string(),
            table_number: id.to_uppercase(),
            capacity,
            status: TableStatus::Available,
        }
    }

    #[test]
    fn test_single_select_replaces() {
        let mut sel = TableSelector::new();
        sel.select(table("t1", 2)).unwrap();
        sel.select(table("t2", 4)).unwrap();
        assert_eq!(sel.resolve(), TableChoice::Single("t2".to_string()));
    }

    #[test]
    fn test_tableless_sentinel() {
        let sel = TableSelector::new();
        assert_eq!(sel.resolve(), TableChoice::None);
    }

    #[test]
    fn test_merge_lock_after_capacity_met() {
        // guestCount=6: T1(2) not met, +T2(3) not met, +T3(4) -> 9 >= 6 met;
        // T4 rejected; deselecting T1 still allowed, aggregate drops to 7.
        let mut sel = TableSelector::new();
        sel.set_mode(SelectionMode::Merge);

        sel.toggle(table("t1", 2), 6).unwrap();
        assert!(!sel.capacity_met(6));
        sel.toggle(table("t2", 3), 6).unwrap();
        assert!(!sel.capacity_met(6));
        sel.toggle(table("t3", 4), 6).unwrap();
        assert_eq!(sel.aggregate_capacity(), 9);
        assert!(sel.capacity_met(6));

        assert_eq!(
            sel.toggle(table("t4", 4), 6).unwrap_err(),
            ComposeError::SelectionLocked
        );

        sel.toggle(table("t1", 2), 6).unwrap();
        assert_eq!(sel.aggregate_capacity(), 7);
    }

    #[test]
    fn test_toggle_is_set_semantics() {
        let mut sel = TableSelector::new();
        sel.set_mode(SelectionMode::Merge);
        sel.toggle(table("t1", 2), 10).unwrap();
        sel.toggle(table("t1", 2), 10).unwrap();
        assert_eq!(sel.aggregate_capacity(), 0);
        assert_eq!(sel.resolve(), TableChoice::None);
    }

    #[test]
    fn test_mode_switch_clears_other_selection() {
        let mut sel = TableSelector::new();
        sel.select(table("t1", 2)).unwrap();

        sel.set_mode(SelectionMode::Merge);
        assert_eq!(sel.resolve(), TableChoice::None);
        sel.toggle(table("t2", 4), 4).unwrap();

        sel.set_mode(SelectionMode::Single);
        assert_eq!(sel.resolve(), TableChoice::None);
        assert_eq!(sel.aggregate_capacity(), 0);
    }

    #[test]
    fn test_select_rejected_in_merge_mode() {
        let mut sel = TableSelector::new();
        sel.set_mode(SelectionMode::Merge);
        assert!(sel.select(table("t1", 2)).is_err());
    }

    #[test]
    fn test_merged_resolve_orders_by_id() {
        let mut sel = TableSelector::new();
        sel.set_mode(SelectionMode::Merge);
        sel.toggle(table("t3", 1), 99).unwrap();
        sel.toggle(table("t1", 1), 99).unwrap();
        sel.toggle(table("t2", 1), 99).unwrap();
        assert_eq!(
            sel.resolve(),
            TableChoice::Merged(vec![
                "t1".to_string(),
                "t2".to_string(),
                "t3".to_string()
            ])
        );
    }
}
