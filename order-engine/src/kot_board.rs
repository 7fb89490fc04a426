//! KOT status board
//!
//! In-memory view of the active kitchen tickets. Status changes are applied
//! optimistically: terminal statuses (DELIVERED, CANCELLED, PAID) remove the
//! ticket from the active view immediately, everything else updates in
//! place. The client layer confirms against the Kitchen API afterwards and
//! replaces the whole board from a refetch when the confirmation fails.

use shared::models::{Kot, KotStatus};
use tracing::debug;

/// Outcome of an optimistic status application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Status updated in place
    Updated,
    /// Terminal status; ticket removed from the active view
    Removed,
    /// No ticket with that id on the board
    NotFound,
}

/// Active-KOT list, insertion-ordered
#[derive(Debug, Default)]
pub struct KotBoard {
    active: Vec<Kot>,
}

impl KotBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the board with an authoritative list, dropping any tickets
    /// already in a terminal status
    pub fn replace_all(&mut self, kots: Vec<Kot>) {
        self.active = kots.into_iter().filter(|k| !k.status.is_terminal()).collect();
        debug!(count = self.active.len(), "KOT board replaced");
    }

    /// Apply a status change optimistically
    pub fn apply_status(&mut self, kot_id: &str, new_status: KotStatus) -> Applied {
        if new_status.is_terminal() {
            let before = self.active.len();
            self.active.retain(|k| k.id != kot_id);
            if self.active.len() < before {
                debug!(kot_id, ?new_status, "KOT removed from active view");
                Applied::Removed
            } else {
                Applied::NotFound
            }
        } else {
            match self.active.iter_mut().find(|k| k.id == kot_id) {
                Some(kot) => {
                    kot.status = new_status;
                    Applied::Updated
                }
                None => Applied::NotFound,
            }
        }
    }

    /// Active tickets in display order
    pub fn active(&self) -> &[Kot] {
        &self.active
    }

    /// Snapshot for two-phase updates: held before an optimistic apply so a
    /// failed confirmation can fall back to it while the refetch runs
    pub fn snapshot(&self) -> Vec<Kot> {
        self.active.clone()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
