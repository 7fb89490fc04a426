//! Order cart
//!
//! Insertion-ordered collection of [`OrderLine`]s. Lines with the same key
//! merge by incrementing quantity. The total is recomputed on demand; no
//! cached amount can go stale.

use rust_decimal::Decimal;
use tracing::debug;

use crate::line_item::OrderLine;

/// In-memory cart; pure state, no network side effects
#[derive(Debug, Default)]
pub struct Cart {
    lines: Vec<OrderLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line, or increment the quantity of an existing line with the
    /// same key
    pub fn add_or_increment(&mut self, line: OrderLine) {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.key == line.key) {
            existing.quantity += line.quantity;
            debug!(key = %existing.key, quantity = existing.quantity, "Line merged");
        } else {
            debug!(key = %line.key, quantity = line.quantity, "Line appended");
            self.lines.push(line);
        }
    }

    /// Set a line's quantity; zero or below removes the line
    ///
    /// Quantity 0 is the defined removal path, not an error. Unknown keys
    /// are a no-op.
    pub fn set_quantity(&mut self, key: &str, quantity: i32) {
        if quantity <= 0 {
            self.remove(key);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            line.quantity = quantity;
        }
    }

    /// Remove a line unconditionally; idempotent if the key is absent
    pub fn remove(&mut self, key: &str) {
        self.lines.retain(|l| l.key != key);
    }

    /// Recompute the cart total: Σ unit_price × quantity
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines in insertion order (display order)
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
