//! # Draft Order
//!
//! The in-memory order being built at the counter.
//!
//! ## Draft Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Order Operations                               │
//! │                                                                         │
//! │  Front-End Action          Engine Call              Draft Change        │
//! │  ───────────────           ───────────              ────────────        │
//! │                                                                         │
//! │  "Add to Order" ─────────► add_item(item) ────────► items.push(item)   │
//! │                                                                         │
//! │  Click row ✕ ────────────► remove_item(index) ────► items.remove(i)    │
//! │                                                                         │
//! │  Totals footer ──────────► total_cost() ──────────► (recomputed)       │
//! │                                                                         │
//! │  "Save Order" ───────────► validate_for_submission()                   │
//! │       │                                                                 │
//! │       └── ok ────────────► handed to persistence, then clear()         │
//! │                                                                         │
//! │  The draft lives only in memory. It is submitted as a unit and         │
//! │  discarded on success; nothing is persisted item-by-item.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why No Stored Running Total?
//! The total is recomputed from the items on every call. A cached total
//! would drift from the items under floating-point accumulation order;
//! recomputing makes "total = sum of items" true by construction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{CustomerDetails, LineItem};
use crate::units::round2;
use crate::validation;
use crate::MAX_ORDER_ITEMS;

// =============================================================================
// Draft Order
// =============================================================================

/// An order being assembled, before submission.
///
/// ## Invariants
/// - Items keep their insertion order (removal is by position)
/// - A finalized item is never mutated in place - only appended/removed
/// - The total is always derived, never stored
///
/// Each draft is owned exclusively by the caller building it; the engine
/// never retains a reference across calls, so concurrent counters can
/// each build their own order safely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DraftOrder {
    /// Customer contact fields, filled in at any point before submission.
    pub customer: CustomerDetails,

    /// Finalized line items, in the order they were added.
    items: Vec<LineItem>,
}

impl DraftOrder {
    /// Creates a new empty draft order.
    pub fn new() -> Self {
        DraftOrder::default()
    }

    /// Returns the finalized items, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the draft has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a finalized line item.
    ///
    /// ## Errors
    /// [`CoreError::OrderTooLarge`] once the draft holds the maximum
    /// number of items.
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        if self.items.len() >= MAX_ORDER_ITEMS {
            return Err(CoreError::OrderTooLarge {
                max: MAX_ORDER_ITEMS,
            });
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the item at `index`.
    ///
    /// ## Errors
    /// [`CoreError::IndexOutOfRange`] if `index` is outside `[0, len)`.
    /// That is a caller bug (a stale row index), not user input error.
    pub fn remove_item(&mut self, index: usize) -> CoreResult<LineItem> {
        if index >= self.items.len() {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        Ok(self.items.remove(index))
    }

    /// Clears the draft back to an empty order.
    ///
    /// Called after a successful save, or when the user abandons the
    /// order.
    pub fn clear(&mut self) {
        self.customer = CustomerDetails::default();
        self.items.clear();
    }

    /// The precise order total: the exact sum of the items' costs.
    ///
    /// Recomputed fresh on every call; item costs are already rounded to
    /// 2 dp, and their sum is NOT re-rounded here.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    /// The order total rounded to 2 dp, for display and persistence.
    ///
    /// Kept separate from [`total_cost`](Self::total_cost) so callers can
    /// choose the precise sum where it matters (e.g., reconciliation)
    /// and the clean figure where it is shown or stored.
    pub fn total_cost_rounded(&self) -> f64 {
        round2(self.total_cost())
    }

    /// Total fabric consumption across all items, in meters.
    ///
    /// Shown on the tailoring sheet so the cutting table can pull bolts
    /// before starting.
    pub fn total_fabric_used_m(&self) -> f64 {
        self.items.iter().map(|item| item.fabric_used_m).sum()
    }

    /// Checks the submission preconditions.
    ///
    /// ## Errors
    /// - [`CoreError::MissingCustomerName`] - name empty or all-whitespace
    /// - [`CoreError::EmptyOrder`] - no line items
    ///
    /// Submission itself (handing the draft to persistence) is the
    /// caller's job; this only gates it.
    pub fn validate_for_submission(&self) -> CoreResult<()> {
        if validation::validate_customer_name(&self.customer.name).is_err() {
            return Err(CoreError::MissingCustomerName);
        }

        if self.items.is_empty() {
            return Err(CoreError::EmptyOrder);
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemType;

    fn test_item(cost: f64, fabric_used_m: f64) -> LineItem {
        LineItem {
            fabric_id: "fabric-1".to_string(),
            fabric_name: "Velvet".to_string(),
            design_code: "VLV-101".to_string(),
            item_type: ItemType::Curtain,
            length_cm: 100.0,
            quantity: 1,
            fabric_used_m,
            cost,
        }
    }

    #[test]
    fn test_add_then_remove_restores_empty_order() {
        let empty = DraftOrder::new();
        let mut order = DraftOrder::new();

        order.add_item(test_item(32.0, 2.2)).unwrap();
        assert_eq!(order.item_count(), 1);

        let removed = order.remove_item(0).unwrap();
        assert_eq!(removed.cost, 32.0);
        assert_eq!(order, empty);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut order = DraftOrder::new();
        order.add_item(test_item(10.0, 1.0)).unwrap();

        let err = order.remove_item(1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::IndexOutOfRange { index: 1, len: 1 }
        ));

        let err = DraftOrder::new().remove_item(0).unwrap_err();
        assert!(matches!(err, CoreError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_remove_keeps_insertion_order() {
        let mut order = DraftOrder::new();
        order.add_item(test_item(1.0, 0.1)).unwrap();
        order.add_item(test_item(2.0, 0.2)).unwrap();
        order.add_item(test_item(3.0, 0.3)).unwrap();

        order.remove_item(1).unwrap();

        let costs: Vec<f64> = order.items().iter().map(|i| i.cost).collect();
        assert_eq!(costs, vec![1.0, 3.0]);
    }

    #[test]
    fn test_total_is_sum_of_items() {
        let mut order = DraftOrder::new();
        order.add_item(test_item(32.0, 2.2)).unwrap();
        order.add_item(test_item(60.0, 6.0)).unwrap();
        order.add_item(test_item(7.5, 0.5)).unwrap();

        assert_eq!(order.total_cost(), 32.0 + 60.0 + 7.5);
        assert_eq!(order.total_cost_rounded(), 99.5);
        assert_eq!(order.total_fabric_used_m(), 2.2 + 6.0 + 0.5);
    }

    #[test]
    fn test_total_independent_of_insertion_order() {
        let costs = [12.34, 56.78, 9.01, 0.99];

        let mut forward = DraftOrder::new();
        for cost in costs {
            forward.add_item(test_item(cost, 1.0)).unwrap();
        }
        let mut backward = DraftOrder::new();
        for cost in costs.iter().rev() {
            backward.add_item(test_item(*cost, 1.0)).unwrap();
        }

        let diff = (forward.total_cost() - backward.total_cost()).abs();
        assert!(diff < 1e-9);
        assert_eq!(forward.total_cost_rounded(), backward.total_cost_rounded());
    }

    #[test]
    fn test_empty_total_is_zero() {
        assert_eq!(DraftOrder::new().total_cost(), 0.0);
    }

    #[test]
    fn test_item_cap() {
        let mut order = DraftOrder::new();
        for _ in 0..MAX_ORDER_ITEMS {
            order.add_item(test_item(1.0, 0.1)).unwrap();
        }

        let err = order.add_item(test_item(1.0, 0.1)).unwrap_err();
        assert!(matches!(err, CoreError::OrderTooLarge { .. }));
    }

    #[test]
    fn test_submission_requires_customer_name() {
        let mut order = DraftOrder::new();
        order.add_item(test_item(32.0, 2.2)).unwrap();

        let err = order.validate_for_submission().unwrap_err();
        assert!(matches!(err, CoreError::MissingCustomerName));

        order.customer.name = "   ".to_string();
        let err = order.validate_for_submission().unwrap_err();
        assert!(matches!(err, CoreError::MissingCustomerName));
    }

    #[test]
    fn test_submission_requires_items() {
        let mut order = DraftOrder::new();
        order.customer.name = "Ayesha Khan".to_string();

        let err = order.validate_for_submission().unwrap_err();
        assert!(matches!(err, CoreError::EmptyOrder));
    }

    #[test]
    fn test_submission_passes_when_complete() {
        let mut order = DraftOrder::new();
        order.customer.name = "Ayesha Khan".to_string();
        order.add_item(test_item(32.0, 2.2)).unwrap();

        assert!(order.validate_for_submission().is_ok());
    }

    #[test]
    fn test_clear_resets_customer_and_items() {
        let mut order = DraftOrder::new();
        order.customer.name = "Ayesha Khan".to_string();
        order.customer.phone = Some("0300-1234567".to_string());
        order.add_item(test_item(32.0, 2.2)).unwrap();

        order.clear();

        assert!(order.is_empty());
        assert_eq!(order, DraftOrder::new());
    }
}
