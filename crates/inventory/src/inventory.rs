//! The coordinating object that owns the ledger.
//!
//! `Inventory` is the boundary where recoverable [`LedgerError`]s become a
//! `bool` status plus a diagnostic. The `try_*` methods expose the typed
//! result for callers that want it.

use chrono::Utc;
use serde_json::Value as JsonValue;

use stockledger_core::{Aggregate, ItemName, LedgerError, LedgerResult, Quantity};

use crate::ledger::{AddStock, LedgerCommand, RemoveStock, StockLedger};
use crate::log::{LogEntry, OperationLog};
use crate::report;

/// Threshold used by [`Inventory::check_low_items`] callers when none is configured.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    ledger: StockLedger,
}

impl Inventory {
    /// Start with an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Swap in a new ledger, e.g. after a load.
    pub fn replace_ledger(&mut self, ledger: StockLedger) {
        self.ledger = ledger;
    }

    /// Add `qty` of `item`, handing back a fresh log that holds only this call's entry.
    pub fn try_add(&mut self, item: &str, qty: i64) -> LedgerResult<OperationLog> {
        self.add_parsed(ItemName::parse(item), Quantity::try_from(qty))
            .map(OperationLog::single)
    }

    /// Add `qty` of `item`.
    ///
    /// The entry is appended to `log` when one is given; otherwise it stays in
    /// the per-call log built by [`Inventory::try_add`]. Returns `false` and
    /// emits a diagnostic on invalid input.
    pub fn add(&mut self, item: &str, qty: i64, log: Option<&mut OperationLog>) -> bool {
        let result = self.try_add(item, qty);
        Self::settle("add", item, result, log)
    }

    /// Add from untyped input; a non-string item or non-integer quantity is rejected.
    pub fn add_value(
        &mut self,
        item: &JsonValue,
        qty: &JsonValue,
        log: Option<&mut OperationLog>,
    ) -> bool {
        let result = self
            .add_parsed(ItemName::from_value(item), Quantity::from_value(qty))
            .map(OperationLog::single);
        Self::settle("add", &value_label(item), result, log)
    }

    /// Remove `qty` of `item`, handing back a fresh log that holds only this call's entry.
    pub fn try_remove(&mut self, item: &str, qty: i64) -> LedgerResult<OperationLog> {
        self.remove_parsed(item, Quantity::try_from(qty))
            .map(OperationLog::single)
    }

    /// Remove `qty` of `item`, deleting the entry when it reaches zero.
    ///
    /// Fails with "not found" before the quantity is looked at.
    pub fn remove(&mut self, item: &str, qty: i64, log: Option<&mut OperationLog>) -> bool {
        let result = self.try_remove(item, qty);
        Self::settle("remove", item, result, log)
    }

    /// Remove from untyped input. A non-string item can never be held, so it is "not found".
    pub fn remove_value(
        &mut self,
        item: &JsonValue,
        qty: &JsonValue,
        log: Option<&mut OperationLog>,
    ) -> bool {
        let label = value_label(item);
        let result = match item {
            JsonValue::String(name) => self
                .remove_parsed(name, Quantity::from_value(qty))
                .map(OperationLog::single),
            _ => Err(LedgerError::not_found(label.clone())),
        };
        Self::settle("remove", &label, result, log)
    }

    /// Current quantity of `item`, zero when absent.
    pub fn get_qty(&self, item: &str) -> u64 {
        self.ledger.quantity(item).get()
    }

    /// Items held strictly below `threshold`.
    pub fn check_low_items(&self, threshold: u64) -> Vec<ItemName> {
        self.ledger.below(Quantity::new(threshold))
    }

    pub fn report(&self) -> String {
        report::render(&self.ledger)
    }

    fn add_parsed(
        &mut self,
        item: LedgerResult<ItemName>,
        qty: LedgerResult<Quantity>,
    ) -> LedgerResult<LogEntry> {
        let command = LedgerCommand::AddStock(AddStock {
            item: item?,
            qty: qty?,
            occurred_at: Utc::now(),
        });
        self.record(&command)
    }

    fn remove_parsed(&mut self, item: &str, qty: LedgerResult<Quantity>) -> LedgerResult<LogEntry> {
        if !self.ledger.contains(item) {
            return Err(LedgerError::not_found(item));
        }
        let command = LedgerCommand::RemoveStock(RemoveStock {
            item: item.to_string(),
            qty: qty?,
            occurred_at: Utc::now(),
        });
        self.record(&command)
    }

    fn record(&mut self, command: &LedgerCommand) -> LedgerResult<LogEntry> {
        let events = self.ledger.execute(command)?;
        let entry = events
            .first()
            .map(LogEntry::from_event)
            .ok_or_else(|| LedgerError::invalid("command produced no change"))?;
        tracing::debug!(version = self.ledger.version(), "{}", entry.message);
        Ok(entry)
    }

    fn settle(
        op: &str,
        item: &str,
        result: LedgerResult<OperationLog>,
        log: Option<&mut OperationLog>,
    ) -> bool {
        match result {
            Ok(fresh) => {
                if let Some(log) = log {
                    log.extend(fresh);
                }
                true
            }
            Err(err @ LedgerError::NotFound(_)) => {
                tracing::warn!(op, item, error = %err, "item not found");
                false
            }
            Err(err @ LedgerError::InvalidQuantity(_)) => {
                tracing::warn!(op, item, error = %err, "invalid input");
                false
            }
        }
    }
}

/// Diagnostic label for untyped input: strings without JSON quotes.
fn value_label(value: &JsonValue) -> String {
    value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_twice_accumulates() {
        let mut inv = Inventory::new();
        assert!(inv.add("apple", 5, None));
        assert!(inv.add("apple", 3, None));
        assert_eq!(inv.get_qty("apple"), 8);
    }

    #[test]
    fn supplied_log_sees_only_its_own_call() {
        let mut inv = Inventory::new();
        assert!(inv.add("apple", 1, None));
        assert!(inv.add("pear", 2, None));

        let mut log = OperationLog::new();
        assert!(inv.add("plum", 3, Some(&mut log)));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].message, "Added 3 of plum");
    }

    #[test]
    fn each_call_without_a_log_gets_its_own() {
        let mut inv = Inventory::new();
        let first = inv.try_add("apple", 5).unwrap();
        let second = inv.try_add("pear", 3).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first.entries()[0].message, "Added 5 of apple");
        assert_eq!(second.len(), 1);
        assert_eq!(second.entries()[0].message, "Added 3 of pear");

        let removed = inv.try_remove("apple", 2).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed.entries()[0].message, "Removed 2 of apple");
    }

    #[test]
    fn value_labels_drop_json_quotes() {
        assert_eq!(value_label(&json!("apple")), "apple");
        assert_eq!(value_label(&json!(123)), "123");
    }

    #[test]
    fn supplied_log_collects_every_mutation() {
        let mut inv = Inventory::new();
        let mut log = OperationLog::new();
        assert!(inv.add("apple", 10, Some(&mut log)));
        assert!(inv.remove("apple", 3, Some(&mut log)));
        assert!(!inv.add("banana", -2, Some(&mut log)));

        let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["Added 10 of apple", "Removed 3 of apple"]);
    }

    #[test]
    fn get_qty_of_absent_item_is_zero() {
        assert_eq!(Inventory::new().get_qty("nothing"), 0);
    }

    #[test]
    fn remove_missing_item_fails_and_keeps_ledger() {
        let mut inv = Inventory::new();
        inv.add("apple", 4, None);
        let before = inv.ledger().clone();

        assert!(!inv.remove("orange", 1, None));
        assert_eq!(inv.ledger(), &before);
        assert!(inv.try_remove("orange", 1).unwrap_err().is_not_found());
    }

    #[test]
    fn remove_distinguishes_not_found_from_invalid_quantity() {
        let mut inv = Inventory::new();
        inv.add("apple", 4, None);

        let err = inv.try_remove("apple", -1).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidQuantity(_)));
        // Existence is checked first.
        let err = inv.try_remove("kiwi", -1).unwrap_err();
        assert!(matches!(err, LedgerError::NotFound(_)));
        assert_eq!(inv.get_qty("apple"), 4);
    }

    #[test]
    fn wrong_types_are_rejected_without_change() {
        let mut inv = Inventory::new();
        let mut log = OperationLog::new();
        assert!(!inv.add_value(&json!(123), &json!("ten"), Some(&mut log)));
        assert!(inv.ledger().is_empty());
        assert!(log.is_empty());

        assert!(!inv.remove_value(&json!(123), &json!(1), None));
        assert!(inv.add_value(&json!("apple"), &json!(2), None));
        assert!(!inv.remove_value(&json!("apple"), &json!("one"), None));
        assert_eq!(inv.get_qty("apple"), 2);
    }

    #[test]
    fn negative_or_blank_add_is_rejected() {
        let mut inv = Inventory::new();
        assert!(!inv.add("banana", -2, None));
        assert!(!inv.add("", 2, None));
        assert!(inv.ledger().is_empty());
    }

    #[test]
    fn remove_everything_deletes_entry() {
        let mut inv = Inventory::new();
        inv.add("apple", 3, None);
        assert!(inv.remove("apple", 5, None));
        assert!(!inv.ledger().contains("apple"));
        assert_eq!(inv.get_qty("apple"), 0);
    }

    #[test]
    fn low_items_below_threshold() {
        let mut inv = Inventory::new();
        inv.add("apple", 7, None);
        inv.add("bolt", 2, None);
        inv.add("cog", 5, None);
        let low: Vec<_> = inv
            .check_low_items(DEFAULT_LOW_STOCK_THRESHOLD)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(low, ["bolt"]);
    }
}
