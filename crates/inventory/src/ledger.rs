use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use stockledger_core::{Aggregate, ItemName, LedgerError, Quantity};

/// Aggregate: the stock ledger (item name -> quantity).
///
/// Invariant: no entry is ever held at zero. Removing down to (or past) zero
/// deletes the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    items: BTreeMap<ItemName, Quantity>,
    version: u64,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from persisted entries. Zero quantities are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = (ItemName, Quantity)>) -> Self {
        let items = entries.into_iter().filter(|(_, qty)| !qty.is_zero()).collect();
        Self { items, version: 0 }
    }

    /// Current quantity, or zero when the item is not held.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(Quantity::ZERO)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in item-name order.
    pub fn entries(&self) -> impl Iterator<Item = (&ItemName, Quantity)> {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn as_map(&self) -> &BTreeMap<ItemName, Quantity> {
        &self.items
    }

    /// Items held below `threshold`, in item-name order.
    pub fn below(&self, threshold: Quantity) -> Vec<ItemName> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Command: AddStock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStock {
    pub item: ItemName,
    pub qty: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveStock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveStock {
    pub item: String,
    pub qty: Quantity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCommand {
    AddStock(AddStock),
    RemoveStock(RemoveStock),
}

/// Event: StockAdded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdded {
    pub item: ItemName,
    pub qty: Quantity,
    pub occurred_at: DateTime<Utc>,
}

/// Event: StockRemoved. The entry is deleted when this takes it to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRemoved {
    pub item: ItemName,
    pub qty: Quantity,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerEvent {
    StockAdded(StockAdded),
    StockRemoved(StockRemoved),
}

impl LedgerEvent {
    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LedgerEvent::StockAdded(e) => e.occurred_at,
            LedgerEvent::StockRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for StockLedger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = LedgerError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::StockAdded(e) => {
                let current = self.quantity(e.item.as_str()).get();
                let next = current.saturating_add(e.qty.get());
                if next > 0 {
                    self.items.insert(e.item.clone(), Quantity::new(next));
                }
            }
            LedgerEvent::StockRemoved(e) => {
                let current = self.quantity(e.item.as_str()).get();
                let next = current.saturating_sub(e.qty.get());
                if next == 0 {
                    self.items.remove(e.item.as_str());
                } else {
                    self.items.insert(e.item.clone(), Quantity::new(next));
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            LedgerCommand::AddStock(cmd) => self.handle_add(cmd),
            LedgerCommand::RemoveStock(cmd) => self.handle_remove(cmd),
        }
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl StockLedger {
    fn handle_add(&self, cmd: &AddStock) -> Result<Vec<LedgerEvent>, LedgerError> {
        self.quantity(cmd.item.as_str())
            .get()
            .checked_add(cmd.qty.get())
            .ok_or_else(|| LedgerError::invalid("quantity overflow"))?;

        Ok(vec![LedgerEvent::StockAdded(StockAdded {
            item: cmd.item.clone(),
            qty: cmd.qty,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveStock) -> Result<Vec<LedgerEvent>, LedgerError> {
        let Some((item, _)) = self.items.get_key_value(cmd.item.as_str()) else {
            return Err(LedgerError::not_found(cmd.item.clone()));
        };

        Ok(vec![LedgerEvent::StockRemoved(StockRemoved {
            item: item.clone(),
            qty: cmd.qty,
            occurred_at: cmd.occurred_at,
        })])
    }
}
