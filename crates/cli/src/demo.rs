//! Demonstration run of the inventory: a few valid and rejected operations,
//! then save, reload and report.

use std::io::Write;

use anyhow::Context;
use serde_json::json;

use stockledger_infra::{JsonFileStore, LogFile, load_inventory, save_inventory};
use stockledger_inventory::{Inventory, OperationLog};

use crate::config::Config;

/// Run the demonstration, writing user-facing output to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<Inventory> {
    let mut inventory = Inventory::new();
    let mut log = OperationLog::new();

    inventory.add("apple", 10, Some(&mut log));
    // Rejected: negative quantity.
    inventory.add("banana", -2, Some(&mut log));
    // Rejected: wrong types.
    inventory.add_value(&json!(123), &json!("ten"), Some(&mut log));

    inventory.remove("apple", 3, Some(&mut log));
    // Rejected: not held.
    inventory.remove("orange", 1, Some(&mut log));

    let low: Vec<String> = inventory
        .check_low_items(config.low_threshold)
        .into_iter()
        .map(String::from)
        .collect();
    writeln!(out, "Apple stock: {}", inventory.get_qty("apple"))?;
    writeln!(out, "Low items: [{}]", low.join(", "))?;

    let store = JsonFileStore::new(&config.data_file);
    save_inventory(&inventory, &store);
    load_inventory(&mut inventory, &store);

    if let Some(path) = &config.log_file {
        let log_file = LogFile::new(path);
        log_file
            .append(log.iter())
            .with_context(|| format!("failed to append to log file {}", path.display()))?;
    }

    write!(out, "{}", inventory.report())?;
    writeln!(out, "System demonstration completed successfully")?;
    Ok(inventory)
}
