//! Plain-text stock report.

use crate::ledger::StockLedger;

const RULE_WIDTH: usize = 30;

/// Render the ledger as an "Items Report" block, one `item -> qty` line per entry.
pub fn render(ledger: &StockLedger) -> String {
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec!["Items Report".to_string(), rule.clone()];
    if ledger.is_empty() {
        lines.push("No items in inventory".to_string());
    } else {
        lines.extend(ledger.entries().map(|(item, qty)| format!("{item} -> {qty}")));
    }
    lines.push(rule);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockledger_core::{ItemName, Quantity};

    #[test]
    fn empty_ledger_report() {
        let report = render(&StockLedger::new());
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(lines[0], "Items Report");
        assert_eq!(lines[1].len(), 30);
        assert_eq!(lines[2], "No items in inventory");
        assert_eq!(lines.len(), 4);
        assert!(report.ends_with(&format!("{}\n", "-".repeat(30))));
    }

    #[test]
    fn lists_items_in_name_order() {
        let ledger = StockLedger::from_entries([
            (ItemName::parse("pear").unwrap(), Quantity::new(2)),
            (ItemName::parse("apple").unwrap(), Quantity::new(7)),
        ]);
        let report = render(&ledger);
        let lines: Vec<_> = report.lines().collect();
        assert_eq!(&lines[2..4], &["apple -> 7", "pear -> 2"]);
    }
}
