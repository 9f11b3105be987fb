//! Read-only export projection consumed by PDF/clipboard-style exporters:
//! an ordered flat row sequence plus a formatted grand total.

use chrono::Local;

use crate::list::GroceryList;

pub const EXPORT_HEADER: [&str; 6] = ["Done", "Item", "Type", "Qty", "Price", "Category"];

/// One exportable line: completion flag, display fields, and the extended
/// price already formatted (empty when the unit price does not parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub done: bool,
    pub name: String,
    pub note: String,
    pub qty: u32,
    pub price: String,
    pub category: String,
}

impl ExportRow {
    pub fn cells(&self) -> [String; 6] {
        [
            if self.done { "[X]" } else { "[ ]" }.to_string(),
            self.name.clone(),
            self.note.clone(),
            self.qty.to_string(),
            self.price.clone(),
            self.category.clone(),
        ]
    }
}

/// Snapshot of the list prepared for export, in canonical category order.
#[derive(Debug, Clone)]
pub struct ExportView {
    pub rows: Vec<ExportRow>,
    pub total: String,
    pub generated_on: String,
}

pub fn export_view(list: &GroceryList, currency_symbol: &str) -> ExportView {
    let rows = list
        .ordered_items()
        .map(|(category, item)| ExportRow {
            done: item.checked,
            name: item.name.clone(),
            note: item.note.clone(),
            qty: item.qty,
            price: item
                .extended_price()
                .map(|value| format!("{}{:.2}", currency_symbol, value))
                .unwrap_or_default(),
            category: category.to_string(),
        })
        .collect();
    ExportView {
        rows,
        total: format!("{}{:.2}", currency_symbol, list.total_cost()),
        generated_on: Local::now().format("%A, %B %e, %Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{ItemUpdate, LineItem};

    #[test]
    fn rows_follow_canonical_order_and_format_prices() {
        let mut list = GroceryList::new();
        list.add_manual("space jam");
        list.add_item("Produce", LineItem::new("pr-a", "Apples"));
        list.update_item("Produce", "pr-a", ItemUpdate::SetQty(2));
        list.update_item("Produce", "pr-a", ItemUpdate::SetPrice("3.50".into()));
        list.update_item("Produce", "pr-a", ItemUpdate::SetChecked(true));

        let view = export_view(&list, "$");
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.rows[0].category, "Produce");
        assert_eq!(view.rows[0].price, "$7.00");
        assert!(view.rows[0].done);
        assert_eq!(view.rows[1].category, "Custom");
        assert_eq!(view.rows[1].price, "");
        assert_eq!(view.total, "$7.00");
    }

    #[test]
    fn cells_render_done_markers() {
        let row = ExportRow {
            done: false,
            name: "Apples".into(),
            note: String::new(),
            qty: 1,
            price: String::new(),
            category: "Produce".into(),
        };
        assert_eq!(row.cells()[0], "[ ]");
        assert_eq!(row.cells()[3], "1");
    }
}
