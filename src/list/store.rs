use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CUSTOM_CATEGORY};

use super::item::{ItemUpdate, LineItem};

/// Result of an add attempt. Duplicates never mutate state; the existing
/// item's id is reported so presentation can point at the matching row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate { existing_id: String },
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Outcome of a manual free-text add: the category the text resolved to
/// (a catalog category or `Custom`), the stored display name, and whether
/// the item was actually inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualAdd {
    pub category: String,
    pub name: String,
    pub outcome: AddOutcome,
}

/// The owned, mutable list state: category name mapped to an ordered
/// sequence of line items. Every mutation goes through this type.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct GroceryList {
    categories: BTreeMap<String, Vec<LineItem>>,
}

impl GroceryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item` under `category` unless the category already holds an
    /// item with the same name under case-insensitive comparison.
    pub fn add_item(&mut self, category: &str, item: LineItem) -> AddOutcome {
        let items = self.categories.entry(category.to_string()).or_default();
        let folded = item.name.to_lowercase();
        if let Some(existing) = items
            .iter()
            .find(|existing| existing.name.to_lowercase() == folded)
        {
            tracing::debug!(category, name = %item.name, "duplicate add rejected");
            return AddOutcome::Duplicate {
                existing_id: existing.id.clone(),
            };
        }
        tracing::debug!(category, id = %item.id, name = %item.name, "item added");
        items.push(item);
        AddOutcome::Added
    }

    /// Adds a free-text entry: the trimmed text is title-cased and resolved
    /// against the catalog; unmatched text becomes a `Custom` item with a
    /// synthesized id. Returns `None` for blank input.
    pub fn add_manual(&mut self, raw: &str) -> Option<ManualAdd> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let (category, item) = match catalog::resolve_name(trimmed) {
            Some((category, code, canonical)) => {
                (category.to_string(), LineItem::new(code, canonical))
            }
            None => (
                CUSTOM_CATEGORY.to_string(),
                LineItem::custom(title_case(trimmed)),
            ),
        };
        let name = item.name.clone();
        let outcome = self.add_item(&category, item);
        Some(ManualAdd {
            category,
            name,
            outcome,
        })
    }

    /// Removes the item with the given id, pruning the category when it
    /// empties. Returns false when nothing matched.
    pub fn remove_item(&mut self, category: &str, id: &str) -> bool {
        let Some(items) = self.categories.get_mut(category) else {
            return false;
        };
        let Some(index) = items.iter().position(|item| item.id == id) else {
            return false;
        };
        let removed = items.remove(index);
        tracing::debug!(category, id = %removed.id, "item removed");
        if items.is_empty() {
            self.categories.remove(category);
        }
        true
    }

    /// Applies one field mutation to the matching item. A missing item is a
    /// silent no-op; state is never corrupted by a stale reference.
    pub fn update_item(&mut self, category: &str, id: &str, update: ItemUpdate) -> bool {
        let Some(item) = self
            .categories
            .get_mut(category)
            .and_then(|items| items.iter_mut().find(|item| item.id == id))
        else {
            return false;
        };
        match update {
            ItemUpdate::SetChecked(checked) => item.checked = checked,
            ItemUpdate::SetNote(note) => item.note = note,
            ItemUpdate::SetQty(qty) => item.qty = qty.max(1),
            ItemUpdate::SetPrice(price) => item.price = price,
        }
        true
    }

    /// Resets the whole list to empty.
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Sum of extended prices; items with empty or unparseable prices
    /// contribute zero.
    pub fn total_cost(&self) -> f64 {
        self.categories
            .values()
            .flatten()
            .filter_map(LineItem::extended_price)
            .sum()
    }

    /// Categories present in state, in catalog declaration order, with
    /// `Custom` forced last. Every consumer (render, export, share) iterates
    /// in this order.
    pub fn ordered_categories(&self) -> Vec<&str> {
        let mut ordered: Vec<&str> = catalog::categories_in_order()
            .filter(|category| self.has_items(category))
            .collect();
        if self.has_items(CUSTOM_CATEGORY) {
            ordered.push(CUSTOM_CATEGORY);
        }
        ordered
    }

    /// Items under a category, in insertion order.
    pub fn items_in(&self, category: &str) -> Option<&[LineItem]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Flat `(category, item)` iteration in the canonical output order.
    pub fn ordered_items(&self) -> impl Iterator<Item = (&str, &LineItem)> {
        self.ordered_categories()
            .into_iter()
            .filter_map(move |category| {
                self.categories
                    .get(category)
                    .map(move |items| items.iter().map(move |item| (category, item)))
            })
            .flatten()
    }

    pub fn item_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    fn has_items(&self, category: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|items| !items.is_empty())
    }
}

/// First character uppercased, the rest lowercased, matching how manual
/// entries are normalized before display.
pub(crate) fn title_case(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(id: &str, name: &str, qty: u32, price: &str) -> LineItem {
        let mut item = LineItem::new(id, name);
        item.qty = qty;
        item.price = price.into();
        item
    }

    #[test]
    fn duplicate_names_are_rejected_case_insensitively() {
        let mut list = GroceryList::new();
        assert!(list
            .add_item("Produce", LineItem::new("pr-a", "Apples"))
            .is_added());
        let outcome = list.add_item("Produce", LineItem::new("x", "APPLES"));
        assert_eq!(
            outcome,
            AddOutcome::Duplicate {
                existing_id: "pr-a".into()
            }
        );
        assert_eq!(list.items_in("Produce").unwrap().len(), 1);
    }

    #[test]
    fn duplicate_check_folds_non_ascii_names() {
        let mut list = GroceryList::new();
        assert!(list
            .add_item("Custom", LineItem::custom("äpfel"))
            .is_added());
        assert!(!list
            .add_item("Custom", LineItem::custom("Äpfel"))
            .is_added());
        assert_eq!(list.items_in("Custom").unwrap().len(), 1);
    }

    #[test]
    fn manual_add_resolves_against_the_catalog() {
        let mut list = GroceryList::new();
        let added = list.add_manual("apples").unwrap();
        assert_eq!(added.category, "Produce");
        assert_eq!(added.name, "Apples");
        assert!(added.outcome.is_added());
        let item = &list.items_in("Produce").unwrap()[0];
        assert_eq!(item.id, "pr-a");
        assert_eq!(item.qty, 1);

        let again = list.add_manual("Apples").unwrap();
        assert!(!again.outcome.is_added());
        assert_eq!(list.items_in("Produce").unwrap().len(), 1);
    }

    #[test]
    fn manual_add_falls_back_to_custom_with_title_case() {
        let mut list = GroceryList::new();
        let added = list.add_manual("  dRAGONFRUIT  ").unwrap();
        assert_eq!(added.category, "Custom");
        assert_eq!(added.name, "Dragonfruit");
        let item = &list.items_in("Custom").unwrap()[0];
        assert!(item.is_custom());
    }

    #[test]
    fn blank_manual_input_is_ignored() {
        let mut list = GroceryList::new();
        assert!(list.add_manual("   ").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn remove_prunes_emptied_categories() {
        let mut list = GroceryList::new();
        list.add_item("Produce", LineItem::new("pr-a", "Apples"));
        assert!(list.remove_item("Produce", "pr-a"));
        assert!(list.items_in("Produce").is_none());
        assert!(!list.remove_item("Produce", "pr-a"));
    }

    #[test]
    fn update_missing_item_is_a_no_op() {
        let mut list = GroceryList::new();
        list.add_item("Produce", LineItem::new("pr-a", "Apples"));
        assert!(!list.update_item("Produce", "pr-z", ItemUpdate::SetChecked(true)));
        assert!(!list.update_item("Frozen", "pr-a", ItemUpdate::SetChecked(true)));
        assert!(!list.items_in("Produce").unwrap()[0].checked);
    }

    #[test]
    fn updates_apply_and_qty_stays_positive() {
        let mut list = GroceryList::new();
        list.add_item("Produce", LineItem::new("pr-a", "Apples"));
        list.update_item("Produce", "pr-a", ItemUpdate::SetQty(0));
        list.update_item("Produce", "pr-a", ItemUpdate::SetNote("Granny Smith".into()));
        list.update_item("Produce", "pr-a", ItemUpdate::SetPrice("2.20".into()));
        list.update_item("Produce", "pr-a", ItemUpdate::SetChecked(true));
        let item = &list.items_in("Produce").unwrap()[0];
        assert_eq!(item.qty, 1);
        assert_eq!(item.note, "Granny Smith");
        assert_eq!(item.price, "2.20");
        assert!(item.checked);
    }

    #[test]
    fn total_multiplies_price_by_qty_and_skips_unparsed() {
        let mut list = GroceryList::new();
        list.add_item("Produce", priced("pr-a", "Apples", 2, "3.50"));
        list.add_item("Produce", priced("pr-b", "Bananas", 3, ""));
        list.add_item("Snacks", priced("sn-a", "Chips", 1, "n/a"));
        assert!((list.total_cost() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn total_is_invariant_under_insertion_order() {
        let mut forward = GroceryList::new();
        forward.add_item("Produce", priced("pr-a", "Apples", 2, "1.25"));
        forward.add_item("Frozen", priced("fr-b", "Ice Cream", 1, "4.00"));

        let mut reverse = GroceryList::new();
        reverse.add_item("Frozen", priced("fr-b", "Ice Cream", 1, "4.00"));
        reverse.add_item("Produce", priced("pr-a", "Apples", 2, "1.25"));

        assert_eq!(forward.total_cost(), reverse.total_cost());
    }

    #[test]
    fn ordered_categories_follow_catalog_with_custom_last() {
        let mut list = GroceryList::new();
        list.add_manual("weird sauce");
        list.add_item("Frozen", LineItem::new("fr-a", "Frozen Pizza"));
        list.add_item("Produce", LineItem::new("pr-a", "Apples"));
        assert_eq!(
            list.ordered_categories(),
            vec!["Produce", "Frozen", "Custom"]
        );
    }

    #[test]
    fn ordered_items_walk_categories_in_canonical_order() {
        let mut list = GroceryList::new();
        list.add_item("Snacks", LineItem::new("sn-a", "Chips"));
        list.add_item("Produce", LineItem::new("pr-b", "Bananas"));
        list.add_item("Produce", LineItem::new("pr-a", "Apples"));
        let names: Vec<_> = list
            .ordered_items()
            .map(|(category, item)| (category, item.name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Produce", "Bananas"),
                ("Produce", "Apples"),
                ("Snacks", "Chips")
            ]
        );
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = GroceryList::new();
        list.add_manual("apples");
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.item_count(), 0);
    }

    #[test]
    fn title_case_normalizes_mixed_input() {
        assert_eq!(title_case("dRAGON fruit"), "Dragon fruit");
        assert_eq!(title_case("a"), "A");
        assert_eq!(title_case(""), "");
    }
}
