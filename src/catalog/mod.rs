//! Static grocery catalog: categories and their coded items, fixed at
//! build time. The store and codec resolve against this table; it is never
//! mutated at runtime.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Sentinel category for free-text items that resolve to no catalog entry.
pub const CUSTOM_CATEGORY: &str = "Custom";

type CategoryItems = (&'static str, &'static [(&'static str, &'static str)]);

const CATALOG: &[CategoryItems] = &[
    (
        "Produce",
        &[
            ("pr-a", "Apples"),
            ("pr-b", "Bananas"),
            ("pr-c", "Carrots"),
            ("pr-d", "Broccoli"),
            ("pr-e", "Spinach"),
            ("pr-f", "Onions"),
            ("pr-g", "Potatoes"),
            ("pr-h", "Tomatoes"),
            ("pr-i", "Lettuce"),
            ("pr-j", "Cucumbers"),
            ("pr-k", "Bell Peppers"),
            ("pr-l", "Avocado"),
            ("pr-m", "Garlic"),
        ],
    ),
    (
        "Dairy & Eggs",
        &[
            ("da-a", "Milk"),
            ("da-b", "Eggs"),
            ("da-c", "Cheddar Cheese"),
            ("da-d", "Mozzarella Cheese"),
            ("da-e", "Yogurt"),
            ("da-f", "Butter"),
            ("da-g", "Sour Cream"),
            ("da-h", "Cream Cheese"),
        ],
    ),
    (
        "Meat & Seafood",
        &[
            ("ms-a", "Chicken Breast"),
            ("ms-b", "Ground Beef"),
            ("ms-c", "Bacon"),
            ("ms-d", "Sausage"),
            ("ms-e", "Salmon"),
            ("ms-f", "Shrimp"),
            ("ms-g", "Steak"),
            ("ms-h", "Pork Chops"),
        ],
    ),
    (
        "Pantry & Dry Goods",
        &[
            ("pa-a", "Bread"),
            ("pa-b", "Pasta"),
            ("pa-c", "Rice"),
            ("pa-d", "Cereal"),
            ("pa-e", "Flour"),
            ("pa-f", "Sugar"),
            ("pa-g", "Olive Oil"),
            ("pa-h", "Canned Tomatoes"),
            ("pa-i", "Canned Beans"),
            ("pa-j", "Peanut Butter"),
        ],
    ),
    (
        "Snacks",
        &[
            ("sn-a", "Chips"),
            ("sn-b", "Crackers"),
            ("sn-c", "Pretzels"),
            ("sn-d", "Popcorn"),
            ("sn-e", "Granola Bars"),
            ("sn-f", "Nuts"),
            ("sn-g", "Cookies"),
        ],
    ),
    (
        "Frozen",
        &[
            ("fr-a", "Frozen Pizza"),
            ("fr-b", "Ice Cream"),
            ("fr-c", "Frozen Vegetables"),
            ("fr-d", "Frozen Fries"),
            ("fr-e", "Waffles"),
        ],
    ),
];

static CODE_INDEX: Lazy<HashMap<&'static str, (&'static str, &'static str)>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (category, items) in CATALOG {
        for (code, name) in *items {
            index.insert(*code, (*category, *name));
        }
    }
    index
});

static NAME_INDEX: Lazy<HashMap<String, (&'static str, &'static str, &'static str)>> =
    Lazy::new(|| {
        let mut index = HashMap::new();
        for (category, items) in CATALOG {
            for (code, name) in *items {
                index.insert(name.to_lowercase(), (*category, *code, *name));
            }
        }
        index
    });

/// Looks up a catalog item by code, returning its category and display name.
pub fn resolve(id: &str) -> Option<(&'static str, &'static str)> {
    CODE_INDEX.get(id).copied()
}

/// Case-insensitive lookup by display name, returning
/// `(category, code, canonical name)`.
pub fn resolve_name(name: &str) -> Option<(&'static str, &'static str, &'static str)> {
    NAME_INDEX.get(&name.trim().to_lowercase()).copied()
}

/// Category names in catalog declaration order. `Custom` is not included;
/// it is appended by consumers only when present in state.
pub fn categories_in_order() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(category, _)| *category)
}

/// The `(code, name)` pairs declared under a category.
pub fn items_in(category: &str) -> Option<&'static [(&'static str, &'static str)]> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, items)| *items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_code() {
        assert_eq!(resolve("pr-a"), Some(("Produce", "Apples")));
        assert_eq!(resolve("fr-e"), Some(("Frozen", "Waffles")));
    }

    #[test]
    fn resolve_unknown_code_is_none() {
        assert_eq!(resolve("zz-z"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn resolve_name_is_case_insensitive() {
        assert_eq!(resolve_name("apples"), Some(("Produce", "pr-a", "Apples")));
        assert_eq!(
            resolve_name("  GROUND BEEF "),
            Some(("Meat & Seafood", "ms-b", "Ground Beef"))
        );
        assert_eq!(resolve_name("dragonfruit"), None);
    }

    #[test]
    fn categories_keep_declaration_order() {
        let order: Vec<_> = categories_in_order().collect();
        assert_eq!(
            order,
            vec![
                "Produce",
                "Dairy & Eggs",
                "Meat & Seafood",
                "Pantry & Dry Goods",
                "Snacks",
                "Frozen"
            ]
        );
    }

    #[test]
    fn every_declared_code_round_trips_through_the_index() {
        for category in categories_in_order() {
            for (code, name) in items_in(category).unwrap() {
                assert_eq!(resolve(code), Some((category, *name)));
            }
        }
    }
}
