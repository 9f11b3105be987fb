use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix marking synthesized identifiers of free-text items. The codec
/// relies on it to tell custom items apart from catalog codes.
pub const CUSTOM_ID_PREFIX: &str = "cu-";

/// A single entry on the grocery list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
    /// Free-text annotation (brand, note). Serialized as `type` to keep the
    /// persisted shape compatible with existing saved lists.
    #[serde(default, rename = "type")]
    pub note: String,
    #[serde(default = "default_qty")]
    pub qty: u32,
    /// Decimal unit price as entered, empty when unset. Non-parseable values
    /// are preserved verbatim and contribute zero to totals.
    #[serde(default)]
    pub price: String,
}

fn default_qty() -> u32 {
    1
}

impl LineItem {
    /// A fresh unchecked item with quantity 1 and no annotations.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            checked: false,
            note: String::new(),
            qty: 1,
            price: String::new(),
        }
    }

    /// A custom item with a collision-free synthesized id.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(format!("{}{}", CUSTOM_ID_PREFIX, Uuid::new_v4()), name)
    }

    pub fn is_custom(&self) -> bool {
        self.id.starts_with(CUSTOM_ID_PREFIX)
    }

    /// Unit price as a number, or `None` when empty or non-parseable.
    pub fn price_value(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
    }

    /// Extended price (unit price times quantity), when the price parses.
    pub fn extended_price(&self) -> Option<f64> {
        self.price_value().map(|value| value * f64::from(self.qty))
    }

    /// Coerces raw quantity input; anything that does not parse to a
    /// positive integer becomes 1.
    pub fn coerce_qty(raw: &str) -> u32 {
        raw.trim().parse::<u32>().unwrap_or(1).max(1)
    }
}

/// A single field mutation dispatched through the store's update entry
/// point, keeping validation in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemUpdate {
    SetChecked(bool),
    SetNote(String),
    SetQty(u32),
    SetPrice(String),
}

impl ItemUpdate {
    /// Builds a quantity update from raw user input with the standard
    /// fallback-to-1 coercion.
    pub fn qty_from_input(raw: &str) -> Self {
        ItemUpdate::SetQty(LineItem::coerce_qty(raw))
    }
}
