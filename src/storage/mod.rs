pub mod json_backend;

use crate::{errors::Result, list::GroceryList};

/// File stem of the saved list. Kept stable so existing saved lists keep
/// loading across releases.
pub const STORAGE_KEY: &str = "smartGroceryList";

/// Abstraction over persistence backends for the list state.
///
/// `load` is deliberately infallible: absent or corrupt saved state always
/// degrades to an empty list rather than an error.
pub trait StorageBackend {
    fn save(&self, list: &GroceryList) -> Result<()>;
    fn load(&self) -> GroceryList;
}

pub use json_backend::JsonStorage;
