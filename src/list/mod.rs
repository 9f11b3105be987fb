pub mod item;
pub mod store;

pub use item::{ItemUpdate, LineItem, CUSTOM_ID_PREFIX};
pub use store::{AddOutcome, GroceryList, ManualAdd};
