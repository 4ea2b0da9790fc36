pub mod aggregate;

pub use aggregate::{InventoryItem, InventoryItemId};
