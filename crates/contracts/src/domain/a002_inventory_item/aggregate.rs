use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed id for an inventory item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryItemId(pub Uuid);

impl InventoryItemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
    pub fn value(&self) -> Uuid {
        self.0
    }
}

/// Stock-keeping record. Read-only input to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,

    /// Stock-keeping unit code
    pub sku: String,

    /// Product display name
    pub name: String,

    /// Merchandising category
    pub category: String,

    /// Units on hand
    pub stock: i32,

    /// Threshold at or below which the item counts as low stock
    #[serde(rename = "reorderLevel")]
    pub reorder_level: i32,

    /// Unit price in store currency
    pub price: f64,
}

impl InventoryItem {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.reorder_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: i32, reorder_level: i32) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new_v4(),
            sku: "SKU-1".into(),
            name: "Canvas Tote".into(),
            category: "Bags".into(),
            stock,
            reorder_level,
            price: 24.0,
        }
    }

    #[test]
    fn low_stock_at_or_below_reorder_level() {
        assert!(item(3, 5).is_low_stock());
        assert!(item(5, 5).is_low_stock());
        assert!(!item(6, 5).is_low_stock());
    }
}
