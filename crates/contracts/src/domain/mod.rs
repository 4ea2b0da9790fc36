pub mod a001_order;
pub mod a002_inventory_item;
pub mod a003_return_item;
