//! Mock data source for the store overview dashboard.
//!
//! Keeps the `async fn ... -> Result<Vec<T>, String>` shape of a real
//! backend call so the page code does not change when one is wired in.
//! The datasets are deliberately out of calendar order so the dashboard
//! exercises first-occurrence month bucketing.

use contracts::domain::a001_order::{Order, OrderId, OrderStatus};
use contracts::domain::a002_inventory_item::{InventoryItem, InventoryItemId};
use contracts::domain::a003_return_item::{ReturnItem, ReturnItemId, ReturnStatus};
use gloo_timers::future::TimeoutFuture;

/// Simulated fetch latency (ms)
const MOCK_LATENCY_MS: u32 = 250;

/// Fetch the order list
pub async fn fetch_orders() -> Result<Vec<Order>, String> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;

    Ok(vec![
        order("ORD-1001", "Ava Thompson", OrderStatus::Delivered, "2025-03-03", 182.45, Some(22.0)),
        order("ORD-1002", "Liam Carter", OrderStatus::Shipped, "2025-01-12", 74.99, Some(31.5)),
        order("ORD-1003", "Sofia Nguyen", OrderStatus::Pending, "2025-03-18", 239.90, None),
        order("ORD-1004", "Noah Kim", OrderStatus::Delivered, "2025-02-07", 58.00, Some(18.0)),
        order("ORD-1005", "Mia Alvarez", OrderStatus::Cancelled, "2025-02-21", 120.75, None),
        order("ORD-1006", "Ethan Brooks", OrderStatus::Shipped, "2025-03-25", 310.20, Some(26.5)),
        order("ORD-1007", "Olivia Hayes", OrderStatus::Pending, "2025-04-02", 45.60, None),
        order("ORD-1008", "Lucas Moreau", OrderStatus::Delivered, "2025-01-29", 89.99, Some(40.0)),
    ])
}

/// Fetch the inventory list
pub async fn fetch_inventory() -> Result<Vec<InventoryItem>, String> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;

    Ok(vec![
        item("SKU-2001", "Leather Wallet", "Accessories", 42, 10, 39.95),
        item("SKU-2002", "Canvas Tote", "Bags", 7, 12, 24.50),
        item("SKU-2003", "Ceramic Mug Set", "Kitchen", 18, 8, 32.00),
        item("SKU-2004", "Desk Lamp", "Home Office", 3, 5, 54.90),
        item("SKU-2005", "Wool Scarf", "Apparel", 25, 10, 29.99),
        item("SKU-2006", "Phone Stand", "Electronics", 61, 15, 14.25),
    ])
}

/// Fetch the returns list
pub async fn fetch_returns() -> Result<Vec<ReturnItem>, String> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;

    Ok(vec![
        ret("ORD-1001", "Ceramic Mug Set", "Damaged in transit", ReturnStatus::Refunded, "2025-03-08", Some(2.4)),
        ret("ORD-1002", "Wool Scarf", "Wrong size", ReturnStatus::Received, "2025-01-19", Some(1.8)),
        ret("ORD-1004", "Desk Lamp", "Not as described", ReturnStatus::Refunded, "2025-02-12", None),
        ret("ORD-1006", "Canvas Tote", "Changed mind", ReturnStatus::Requested, "2025-03-27", Some(2.9)),
        ret("ORD-1008", "Leather Wallet", "Defective clasp", ReturnStatus::Refunded, "2025-02-02", Some(0.0)),
    ])
}

fn order(
    number: &str,
    customer: &str,
    status: OrderStatus,
    date: &str,
    total: f64,
    fulfillment_hours: Option<f64>,
) -> Order {
    Order {
        id: OrderId::new_v4(),
        order_number: number.to_string(),
        customer: customer.to_string(),
        status,
        date: date.to_string(),
        total,
        fulfillment_hours,
    }
}

fn item(
    sku: &str,
    name: &str,
    category: &str,
    stock: i32,
    reorder_level: i32,
    price: f64,
) -> InventoryItem {
    InventoryItem {
        id: InventoryItemId::new_v4(),
        sku: sku.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        stock,
        reorder_level,
        price,
    }
}

fn ret(
    order_number: &str,
    product_name: &str,
    reason: &str,
    status: ReturnStatus,
    date: &str,
    rate: Option<f64>,
) -> ReturnItem {
    ReturnItem {
        id: ReturnItemId::new_v4(),
        order_number: order_number.to_string(),
        product_name: product_name.to_string(),
        reason: reason.to_string(),
        status,
        date: date.to_string(),
        rate,
    }
}
