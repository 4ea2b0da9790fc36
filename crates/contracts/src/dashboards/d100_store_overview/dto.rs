use crate::domain::a001_order::{Order, OrderStatus};
use crate::domain::a002_inventory_item::InventoryItem;
use crate::domain::a003_return_item::{ReturnItem, ReturnStatus};
use crate::metrics::{average_hours, percentage};
use serde::{Deserialize, Serialize};

/// Headline metrics for the store overview dashboard.
/// Derived from the three record collections on every build; not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreOverview {
    #[serde(rename = "totalOrders")]
    pub total_orders: usize,

    /// Share of orders still pending, percent with one decimal
    #[serde(rename = "pendingPercent")]
    pub pending_percent: f64,

    /// Mean checkout-to-shipment time over shipped orders, hours
    #[serde(rename = "avgFulfillmentHours")]
    pub avg_fulfillment_hours: f64,

    /// Share of inventory items at or below their reorder level, percent
    #[serde(rename = "lowStockPercent")]
    pub low_stock_percent: f64,

    #[serde(rename = "totalReturns")]
    pub total_returns: usize,

    /// Share of returns already refunded, percent with one decimal
    #[serde(rename = "refundPercent")]
    pub refund_percent: f64,
}

impl StoreOverview {
    /// Compute the summary from the loaded collections.
    pub fn build(orders: &[Order], inventory: &[InventoryItem], returns: &[ReturnItem]) -> Self {
        let pending = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count();

        let fulfillment: Vec<f64> = orders.iter().filter_map(|o| o.fulfillment_hours).collect();

        let low_stock = inventory.iter().filter(|i| i.is_low_stock()).count();

        let refunded = returns
            .iter()
            .filter(|r| r.status == ReturnStatus::Refunded)
            .count();

        Self {
            total_orders: orders.len(),
            pending_percent: percentage(pending as f64, orders.len() as f64),
            avg_fulfillment_hours: average_hours(&fulfillment),
            low_stock_percent: percentage(low_stock as f64, inventory.len() as f64),
            total_returns: returns.len(),
            refund_percent: percentage(refunded as f64, returns.len() as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_order::OrderId;
    use crate::domain::a002_inventory_item::InventoryItemId;
    use crate::domain::a003_return_item::ReturnItemId;

    fn order(status: OrderStatus, fulfillment_hours: Option<f64>) -> Order {
        Order {
            id: OrderId::new_v4(),
            order_number: "ORD-1".into(),
            customer: "Ada".into(),
            status,
            date: "2025-05-01".into(),
            total: 10.0,
            fulfillment_hours,
        }
    }

    fn item(stock: i32, reorder_level: i32) -> InventoryItem {
        InventoryItem {
            id: InventoryItemId::new_v4(),
            sku: "SKU".into(),
            name: "Mug".into(),
            category: "Kitchen".into(),
            stock,
            reorder_level,
            price: 8.0,
        }
    }

    fn ret(status: ReturnStatus) -> ReturnItem {
        ReturnItem {
            id: ReturnItemId::new_v4(),
            order_number: "ORD-1".into(),
            product_name: "Mug".into(),
            reason: "Damaged".into(),
            status,
            date: "2025-05-02".into(),
            rate: None,
        }
    }

    #[test]
    fn empty_inputs_produce_all_zero_summary() {
        let summary = StoreOverview::build(&[], &[], &[]);
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.pending_percent, 0.0);
        assert_eq!(summary.avg_fulfillment_hours, 0.0);
        assert_eq!(summary.low_stock_percent, 0.0);
        assert_eq!(summary.total_returns, 0);
        assert_eq!(summary.refund_percent, 0.0);
    }

    #[test]
    fn derives_expected_metrics() {
        let orders = [
            order(OrderStatus::Pending, None),
            order(OrderStatus::Shipped, Some(20.0)),
            order(OrderStatus::Delivered, Some(28.0)),
            order(OrderStatus::Cancelled, None),
        ];
        let inventory = [item(2, 5), item(50, 5)];
        let returns = [
            ret(ReturnStatus::Refunded),
            ret(ReturnStatus::Requested),
            ret(ReturnStatus::Received),
        ];

        let summary = StoreOverview::build(&orders, &inventory, &returns);
        assert_eq!(summary.total_orders, 4);
        assert_eq!(summary.pending_percent, 25.0);
        assert_eq!(summary.avg_fulfillment_hours, 24.0);
        assert_eq!(summary.low_stock_percent, 50.0);
        assert_eq!(summary.total_returns, 3);
        assert_eq!(summary.refund_percent, 33.3);
    }
}
