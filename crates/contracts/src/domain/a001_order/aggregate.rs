use crate::metrics::MonthlyRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed id for an order record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub Uuid);

impl OrderId {
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

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Display label for badges
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Customer order. Read-only input to the dashboard; never mutated by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,

    /// Human-facing order number (e.g. "ORD-1042")
    #[serde(rename = "orderNumber")]
    pub order_number: String,

    /// Customer display name
    pub customer: String,

    pub status: OrderStatus,

    /// Order date (YYYY-MM-DD)
    pub date: String,

    /// Order total in store currency
    pub total: f64,

    /// Hours from checkout to shipment; None until the order ships
    #[serde(rename = "fulfillmentHours")]
    pub fulfillment_hours: Option<f64>,
}

impl MonthlyRecord for Order {
    fn date(&self) -> &str {
        &self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_wire_shape_uses_camel_case() {
        let json = r#"{
            "id": "7f7a1f9e-3c51-4b3f-9a44-0a8f6f1c2d3e",
            "orderNumber": "ORD-1001",
            "customer": "Dana Reyes",
            "status": "pending",
            "date": "2025-03-04",
            "total": 129.5,
            "fulfillmentHours": null
        }"#;

        let order: Order = serde_json::from_str(json).expect("valid order JSON");
        assert_eq!(order.order_number, "ORD-1001");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.fulfillment_hours, None);
    }
}
