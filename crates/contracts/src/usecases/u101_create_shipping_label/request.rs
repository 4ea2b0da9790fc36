use serde::{Deserialize, Serialize};

/// Request to issue a shipping label for one order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateShippingLabelRequest {
    /// Order record id (a001_order.id)
    #[serde(rename = "orderId")]
    pub order_id: String,

    /// Human-facing order number, echoed back on the label
    #[serde(rename = "orderNumber")]
    pub order_number: String,
}
