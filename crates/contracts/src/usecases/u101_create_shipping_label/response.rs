use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Issued shipping label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingLabelResponse {
    #[serde(rename = "labelId")]
    pub label_id: String,

    #[serde(rename = "orderNumber")]
    pub order_number: String,

    /// Carrier code (fixed in the prototype)
    pub carrier: String,

    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,

    /// Issue timestamp, RFC 3339
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ShippingLabelResponse {
    /// Fabricate a label for an order. Prototype stub: no carrier
    /// integration, the tracking number is derived from a fresh UUID.
    pub fn issue(order_number: &str) -> Self {
        let label_id = Uuid::new_v4();
        let tracking_seed = Uuid::new_v4().simple().to_string();

        Self {
            label_id: label_id.to_string(),
            order_number: order_number.to_string(),
            carrier: "UPS".to_string(),
            tracking_number: format!("1Z{}", tracking_seed[..12].to_uppercase()),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_label_echoes_order_number() {
        let label = ShippingLabelResponse::issue("ORD-1042");
        assert_eq!(label.order_number, "ORD-1042");
        assert_eq!(label.carrier, "UPS");
        assert!(label.tracking_number.starts_with("1Z"));
        assert_eq!(label.tracking_number.len(), 14);
    }

    #[test]
    fn issued_labels_are_unique() {
        let a = ShippingLabelResponse::issue("ORD-1");
        let b = ShippingLabelResponse::issue("ORD-1");
        assert_ne!(a.label_id, b.label_id);
        assert_ne!(a.tracking_number, b.tracking_number);
    }
}
