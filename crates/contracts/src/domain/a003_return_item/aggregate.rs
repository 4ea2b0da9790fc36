use crate::metrics::MonthlyRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Typed id for a return record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReturnItemId(pub Uuid);

impl ReturnItemId {
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

/// Return processing status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Requested,
    Received,
    Refunded,
}

impl ReturnStatus {
    /// Display label for badges
    pub fn label(&self) -> &'static str {
        match self {
            ReturnStatus::Requested => "Requested",
            ReturnStatus::Received => "Received",
            ReturnStatus::Refunded => "Refunded",
        }
    }
}

/// Product return. Read-only input to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub id: ReturnItemId,

    /// Order the return belongs to
    #[serde(rename = "orderNumber")]
    pub order_number: String,

    /// Returned product name
    #[serde(rename = "productName")]
    pub product_name: String,

    /// Customer-stated reason
    pub reason: String,

    pub status: ReturnStatus,

    /// Return date (YYYY-MM-DD)
    pub date: String,

    /// Store-wide return-rate snapshot (percent) attached to some records
    pub rate: Option<f64>,
}

impl MonthlyRecord for ReturnItem {
    fn date(&self) -> &str {
        &self.date
    }
    fn rate(&self) -> Option<f64> {
        self.rate
    }
}
