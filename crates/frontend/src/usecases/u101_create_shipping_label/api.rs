use contracts::usecases::u101_create_shipping_label::{
    CreateShippingLabelRequest, ShippingLabelResponse,
};
use gloo_timers::future::TimeoutFuture;

/// Simulated carrier round-trip (ms)
const MOCK_LATENCY_MS: u32 = 300;

/// Issue a shipping label for an order.
///
/// Stub: no carrier call is made; the label is fabricated locally after a
/// simulated delay. Keeps the `Result<_, String>` shape of a real call.
pub async fn create_shipping_label(
    request: CreateShippingLabelRequest,
) -> Result<ShippingLabelResponse, String> {
    TimeoutFuture::new(MOCK_LATENCY_MS).await;

    if request.order_number.trim().is_empty() {
        return Err("Order number is required".to_string());
    }

    Ok(ShippingLabelResponse::issue(&request.order_number))
}
