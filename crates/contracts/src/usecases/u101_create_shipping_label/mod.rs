pub mod request;
pub mod response;

pub use request::CreateShippingLabelRequest;
pub use response::ShippingLabelResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct CreateShippingLabel;

impl UseCaseMetadata for CreateShippingLabel {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "create_shipping_label"
    }

    fn display_name() -> &'static str {
        "Create shipping label"
    }

    fn description() -> &'static str {
        "Issue a carrier shipping label for an order (prototype stub)"
    }
}
