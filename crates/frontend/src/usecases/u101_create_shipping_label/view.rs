use super::api;
use crate::shared::components::ui::Button;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_create_shipping_label::{
    CreateShippingLabel, CreateShippingLabelRequest, ShippingLabelResponse,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Per-order trigger for the shipping label stub.
/// Shows the issued tracking number once the label exists.
#[component]
pub fn ShippingLabelButton(order_id: String, order_number: String) -> impl IntoView {
    let (creating, set_creating) = signal(false);
    let (label, set_label) = signal(None::<ShippingLabelResponse>);
    let (error, set_error) = signal(None::<String>);

    let on_click = Callback::new(move |_| {
        if creating.get_untracked() || label.with_untracked(|l| l.is_some()) {
            return;
        }
        set_creating.set(true);
        set_error.set(None);

        let request = CreateShippingLabelRequest {
            order_id: order_id.clone(),
            order_number: order_number.clone(),
        };
        spawn_local(async move {
            match api::create_shipping_label(request).await {
                Ok(response) => {
                    set_label.set(Some(response));
                    set_creating.set(false);
                }
                Err(e) => {
                    log::error!("Shipping label creation failed: {}", e);
                    set_error.set(Some(e));
                    set_creating.set(false);
                }
            }
        });
    });

    view! {
        <span class="label-action" title=CreateShippingLabel::display_name()>
            {move || match label.get() {
                Some(issued) => view! {
                    <span class="label-action__issued" title=format_datetime(&issued.created_at)>
                        {icon("label")}
                        {format!("{} {}", issued.carrier, issued.tracking_number)}
                    </span>
                }.into_any(),
                None => view! {
                    <Button variant="secondary" size="sm" disabled=creating on_click=on_click>
                        {move || if creating.get() { "Creating..." } else { "Create label" }}
                    </Button>
                }.into_any(),
            }}
            {move || error.get().map(|e| view! {
                <span class="label-action__error">{e}</span>
            })}
        </span>
    }
}
