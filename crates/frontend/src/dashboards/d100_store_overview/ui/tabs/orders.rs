use super::MonthlyBreakdown;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::number_format::format_money;
use crate::usecases::u101_create_shipping_label::ShippingLabelButton;
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::metrics::aggregate_monthly;
use leptos::prelude::*;

fn status_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Shipped => "primary",
        OrderStatus::Delivered => "success",
        OrderStatus::Cancelled => "error",
    }
}

#[component]
pub fn OrdersTab(#[prop(into)] orders: Signal<Vec<Order>>) -> impl IntoView {
    let monthly = Memo::new(move |_| orders.with(|o| aggregate_monthly(o)));

    view! {
        <div class="tab-section orders-tab">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                        <th class="num">"Total"</th>
                        <th>"Shipping label"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        orders
                            .get()
                            .into_iter()
                            .map(|order| {
                                view! {
                                    <tr>
                                        <td>{order.order_number.clone()}</td>
                                        <td>{order.customer.clone()}</td>
                                        <td>
                                            <Badge variant=status_variant(order.status)>
                                                {order.status.label()}
                                            </Badge>
                                        </td>
                                        <td>{format_date(&order.date)}</td>
                                        <td class="num">{format_money(order.total)}</td>
                                        <td>
                                            <ShippingLabelButton
                                                order_id=order.id.value().to_string()
                                                order_number=order.order_number.clone()
                                            />
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <MonthlyBreakdown buckets=monthly />
        </div>
    }
}
