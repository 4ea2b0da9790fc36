use super::MonthlyBreakdown;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use contracts::domain::a003_return_item::{ReturnItem, ReturnStatus};
use contracts::metrics::aggregate_monthly;
use leptos::prelude::*;

fn status_variant(status: ReturnStatus) -> &'static str {
    match status {
        ReturnStatus::Requested => "warning",
        ReturnStatus::Received => "primary",
        ReturnStatus::Refunded => "success",
    }
}

#[component]
pub fn ReturnsTab(#[prop(into)] returns: Signal<Vec<ReturnItem>>) -> impl IntoView {
    let monthly = Memo::new(move |_| returns.with(|r| aggregate_monthly(r)));

    view! {
        <div class="tab-section returns-tab">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Product"</th>
                        <th>"Reason"</th>
                        <th>"Status"</th>
                        <th>"Date"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        returns
                            .get()
                            .into_iter()
                            .map(|item| {
                                view! {
                                    <tr>
                                        <td>{item.order_number.clone()}</td>
                                        <td>{item.product_name.clone()}</td>
                                        <td>{item.reason.clone()}</td>
                                        <td>
                                            <Badge variant=status_variant(item.status)>
                                                {item.status.label()}
                                            </Badge>
                                        </td>
                                        <td>{format_date(&item.date)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <MonthlyBreakdown buckets=monthly show_rate=true />
        </div>
    }
}
