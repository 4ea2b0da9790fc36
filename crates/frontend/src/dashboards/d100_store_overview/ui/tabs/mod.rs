//! Tab components for the store overview dashboard
//!
//! Each tab is a separate file; the monthly breakdown table is shared
//! between the orders and returns tabs.

mod inventory;
mod orders;
mod returns;

pub use inventory::InventoryTab;
pub use orders::OrdersTab;
pub use returns::ReturnsTab;

use crate::shared::number_format::format_number_with_decimals;
use contracts::metrics::MonthlyBucket;
use leptos::prelude::*;

/// Month-by-month record counts, in first-occurrence order of the input.
#[component]
pub(super) fn MonthlyBreakdown(
    #[prop(into)] buckets: Signal<Vec<MonthlyBucket>>,
    /// Show the rate column (returns carry rates, orders do not)
    #[prop(optional)] show_rate: bool,
) -> impl IntoView {
    view! {
        <div class="monthly-breakdown">
            <h3 class="monthly-breakdown__title">"By month"</h3>
            <table class="data-table data-table--compact">
                <thead>
                    <tr>
                        <th>"Month"</th>
                        <th class="num">"Count"</th>
                        {show_rate.then(|| view! { <th class="num">"Rate"</th> })}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        buckets
                            .get()
                            .into_iter()
                            .map(|bucket| {
                                view! {
                                    <tr>
                                        <td>{bucket.month.clone()}</td>
                                        <td class="num">{bucket.count}</td>
                                        {show_rate
                                            .then(|| view! {
                                                <td class="num">
                                                    {format!("{}%", format_number_with_decimals(bucket.rate, 1))}
                                                </td>
                                            })}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
