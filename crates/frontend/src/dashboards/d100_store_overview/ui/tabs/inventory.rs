use crate::shared::components::ui::Badge;
use crate::shared::number_format::format_money;
use contracts::domain::a002_inventory_item::InventoryItem;
use leptos::prelude::*;

#[component]
pub fn InventoryTab(#[prop(into)] inventory: Signal<Vec<InventoryItem>>) -> impl IntoView {
    view! {
        <div class="tab-section inventory-tab">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"SKU"</th>
                        <th>"Product"</th>
                        <th>"Category"</th>
                        <th class="num">"Stock"</th>
                        <th class="num">"Price"</th>
                        <th>"Level"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        inventory
                            .get()
                            .into_iter()
                            .map(|item| {
                                let level = if item.is_low_stock() {
                                    view! { <Badge variant="warning">"Low"</Badge> }.into_any()
                                } else {
                                    view! { <Badge>"In stock"</Badge> }.into_any()
                                };
                                view! {
                                    <tr>
                                        <td>{item.sku.clone()}</td>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.category.clone()}</td>
                                        <td class="num">{item.stock}</td>
                                        <td class="num">{format_money(item.price)}</td>
                                        <td>{level}</td>
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
