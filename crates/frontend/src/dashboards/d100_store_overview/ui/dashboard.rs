use super::tabs::{InventoryTab, OrdersTab, ReturnsTab};
use crate::dashboards::d100_store_overview::api;
use crate::shared::components::{PageHeader, StatCard, TabBar, TabItem, TabPanel};
use crate::shared::state::TabState;
use chrono::Utc;
use contracts::dashboards::d100_store_overview::StoreOverview;
use contracts::domain::a001_order::Order;
use contracts::domain::a002_inventory_item::InventoryItem;
use contracts::domain::a003_return_item::ReturnItem;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;
use leptos::task::spawn_local;

const TAB_ITEMS: [TabItem; 3] = [
    TabItem {
        id: "orders",
        label: "Orders",
        icon: "orders",
    },
    TabItem {
        id: "inventory",
        label: "Inventory",
        icon: "inventory",
    },
    TabItem {
        id: "returns",
        label: "Returns",
        icon: "returns",
    },
];

/// Store overview dashboard component
#[component]
pub fn StoreOverviewDashboard() -> impl IntoView {
    // Data state
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (inventory, set_inventory) = signal(Vec::<InventoryItem>::new());
    let (returns, set_returns) = signal(Vec::<ReturnItem>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Tab switching is pure UI state; it never touches the data above.
    let tabs = TabState::new("orders");

    // Load all three collections on mount
    Effect::new(move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match load_all().await {
                Ok((o, i, r)) => {
                    set_orders.set(o);
                    set_inventory.set(i);
                    set_returns.set(r);
                    set_loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load store overview data: {}", e);
                    set_error.set(Some(e));
                    set_loading.set(false);
                }
            }
        });
    });

    // Recomputed from scratch whenever a collection changes
    let summary = Memo::new(move |_| {
        orders.with(|o| inventory.with(|i| returns.with(|r| StoreOverview::build(o, i, r))))
    });

    let metric = move |pick: fn(&StoreOverview) -> f64| {
        Signal::derive(move || {
            if loading.get() {
                None
            } else {
                Some(summary.with(pick))
            }
        })
    };

    let total_orders = metric(|s| s.total_orders as f64);
    let pending_percent = metric(|s| s.pending_percent);
    let avg_fulfillment = metric(|s| s.avg_fulfillment_hours);
    let low_stock_percent = metric(|s| s.low_stock_percent);
    let refund_percent = metric(|s| s.refund_percent);

    let pending_status = Signal::derive(move || {
        if summary.with(|s| s.pending_percent) > 25.0 {
            IndicatorStatus::Warning
        } else {
            IndicatorStatus::Good
        }
    });
    let low_stock_status = Signal::derive(move || {
        if summary.with(|s| s.low_stock_percent) > 30.0 {
            IndicatorStatus::Bad
        } else {
            IndicatorStatus::Neutral
        }
    });
    let refund_subtitle = Signal::derive(move || {
        Some(format!("of {} returns", summary.with(|s| s.total_returns)))
    });

    view! {
        <div id="d100_store_overview--dashboard" class="store-overview">
            <PageHeader
                title="Store Overview"
                subtitle="Orders, inventory and returns at a glance"
            >
                <span class="page-header__meta">
                    {format!("as of {}", Utc::now().format("%m/%d/%Y"))}
                </span>
            </PageHeader>

            {move || {
                if loading.get() {
                    view! {
                        <div class="dashboard-loading">
                            <span>"Loading data..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="dashboard-error">
                            <strong>"\u{26a0} Error: "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="stat-grid">
                <StatCard
                    label="Total orders".to_string()
                    icon_name="orders".to_string()
                    value=total_orders
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                />
                <StatCard
                    label="Pending orders".to_string()
                    icon_name="percent".to_string()
                    value=pending_percent
                    format={ValueFormat::Percent { decimals: 1 }}
                    status=pending_status
                />
                <StatCard
                    label="Avg fulfillment".to_string()
                    icon_name="clock".to_string()
                    value=avg_fulfillment
                    format={ValueFormat::Number { decimals: 1 }}
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    subtitle=Signal::derive(|| Some("hours, checkout to shipment".to_string()))
                />
                <StatCard
                    label="Low stock items".to_string()
                    icon_name="alert".to_string()
                    value=low_stock_percent
                    format={ValueFormat::Percent { decimals: 1 }}
                    status=low_stock_status
                />
                <StatCard
                    label="Refunded returns".to_string()
                    icon_name="returns".to_string()
                    value=refund_percent
                    format={ValueFormat::Percent { decimals: 1 }}
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    subtitle=refund_subtitle
                />
            </div>

            <TabBar tabs=tabs items=TAB_ITEMS.to_vec() />

            <TabPanel tabs=tabs id="orders">
                <OrdersTab orders=orders />
            </TabPanel>
            <TabPanel tabs=tabs id="inventory">
                <InventoryTab inventory=inventory />
            </TabPanel>
            <TabPanel tabs=tabs id="returns">
                <ReturnsTab returns=returns />
            </TabPanel>
        </div>
    }
}

async fn load_all() -> Result<(Vec<Order>, Vec<InventoryItem>, Vec<ReturnItem>), String> {
    let orders = api::fetch_orders().await?;
    let inventory = api::fetch_inventory().await?;
    let returns = api::fetch_returns().await?;
    Ok((orders, inventory, returns))
}
