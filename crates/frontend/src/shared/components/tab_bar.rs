use crate::shared::icons::icon;
use crate::shared::state::TabState;
use leptos::prelude::*;

/// One trigger in a [`TabBar`]
#[derive(Clone, Copy, PartialEq)]
pub struct TabItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Row of tab trigger buttons bound to a [`TabState`]
#[component]
pub fn TabBar(tabs: TabState, items: Vec<TabItem>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {items
                .into_iter()
                .map(|item| {
                    let is_active = Memo::new(move |_| tabs.is_active(item.id));
                    view! {
                        <button
                            class="tab-bar__trigger"
                            class:active=is_active
                            role="tab"
                            on:click=move |_| tabs.select(item.id)
                        >
                            <span class="tab-icon">{icon(item.icon)}</span>
                            {item.label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Content panel gated on its tab being active; renders nothing otherwise.
/// An active id with no matching panel simply leaves all panels hidden.
#[component]
pub fn TabPanel(tabs: TabState, id: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || tabs.is_active(id)>
            {children()}
        </Show>
    }
}
