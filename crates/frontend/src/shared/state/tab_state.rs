use leptos::prelude::*;

/// Active-tab store for one tab set.
///
/// Owned by the page that renders the tab set and passed by value to
/// trigger controls and content panels; the handle is `Copy` and every
/// copy shares the same underlying signal. Observers re-render through
/// the signal graph when the active identifier changes. Discarded with
/// the owning page.
#[derive(Clone, Copy)]
pub struct TabState {
    active: RwSignal<String>,
}

impl TabState {
    /// Create a store with `default_id` active.
    pub fn new(default_id: &str) -> Self {
        Self {
            active: RwSignal::new(default_id.to_string()),
        }
    }

    /// Activate `id` unconditionally. Ids are not validated against the
    /// rendered tab set; selecting an unknown id leaves every panel hidden.
    pub fn select(&self, id: &str) {
        leptos::logging::log!("tab select: '{}'", id);
        self.active.set(id.to_string());
    }

    /// Reactive check used by content panels to decide visibility.
    pub fn is_active(&self, id: &str) -> bool {
        self.active.with(|active| active == id)
    }

    /// Currently active identifier; used by trigger controls for styling.
    pub fn active_id(&self) -> String {
        self.active.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_default_tab() {
        let tabs = TabState::new("orders");
        assert!(tabs.is_active("orders"));
        assert!(!tabs.is_active("inventory"));
        assert_eq!(tabs.active_id(), "orders");
    }

    #[test]
    fn select_moves_the_active_tab() {
        let tabs = TabState::new("orders");
        tabs.select("inventory");
        assert!(tabs.is_active("inventory"));
        assert!(!tabs.is_active("orders"));
    }

    #[test]
    fn reselecting_the_active_tab_changes_nothing() {
        let tabs = TabState::new("orders");
        tabs.select("orders");
        tabs.select("orders");
        assert!(tabs.is_active("orders"));
        assert_eq!(tabs.active_id(), "orders");
    }

    #[test]
    fn unknown_id_deactivates_every_known_tab() {
        let tabs = TabState::new("orders");
        tabs.select("missing");
        assert!(!tabs.is_active("orders"));
        assert!(!tabs.is_active("inventory"));
        assert!(!tabs.is_active("returns"));
        assert_eq!(tabs.active_id(), "missing");
    }
}
