use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Opened tabs and shell layout state, shared through context.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restores the active tab from `?active=` and keeps the URL in sync.
    pub fn init_router_integration(&self, title_for: impl Fn(&str) -> String) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(active_key) = params.get("active") {
            self.open_tab(active_key, &title_for(active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let query = serde_qs::to_string(&HashMap::from([("active", active_key)]))
                .unwrap_or_default();
            let new_url = format!("?{}", query);
            let current = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current == new_url {
                return;
            }
            if let Some(history) = window().and_then(|w| w.history().ok()) {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Closes `key`; if it was active, the neighbour to its left (or the new
    /// first tab) becomes active.
    pub fn close_tab(&self, key: &str) {
        let Some(index) = self
            .opened
            .with_untracked(|tabs| tabs.iter().position(|t| t.key == key))
        else {
            return;
        };
        self.opened.update(|tabs| {
            tabs.remove(index);
        });
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next = self.opened.with_untracked(|tabs| {
                tabs.get(index.saturating_sub(1))
                    .or_else(|| tabs.first())
                    .map(|t| t.key.clone())
            });
            self.active.set(next);
        }
    }

    /// Closes every tab; used on logout.
    pub fn close_all(&self) {
        self.opened.set(Vec::new());
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}
