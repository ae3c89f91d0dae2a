//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{self, LayoutMode, MenuItem};

/// Default header title; session-only, never persisted
pub const DEFAULT_TITLE: &str = "Coffee Break";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Item bank, newest first
    pub items: Vec<MenuItem>,
    /// Company logo as a data URL (session-only)
    pub logo: Option<String>,
    /// Menu background image as a data URL (persisted)
    pub background: Option<String>,
    /// Menu header title (session-only)
    pub title: String,
    /// Selected printable layout
    pub layout_mode: LayoutMode,
}

impl AppState {
    pub fn new(items: Vec<MenuItem>, background: Option<String>) -> Self {
        Self {
            items,
            background,
            title: DEFAULT_TITLE.to_string(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle an item's inclusion in the printed sheet
pub fn store_toggle_item(store: &AppStore, id: &str) {
    models::toggle_item(&mut store.items().write(), id);
}

/// Add a new item to the front of the bank with a fresh id
pub fn store_add_item(store: &AppStore, name: &str) -> bool {
    let id = models::fresh_id(&store.items().read(), js_sys::Date::now() as u64);
    models::add_item(&mut store.items().write(), name, id)
}

/// Remove an item; only called after the user confirmed the deletion
pub fn store_remove_item(store: &AppStore, id: &str) {
    models::remove_item(&mut store.items().write(), id);
}
