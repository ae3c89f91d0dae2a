//! Cardápio Editor App
//!
//! Main application component: loads persisted state, provides the store,
//! wires the fire-and-forget persistence effects and composes the layout.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{LabelsPaper, MenuPaper, PrintPanel, Sidebar};
use crate::db::Database;
use crate::models::LayoutMode;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let db = Database::local();

    // Session state starts from whatever survived in localStorage
    let store = Store::new(AppState::new(db.load_items(), db.load_background()));
    provide_context(store);

    // Persist the full item list on every change. Best-effort: a failed
    // write never touches the in-memory session.
    {
        let db = db.clone();
        Effect::new(move |_| {
            db.save_items(&store.items().get());
        });
    }

    // Same for the background image; `None` clears the cached entry.
    Effect::new(move |_| {
        db.save_background(store.background().get().as_deref());
    });

    view! {
        <div class="app-layout">
            <Sidebar />

            <main class="main-content">
                <div class="preview-row">
                    <div class="print-area">
                        {move || match store.layout_mode().get() {
                            LayoutMode::Menu => view! { <MenuPaper /> }.into_any(),
                            LayoutMode::Labels | LayoutMode::Labels32 => {
                                view! { <LabelsPaper /> }.into_any()
                            }
                        }}
                    </div>
                    <PrintPanel />
                </div>
            </main>
        </div>
    }
}
