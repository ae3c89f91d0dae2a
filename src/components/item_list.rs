//! Item List Component
//!
//! Searchable dish bank: clicking a row toggles whether the dish prints,
//! the trash button removes it after inline confirmation.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::MenuItem;
use crate::store::{store_remove_item, store_toggle_item, use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let (search_term, set_search_term) = signal(String::new());

    let filtered_items = Memo::new(move |_| {
        let term = search_term.get().to_lowercase();
        store
            .items()
            .get()
            .into_iter()
            .filter(|item| item.name.to_lowercase().contains(&term))
            .collect::<Vec<MenuItem>>()
    });

    view! {
        <div class="item-list">
            <input
                type="text"
                class="search-input"
                placeholder="Pesquisar..."
                prop:value=move || search_term.get()
                on:input=move |ev| set_search_term.set(event_target_value(&ev))
            />

            <Show when=move || filtered_items.get().is_empty()>
                <p class="item-list-empty">"Nenhum prato encontrado."</p>
            </Show>

            <For
                each=move || filtered_items.get()
                key=|item| item.id.clone()
                children=move |item| {
                    let id = item.id.clone();
                    let toggle_id = id.clone();
                    let delete_id = id.clone();
                    let selected = Memo::new(move |_| {
                        store.items().read().iter().any(|i| i.id == id && i.selected)
                    });
                    let row_class = move || {
                        if selected.get() { "item-row selected" } else { "item-row" }
                    };

                    view! {
                        <div class=row_class>
                            <div
                                class="item-row-main"
                                on:click=move |_| store_toggle_item(&store, &toggle_id)
                            >
                                <span class="item-check">
                                    {move || if selected.get() { "✓" } else { "" }}
                                </span>
                                <span class="item-name">{item.name.clone()}</span>
                            </div>
                            <DeleteConfirmButton on_confirm=Callback::new(move |_| {
                                store_remove_item(&store, &delete_id);
                            }) />
                        </div>
                    }
                }
            />
        </div>
    }
}
