//! New Item Form Component
//!
//! Form for registering a new dish in the item bank.

use leptos::prelude::*;

use crate::store::{store_add_item, use_app_store};

/// Form for creating new items; a blank or whitespace-only name is ignored
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_item(&store, &new_name.get()) {
            set_new_name.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <p class="new-item-hint">"Cadastrar Novo Prato:"</p>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Nome do prato..."
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || new_name.get().trim().is_empty()>
                    "+"
                </button>
            </div>
        </form>
    }
}
