//! Labels Paper Component
//!
//! Label sheets in two variants: the large 3-column grid with one label
//! per selected dish, and the small 4-column grid where every dish prints
//! four times on 37mm rows (32 labels per A4 sheet). Extra items overflow
//! onto further pages via the browser's automatic page breaks.

use leptos::prelude::*;

use crate::layout::{self, FontTier};
use crate::models::LayoutMode;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LabelsPaper() -> impl IntoView {
    let store = use_app_store();

    let is_small = Memo::new(move |_| store.layout_mode().get() == LayoutMode::Labels32);
    let cells = Memo::new(move |_| {
        layout::label_cells(&store.items().get(), store.layout_mode().get())
    });

    view! {
        <div class="paper labels-paper">
            <div class=move || {
                if is_small.get() { "labels-grid small" } else { "labels-grid large" }
            }>
                <For
                    each=move || cells.get()
                    key=|cell| cell.id.clone()
                    children=move |cell| {
                        let name_class = match cell.tier {
                            FontTier::Normal => "label-name",
                            FontTier::Compact => "label-name compact",
                        };
                        view! {
                            <div class="label-cell">
                                <div class="label-logo">
                                    {move || match store.logo().get() {
                                        Some(src) => {
                                            view! { <img src=src alt="Logo" /> }.into_any()
                                        }
                                        None => {
                                            view! { <span class="label-logo-placeholder">"Logo"</span> }
                                                .into_any()
                                        }
                                    }}
                                </div>
                                <h3 class=name_class>{cell.name}</h3>
                            </div>
                        }
                    }
                />
            </div>
            <Show when=move || cells.get().is_empty()>
                <div class="empty-placeholder labels-empty">
                    "Nenhum item selecionado para as etiquetas."
                </div>
            </Show>
        </div>
    }
}
