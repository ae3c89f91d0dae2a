//! Menu Paper Component
//!
//! Classic single-column menu sheet: logo, title, the selected dishes and
//! a decorative footer. A custom background image replaces the default
//! border-and-texture framing and fills the page.

use leptos::prelude::*;

use crate::layout::{self, FontTier};
use crate::models::LayoutMode;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuPaper() -> impl IntoView {
    let store = use_app_store();

    let selected = Memo::new(move |_| layout::selected_items(&store.items().get()));
    let has_background = Memo::new(move |_| store.background().get().is_some());

    view! {
        <div class=move || {
            if has_background.get() { "paper menu-paper" } else { "paper menu-paper paper-texture" }
        }>
            {move || {
                store
                    .background()
                    .get()
                    .map(|src| view! { <img class="menu-background" src=src alt="Fundo" /> })
            }}

            <Show when=move || !has_background.get()>
                <div class="menu-frame-double"></div>
                <div class="menu-frame-dashed"></div>
            </Show>

            <div class="menu-content">
                <header class="menu-header">
                    {move || match store.logo().get() {
                        Some(src) => view! { <img class="menu-logo" src=src alt="Logo" /> }.into_any(),
                        None => {
                            view! { <div class="menu-logo-placeholder">"Logo Empresa"</div> }
                                .into_any()
                        }
                    }}
                    <h1 class="menu-title">
                        {move || {
                            let title = store.title().get();
                            if title.is_empty() { "Cardápio".to_string() } else { title }
                        }}
                    </h1>
                    <div class="menu-divider"></div>
                </header>

                <div class="menu-items">
                    <Show when=move || selected.get().is_empty()>
                        <p class="empty-placeholder">"Nenhum item selecionado para o cardápio."</p>
                    </Show>
                    <For
                        each=move || selected.get()
                        key=|item| item.id.clone()
                        children=|item| {
                            let class = match layout::font_tier(LayoutMode::Menu, &item.name) {
                                FontTier::Normal => "menu-item-name",
                                FontTier::Compact => "menu-item-name compact",
                            };
                            view! { <div class=class>{item.name}</div> }
                        }
                    />
                </div>

                <Show when=move || !has_background.get()>
                    <footer class="menu-footer">
                        <span class="footer-ornament">"🌾"</span>
                        <span class="footer-motto">"Bom Apetite"</span>
                        <span class="footer-ornament">"☕"</span>
                    </footer>
                </Show>
            </div>
        </div>
    }
}
