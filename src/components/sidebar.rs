//! Sidebar Component
//!
//! Editor controls: print-layout picker, logo and background upload,
//! header title, and the dish bank.

use leptos::prelude::*;
use web_sys::Event;

use crate::components::{ItemList, NewItemForm};
use crate::models::LayoutMode;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::upload;

/// Picker entries: mode, label, detail line
const LAYOUT_OPTIONS: &[(LayoutMode, &str, &str)] = &[
    (LayoutMode::Menu, "Menu Lista (Clássico)", ""),
    (LayoutMode::Labels, "Etiquetas Grandes (Grade)", ""),
    (
        LayoutMode::Labels32,
        "Etiquetas Pequenas",
        "32 por folha • 4 cópias cada",
    ),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let store = use_app_store();

    let is_menu_mode = move || store.layout_mode().get() == LayoutMode::Menu;

    let on_logo_upload = move |ev: Event| {
        if let Some(file) = upload::file_from_input_event(&ev) {
            upload::read_as_data_url(&file, move |data_url| {
                store.logo().set(Some(data_url));
            });
        }
    };

    let on_background_upload = move |ev: Event| {
        if let Some(file) = upload::file_from_input_event(&ev) {
            upload::read_as_data_url(&file, move |data_url| {
                store.background().set(Some(data_url));
            });
        }
    };

    view! {
        <aside class="sidebar no-print">
            <div class="sidebar-header">
                <h2>"Editor de Cardápio"</h2>
                <p>"Configure os itens à esquerda."</p>
            </div>

            <section class="sidebar-section">
                <label class="section-label">"1. Modelo de Impressão"</label>
                <div class="layout-picker">
                    {LAYOUT_OPTIONS
                        .iter()
                        .map(|(mode, label, detail)| {
                            let mode = *mode;
                            let is_active = move || store.layout_mode().get() == mode;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() { "layout-btn active" } else { "layout-btn" }
                                    }
                                    on:click=move |_| store.layout_mode().set(mode)
                                >
                                    <span class="layout-btn-label">{*label}</span>
                                    <Show when=move || !detail.is_empty()>
                                        <span class="layout-btn-detail">{*detail}</span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="sidebar-section">
                <label class="section-label">"2. Logo da Empresa"</label>
                <label class="upload-zone">
                    <span>"Enviar Logo"</span>
                    <input type="file" accept="image/*" on:change=on_logo_upload />
                </label>
            </section>

            <Show when=is_menu_mode>
                <section class="sidebar-section">
                    <label class="section-label">"3. Fundo do Cardápio"</label>
                    <label class=move || {
                        if store.background().get().is_some() {
                            "upload-zone has-image"
                        } else {
                            "upload-zone"
                        }
                    }>
                        <span>
                            {move || {
                                if store.background().get().is_some() {
                                    "Imagem Definida"
                                } else {
                                    "Enviar Fundo Personalizado"
                                }
                            }}
                        </span>
                        <input type="file" accept="image/*" on:change=on_background_upload />
                    </label>
                    <Show when=move || store.background().get().is_some()>
                        <button
                            class="clear-background-btn"
                            on:click=move |_| store.background().set(None)
                        >
                            "✗ Remover Fundo"
                        </button>
                    </Show>
                </section>

                <section class="sidebar-section">
                    <label class="section-label">"4. Título do Cabeçalho"</label>
                    <input
                        type="text"
                        placeholder="Ex: Coffee Break"
                        prop:value=move || store.title().get()
                        on:input=move |ev| store.title().set(event_target_value(&ev))
                    />
                </section>
            </Show>

            <section class="sidebar-section">
                <label class="section-label">
                    {move || if is_menu_mode() { "5. Banco de Pratos" } else { "3. Banco de Pratos" }}
                </label>
                <NewItemForm />
                <ItemList />
            </section>
        </aside>
    }
}
