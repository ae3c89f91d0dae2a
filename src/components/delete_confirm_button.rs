//! Delete Confirm Button Component
//!
//! Inline two-step confirmation for permanently removing a dish, driving
//! the [`DeleteIntent`] protocol: the trash button only arms the
//! deletion, and nothing is removed until the user confirms. Declining
//! restores the button unchanged.

use leptos::prelude::*;

use crate::models::DeleteIntent;

/// Inline delete confirmation button
///
/// Shows a trash button initially. When clicked, shows "Excluir?" with
/// confirm/cancel buttons.
///
/// # Arguments
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(#[prop(into)] on_confirm: Callback<()>) -> impl IntoView {
    let (intent, set_intent) = signal(DeleteIntent::default());

    view! {
        <Show when=move || !intent.get().is_armed()>
            <button
                class="delete-btn"
                title="Excluir prato"
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_intent.update(|i| *i = i.request());
                }
            >
                "🗑"
            </button>
        </Show>
        <Show when=move || intent.get().is_armed()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Excluir?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_intent.update(|i| *i = i.confirm(|| on_confirm.run(())));
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_intent.update(|i| *i = i.decline());
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
