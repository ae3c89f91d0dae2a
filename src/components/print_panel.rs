//! Print Panel Component
//!
//! On-screen controls next to the sheet preview; hidden when printing.

use leptos::prelude::*;

use crate::print;

#[component]
pub fn PrintPanel() -> impl IntoView {
    view! {
        <div class="print-panel no-print">
            <p class="print-panel-label">"Controles"</p>
            <button class="print-btn" on:click=move |_| print::print_page()>
                "🖨 IMPRIMIR"
            </button>
            <p class="print-panel-hint">
                "O sistema gera automaticamente as páginas extras se as etiquetas não couberem em uma folha."
            </p>
        </div>
    }
}
