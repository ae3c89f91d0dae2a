//! Print Trigger
//!
//! Hands the rendered sheet to the browser's native print dialog.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Delay between focusing the window and opening the print dialog, so the
/// browser settles layout first. Tunable; not a correctness requirement.
pub const PRINT_DELAY_MS: u32 = 250;

/// Focus the window, wait briefly, then open the print dialog.
pub fn print_page() {
    spawn_local(async {
        if let Some(window) = web_sys::window() {
            let _ = window.focus();
            TimeoutFuture::new(PRINT_DELAY_MS).await;
            let _ = window.print();
        }
    });
}
