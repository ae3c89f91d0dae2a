//! Cardápio Editor Entry Point

mod app;
mod components;
mod db;
mod layout;
mod models;
mod print;
mod storage;
mod store;
mod upload;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
