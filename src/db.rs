//! Local Database Façade
//!
//! Best-effort persistence of the item bank and the menu background image
//! on top of a [`KeyValueStore`]. The in-memory session is authoritative;
//! a failed write never rolls anything back.

use crate::models::{Category, MenuItem};
use crate::storage::{KeyValueStore, LocalStore};

const ITEMS_KEY: &str = "menu-items-db";
const BACKGROUND_KEY: &str = "menu-background-image";

fn log_error(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

fn log_warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{msg}");
}

#[cfg(target_arch = "wasm32")]
fn alert(msg: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(msg);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert(_msg: &str) {}

/// Factory defaults shown the first time the editor opens
pub fn default_items() -> Vec<MenuItem> {
    let defaults: &[(&str, &str, Option<Category>, bool)] = &[
        ("1", "Pão de Queijo", Some(Category::Food), true),
        ("2", "Coxinha de Frango", Some(Category::Food), true),
        ("3", "Mini Sanduíche Natural", Some(Category::Food), false),
        ("4", "Bolo de Cenoura com Chocolate", Some(Category::Dessert), true),
        ("5", "Brigadeiro", Some(Category::Dessert), false),
        ("6", "Café Expresso", Some(Category::Drink), true),
        ("7", "Suco de Laranja", Some(Category::Drink), false),
    ];
    defaults
        .iter()
        .map(|(id, name, category, selected)| MenuItem {
            id: (*id).to_string(),
            name: (*name).to_string(),
            category: *category,
            selected: *selected,
        })
        .collect()
}

/// Persistence façade over a key-value store
#[derive(Clone)]
pub struct Database<S: KeyValueStore> {
    store: S,
}

impl Database<LocalStore> {
    /// Database backed by the browser's `localStorage`
    pub fn local() -> Self {
        Self::new(LocalStore::new())
    }
}

impl<S: KeyValueStore> Database<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved item list, or the factory defaults when nothing is saved
    /// or the saved blob no longer parses.
    pub fn load_items(&self) -> Vec<MenuItem> {
        if let Some(saved) = self.store.get(ITEMS_KEY) {
            match serde_json::from_str(&saved) {
                Ok(items) => return items,
                Err(e) => log_error(&format!("Erro ao carregar banco de dados: {e}")),
            }
        }
        default_items()
    }

    /// Serialize and write the full item list. A failed write is logged
    /// and surfaced to the user, but not propagated.
    pub fn save_items(&self, items: &[MenuItem]) {
        let json = match serde_json::to_string(items) {
            Ok(json) => json,
            Err(e) => {
                log_error(&format!("Erro ao serializar itens: {e}"));
                return;
            }
        };
        if let Err(e) = self.store.set(ITEMS_KEY, &json) {
            log_error(&format!("Erro ao salvar no banco de dados: {e}"));
            alert("Erro ao salvar dados. Seu armazenamento local pode estar cheio.");
        }
    }

    pub fn load_background(&self) -> Option<String> {
        self.store.get(BACKGROUND_KEY)
    }

    /// Write or clear the background image. Backgrounds are large, so a
    /// failed write only logs a warning and the session keeps the image.
    pub fn save_background(&self, data_url: Option<&str>) {
        match data_url {
            Some(data_url) => {
                if let Err(e) = self.store.set(BACKGROUND_KEY, data_url) {
                    log_warn(&format!(
                        "Imagem de fundo muito grande para salvar no cache local: {e}"
                    ));
                }
            }
            None => self.store.remove(BACKGROUND_KEY),
        }
    }

    /// Clear everything persisted and return the factory defaults.
    /// Debug helper; no UI control triggers it.
    #[allow(dead_code)]
    pub fn reset(&self) -> Vec<MenuItem> {
        self.store.remove(ITEMS_KEY);
        self.store.remove(BACKGROUND_KEY);
        default_items()
    }
}
