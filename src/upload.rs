//! Image Upload Helpers
//!
//! Reads an uploaded image file into a data URL via `FileReader`. There
//! is no format or size validation; if encoding fails the callback never
//! fires and no asset is set.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, FileReader, HtmlInputElement};

/// First file of the `<input type="file">` that fired `ev`, if any
pub fn file_from_input_event(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Read `file` as a data URL and pass the result to `on_load`.
/// Fire-and-forget; read errors are swallowed.
pub fn read_as_data_url(file: &File, on_load: impl Fn(String) + 'static) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(_) => return,
    };

    let reader_ref = reader.clone();
    let onloadend = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        if let Ok(result) = reader_ref.result() {
            if let Some(data_url) = result.as_string() {
                on_load(data_url);
            }
        }
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    // Leak the closure; the reader fires exactly once per upload
    onloadend.forget();

    let _ = reader.read_as_data_url(file);
}
