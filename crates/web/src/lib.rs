//! Leptos browser client for the storefront.
//!
//! Fetches the catalog once at load, renders it grouped by category, filters
//! live on category-name substrings, and fires fire-and-forget log calls for
//! the Cancel / Reorder / Seen buttons.

pub mod api;
pub mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point; runs automatically when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(app::App);
}
