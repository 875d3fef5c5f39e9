//! RIZO Landing Page
//!
//! Leptos-based WASM frontend for the lead-capture funnel.

mod app;
mod components;
mod pages;
mod submit;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    leptos::mount::mount_to_body(App);
}
