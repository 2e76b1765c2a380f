pub mod api;
pub mod common;
pub mod config;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;

/// WASM entry point: mounts the site into the shell page.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
