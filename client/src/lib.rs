//! # client
//!
//! Leptos + WASM frontend for the form builder. Pages, components, and
//! application state all sit on top of the `grid` crate, which owns the form
//! document model, the grid mutation engine, and the field-type schema; the
//! builder canvas, the fill-in page, and the preview/viewer pages render the
//! same `grid::schema` control rows and differ only in interactivity.
//! Persistence is reached through `net::api`, a thin HTTP wrapper over the
//! external forms backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    // A second init during hot reload is harmless.
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
