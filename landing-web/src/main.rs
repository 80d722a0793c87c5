//! Coming Soon Landing Page
//!
//! Leptos CSR front-end. Particle generation and the entrance state machine
//! live in the `shared` crate; this crate wires them to the browser.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod error;
mod hooks;
mod services;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Readable panic messages in the browser console
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Landing page starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
