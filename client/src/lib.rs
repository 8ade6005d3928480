//! # client
//!
//! Leptos + WASM front-end for ViewerQ: landing page, account screens, the
//! streamer and viewer setup wizards, and the streamer dashboard.
//!
//! Every "backend" call is simulated locally. The crate is compiled twice:
//! with `ssr` for the host's server rendering and with `hydrate` for the
//! browser bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod route;
pub mod state;
pub mod util;
pub mod wizard;

/// WASM entry point. Installs panic/console logging and hydrates the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already set: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
