//! # plans-ui
//!
//! WASM browser layer for the plans web UI. It enhances server-rendered
//! pages: the navbar shows who is signed in, and the login and register forms
//! submit through a small JSON client instead of navigating.
//!
//! `net` holds the client wrapper and endpoints, `state` the pure view state,
//! `pages` the on-load behaviors, `components` the Leptos navbar fragment,
//! and `util` the browser glue. Everything except the `hydrate`-gated glue
//! runs in native tests.

pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
mod testing;

/// WASM entry point: install logging, then wire the page once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    util::dom::on_dom_ready(|| {
        let (config, config_errors) = config::UiConfig::from_lookup(util::dom::body_data);
        let _ = console_log::init_with_level(config.log_level);
        for e in config_errors {
            log::warn!("ignoring page config value: {e}");
        }
        pages::mount(&config);
    });
}
