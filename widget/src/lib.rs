//! # widget
//!
//! Leptos + WASM frontend for a candy machine NFT drop.
//!
//! The crate renders on the server (`ssr`) and hydrates in the browser
//! (`hydrate`). It contains the page, the drop and countdown components,
//! their state machines, and the chain capability used to read the drop and
//! hand mint requests to the page's wallet bridge.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. Reads the configuration the server injected into the
/// shell and hydrates `<App/>` with it.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = read_injected_config();
    leptos::mount::hydrate_body(move || view! { <App config/> });
}

#[cfg(feature = "hydrate")]
fn read_injected_config() -> config::DropConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(config::CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let Some(raw) = raw else {
        leptos::logging::warn!("drop config element missing; widget disabled");
        return config::DropConfig::default();
    };
    match config::DropConfig::from_script_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("drop config parse failed: {e}");
            config::DropConfig::default()
        }
    }
}
