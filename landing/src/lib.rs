//! Browser entry point of the HawkEye landing page.
//!
//! `hawkeye-site` pre-renders the document; this bundle reads the embedded
//! configuration, replaces the static markup and mounts the interactive
//! [`RootView`] so panels open and carousels page.

use hawkeye_site::components::RootView;
use hawkeye_site::config::SiteConfig;
use hawkeye_site::{CONFIG_ELEMENT_ID, MOUNT_ID};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Configuration embedded by the server render, or the defaults when it is
/// missing or unreadable.
fn embedded_config(document: &web_sys::Document) -> SiteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::warn_1(&format!("hawkeye: {e}; using default configuration").into());
            SiteConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let config = embedded_config(&document);

    let mount = document
        .get_element_by_id(MOUNT_ID)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    match mount {
        Some(root) => {
            // Drop the static render, the live view replaces it
            root.set_inner_html("");
            leptos::mount::mount_to(root, move || view! { <RootView config=config /> }).forget();
        }
        None => leptos::mount::mount_to_body(move || view! { <RootView config=config /> }),
    }
}
