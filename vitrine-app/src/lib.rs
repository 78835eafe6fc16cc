//! Vitrine storefront application.
//!
//! A small Leptos storefront served from Spin:
//! - Homepage with a deferred "Recommended Products" section
//! - Product cards with swatch selection and hover image cycling
//! - Minimal product pages addressed by handle

mod app;

#[cfg(feature = "ssr")]
mod server;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
