mod app;
pub mod bridge;
pub mod components;

pub use app::App;

use incident_model::Page;
use leptos::logging::log;
use leptos::*;

/// Entry point for the wasm bundle: picks the page from the `data-page`
/// marker on `<body>` and mounts the app there.
pub fn mount() {
    console_error_panic_hook::set_once();
    let page = Page::from_marker(bridge::page_marker().as_deref());
    log!("incident desk starting on {:?}", page);
    mount_to_body(move || view! { <App page=page/> });
}
