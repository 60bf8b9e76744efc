#![cfg(target_arch = "wasm32")]

use incident_ui::bridge;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn session() -> web_sys::Storage {
    web_sys::window()
        .expect("window")
        .session_storage()
        .expect("storage access")
        .expect("session storage")
}

#[wasm_bindgen_test]
fn reads_numeric_user_id_from_session() {
    let storage = session();
    storage.set_item("user_id", " 42 ").expect("set");
    assert_eq!(bridge::current_user_id(), Some(42));
    storage.remove_item("user_id").expect("remove");
}

#[wasm_bindgen_test]
fn ignores_missing_or_garbled_user_id() {
    let storage = session();
    storage.remove_item("user_id").expect("remove");
    assert_eq!(bridge::current_user_id(), None);
    storage.set_item("user_id", "NaN").expect("set");
    assert_eq!(bridge::current_user_id(), None);
    storage.remove_item("user_id").expect("remove");
}

#[wasm_bindgen_test]
fn page_marker_comes_from_body() {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .expect("body");
    body.set_attribute("data-page", "public-incidents").expect("set");
    assert_eq!(bridge::page_marker().as_deref(), Some("public-incidents"));
    body.remove_attribute("data-page").expect("remove");
    assert_eq!(bridge::page_marker(), None);
}

#[wasm_bindgen_test]
fn js_errors_render_their_message() {
    let err = js_sys::Error::new("boom");
    assert_eq!(bridge::js_err(err.into()), "boom");
    assert_eq!(bridge::js_err("plain".into()), "plain");
}
