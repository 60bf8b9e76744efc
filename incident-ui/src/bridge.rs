//! Browser plumbing: `fetch` against the incident API, session storage,
//! navigation, and console output of raw records.

use incident_model::payload::{decode_incidents, decode_responses, parse_body};
use incident_model::{ApiConfig, ApiError, Endpoint, Incident, IncidentId, Page, Response};
use leptos::logging::warn;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const USER_ID_KEY: &str = "user_id";
const PAGE_ATTRIBUTE: &str = "data-page";

pub fn js_err(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or(ApiError::Unavailable("window"))
}

async fn send(endpoint: &Endpoint) -> Result<web_sys::Response, ApiError> {
    let url = ApiConfig::from_env().url(endpoint);
    let value = JsFuture::from(window()?.fetch_with_str(&url))
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    value
        .dyn_into::<web_sys::Response>()
        .map_err(|e| ApiError::Network(js_err(e)))
}

async fn read_text(resp: &web_sys::Response) -> Result<String, ApiError> {
    let promise = resp.text().map_err(|e| ApiError::Network(js_err(e)))?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Network(js_err(e)))?;
    Ok(text.as_string().unwrap_or_default())
}

async fn get_json(endpoint: &Endpoint) -> Result<serde_json::Value, ApiError> {
    let resp = send(endpoint).await?;
    let text = read_text(&resp).await?;
    parse_body(&text, resp.ok(), resp.status())
}

pub async fn fetch_incidents(page: Page) -> Result<Vec<Incident>, ApiError> {
    decode_incidents(get_json(&page.endpoint()).await?)
}

pub async fn fetch_responses(id: &IncidentId) -> Result<Vec<Response>, ApiError> {
    decode_responses(get_json(&Endpoint::Responses(id.clone())).await?)
}

/// Ends the session. The server must answer 2xx with a JSON body; the
/// caller redirects home afterwards.
pub async fn logout() -> Result<(), ApiError> {
    let resp = send(&Endpoint::Logout).await?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let text = read_text(&resp).await?;
    serde_json::from_str::<serde_json::Value>(&text)
        .map(|_| ())
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub fn redirect(path: &str) -> Result<(), ApiError> {
    window()?
        .location()
        .set_href(path)
        .map_err(|_| ApiError::Unavailable("location"))
}

/// Signed-in user id, as the server templates left it in session storage.
pub fn current_user_id() -> Option<i64> {
    let storage = web_sys::window()?.session_storage().ok()??;
    let raw = storage.get_item(USER_ID_KEY).ok()??;
    raw.trim().parse().ok()
}

pub fn page_marker() -> Option<String> {
    web_sys::window()?
        .document()?
        .body()?
        .get_attribute(PAGE_ATTRIBUTE)
}

/// Writes a label and a structured value to the console, so records show
/// up as inspectable objects rather than strings.
pub fn console_dump<T: Serialize>(label: &str, value: &T) {
    match serde_wasm_bindgen::to_value(value) {
        Ok(js) => web_sys::console::log_2(&JsValue::from_str(label), &js),
        Err(e) => warn!("{label} (unserializable: {e})"),
    }
}
