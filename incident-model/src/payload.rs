use crate::dto::{Incident, Response, ResponsesEnvelope};
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Extracts the message of an `{ "error": "..." }` body, if that is what
/// the server sent.
pub fn server_error(value: &Value) -> Option<&str> {
    value.get("error").and_then(Value::as_str)
}

pub fn decode_payload<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    if let Some(message) = server_error(&value) {
        return Err(ApiError::Server(message.to_string()));
    }
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Parses a response body, keeping the HTTP status in play: a failed
/// request is still decoded when its body is an `{error}` object, which the
/// server sends alongside 401.
pub fn parse_body(text: &str, ok: bool, status: u16) -> Result<Value, ApiError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) if ok || server_error(&value).is_some() => Ok(value),
        Ok(_) => Err(ApiError::Status(status)),
        Err(_) if !ok => Err(ApiError::Status(status)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

pub fn decode_incidents(value: Value) -> Result<Vec<Incident>, ApiError> {
    decode_payload(value)
}

pub fn decode_responses(value: Value) -> Result<Vec<Response>, ApiError> {
    decode_payload::<ResponsesEnvelope>(value).map(|env| env.responses)
}
