//! Normalized `{ok, status, data}` result of every API call.
//!
//! DESIGN
//! ======
//! Classification is a pure function of the raw response. Only a body whose
//! content type declares JSON is parsed; anything else, or JSON that fails to
//! parse, becomes an empty object.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::request::JSON_MEDIA_TYPE;
use super::transport::RawResponse;

#[derive(Clone, Debug, PartialEq)]
pub struct Envelope {
    /// `true` iff `status` is in `200..=299`.
    pub ok: bool,
    pub status: u16,
    pub data: Value,
}

impl Envelope {
    #[must_use]
    pub fn from_raw(raw: &RawResponse) -> Self {
        let data = if is_json_content_type(raw.content_type.as_deref()) {
            parse_json_body(&raw.body)
        } else {
            empty_object()
        };
        Self { ok: is_success(raw.status), status: raw.status, data }
    }

    /// Human-readable error detail from the body.
    ///
    /// A string `detail` is returned as-is. A list `detail` (validation
    /// errors) is flattened by joining each entry's `msg`.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self.data.get("detail")? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .filter(|msg| !msg.is_empty())
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }

    /// Decode the body into a typed value, `None` if it does not fit.
    #[must_use]
    pub fn decode<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_value(self.data.clone()).ok()
    }
}

#[must_use]
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Whether a `Content-Type` header value declares a JSON body.
#[must_use]
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains(JSON_MEDIA_TYPE))
}

fn parse_json_body(body: &str) -> Value {
    match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("declared JSON body failed to parse: {e}");
            empty_object()
        }
    }
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}
