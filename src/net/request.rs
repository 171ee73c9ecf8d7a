//! Request descriptors for the JSON client wrapper.
//!
//! DESIGN
//! ======
//! A request stays plain data until a transport sends it. Header merging,
//! body encoding, and credential selection all happen in `prepare`, so the
//! rules can be checked without a browser.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use serde_json::Value;

use super::transport::TransportError;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP method for an API call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// Which credential an endpoint relies on.
///
/// The backend accepts either the `session` cookie or a bearer token and
/// prefers the bearer header when both are present, so a request states its
/// expectation instead of sending both by accident.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Ambient session cookie only.
    #[default]
    SessionCookie,
    /// Session cookie plus `Authorization: Bearer <token>` when a token is cached.
    BearerToken,
}

/// A JSON API call before it is handed to a transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    /// Caller headers. These win over defaults on a case-insensitive name match.
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub credential: CredentialPolicy,
}

impl ApiRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::default(),
            headers: Vec::new(),
            body: None,
            credential: CredentialPolicy::default(),
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(url).method(Method::Post)
    }

    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn credential(mut self, policy: CredentialPolicy) -> Self {
        self.credential = policy;
        self
    }

    /// Resolve headers and encode the body for sending.
    ///
    /// Header precedence, lowest first: the JSON content type, the bearer
    /// token (only under [`CredentialPolicy::BearerToken`]), then caller
    /// headers. A falsy body (`null`, `false`, `0`, `""`) is treated as no body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Encode`] if the body cannot be serialized.
    pub fn prepare(&self, token: Option<&str>) -> Result<PreparedRequest, TransportError> {
        let mut headers = vec![(CONTENT_TYPE.to_owned(), JSON_MEDIA_TYPE.to_owned())];
        if self.credential == CredentialPolicy::BearerToken {
            if let Some(token) = token.filter(|t| !t.is_empty()) {
                upsert_header(&mut headers, AUTHORIZATION, &format!("Bearer {token}"));
            }
        }
        for (name, value) in &self.headers {
            upsert_header(&mut headers, name, value);
        }

        let body = match self.body.as_ref().filter(|v| !is_falsy(v)) {
            Some(value) => Some(serde_json::to_string(value)?),
            None => None,
        };

        Ok(PreparedRequest { url: self.url.clone(), method: self.method, headers, body })
    }
}

/// Final wire form of a request: resolved headers and JSON body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedRequest {
    pub url: String,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl PreparedRequest {
    /// Case-insensitive header lookup.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn upsert_header(headers: &mut Vec<(String, String)>, name: &str, value: &str) {
    if let Some(slot) = headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
        *slot = (name.to_owned(), value.to_owned());
    } else {
        headers.push((name.to_owned(), value.to_owned()));
    }
}
