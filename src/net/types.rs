//! Wire DTOs for the auth endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Identity id the backend reports when no credential is present.
pub const PUBLIC_USER_ID: &str = "public";

/// Current-session identity from `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
}

impl Identity {
    /// True for a real signed-in user: both fields present and the id is not
    /// the anonymous sentinel.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.email.is_empty() && !self.id.is_empty() && self.id != PUBLIC_USER_ID
    }
}

/// `{email, password}` payload shared by login and register.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` body. Only the token is consumed here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        // Zero reads as "no id", like a falsy id in the browser.
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => Ok(String::new()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(D::Error::custom(format!("expected string or number id, got {other}"))),
    }
}
